use super::config::{BenchConfig, CommandEntry};
use super::error::BenchError;
use log::info;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::process::Command;

/// External helper that runs a shell command repeatedly and records one
/// `minutes,seconds` line per run.
pub const TIMING_HELPER: &str = "./gen_command_times.sh";

/// Fixed scratch file the timing helper writes its records to.
pub const SCRATCH_FILE: &str = "cmd_times.tmp";

/// Runs the timing helper for each configured command and moves the scratch
/// file it produces into the per-label sample file.
///
/// Collection is strictly sequential and blocking, with no timeout: a hung
/// command hangs the whole run. No two concurrent collections may share a
/// scratch path.
pub struct SampleCollector {
    helper: PathBuf,
    scratch: PathBuf,
}

impl Default for SampleCollector {
    fn default() -> Self {
        Self::new(TIMING_HELPER, SCRATCH_FILE)
    }
}

impl SampleCollector {
    /// Collector with explicit helper and scratch paths.
    pub fn new(helper: impl Into<PathBuf>, scratch: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
            scratch: scratch.into(),
        }
    }

    /// Collects samples for every entry in order, overwriting prior sample
    /// files. A helper failure for any entry aborts the whole run, since a
    /// missing or partial sample file for one label invalidates the plot.
    pub fn collect(&self, config: &BenchConfig) -> Result<(), BenchError> {
        for entry in &config.commands {
            self.collect_entry(config, entry)?;
        }
        Ok(())
    }

    fn collect_entry(&self, config: &BenchConfig, entry: &CommandEntry) -> Result<(), BenchError> {
        let status = Command::new(&self.helper)
            .arg(&entry.command)
            .status()
            .map_err(|source| BenchError::Io {
                operation: format!("running timing helper '{}'", self.helper.display()),
                source,
            })?;
        if !status.success() {
            return Err(BenchError::HelperFailed {
                command: entry.command.clone(),
                status,
            });
        }

        let dest = config.sample_file(entry);
        fs::rename(&self.scratch, &dest).map_err(|source| BenchError::Io {
            operation: format!(
                "moving '{}' to '{}'",
                self.scratch.display(),
                dest.display()
            ),
            source,
        })?;
        info!("collected samples for '{}' into {}", entry.label, dest.display());
        Ok(())
    }
}

/// Lazy decoder for a sample file.
///
/// Yields one elapsed-seconds value per `minutes,seconds` line
/// (`minutes * 60 + seconds`). Malformed lines are hard errors carrying the
/// file and 1-based line number; nothing is skipped. Re-open the file to
/// restart the sequence.
pub struct SampleReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: u64,
}

impl SampleReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| BenchError::Io {
            operation: format!("opening sample file '{}'", path.display()),
            source,
        })?;
        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }

    fn malformed(&self, content: &str, reason: impl Into<String>) -> BenchError {
        BenchError::MalformedSample {
            file: self.path.clone(),
            line: self.line_no,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    fn decode(&self, line: &str) -> Result<f64, BenchError> {
        let (minutes, seconds) = line
            .split_once(',')
            .ok_or_else(|| self.malformed(line, "expected 'minutes,seconds'"))?;
        let minutes: f64 = minutes
            .trim()
            .parse()
            .map_err(|_| self.malformed(line, format!("'{}' is not a number", minutes.trim())))?;
        let seconds: f64 = seconds
            .trim()
            .parse()
            .map_err(|_| self.malformed(line, format!("'{}' is not a number", seconds.trim())))?;
        Ok(minutes * 60.0 + seconds)
    }
}

impl Iterator for SampleReader {
    type Item = Result<f64, BenchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(BenchError::Io {
                    operation: format!("reading sample file '{}'", self.path.display()),
                    source,
                }))
            }
        };
        self.line_no += 1;
        Some(self.decode(&line))
    }
}

/// Decodes a whole sample file into memory. Fails on the first malformed
/// line rather than returning a partial sequence.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<f64>, BenchError> {
    SampleReader::open(path)?.collect()
}
