use regex::bytes::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Broker append-record line: captures the bracketed timestamp and the first
/// offset of the appended message set.
pub const APPEND_LINE_PATTERN: &str = r"\[(.*)\] .* with first offset: ([0-9]*).*";

/// Errors raised while scanning a broker log.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The line pattern did not compile
    #[error("invalid scrape pattern")]
    BadPattern(#[from] regex::Error),

    /// Log file could not be opened or read
    #[error("{operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Totals from one scan of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub matching_lines: u64,
    pub total_lines: u64,
}

/// Matches broker append-record lines and pulls out their timestamp and
/// first-offset captures. Works on raw bytes; broker logs are not guaranteed
/// to be valid UTF-8.
#[derive(Debug)]
pub struct AppendLineMatcher {
    re: Regex,
}

impl AppendLineMatcher {
    /// Matcher for the standard broker append-record line.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_pattern(APPEND_LINE_PATTERN)
    }

    /// Matcher for a custom line pattern with two capture groups.
    pub fn with_pattern(pattern: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }

    /// Timestamp and first-offset captures of an append-record line, or
    /// `None` for any other line.
    pub fn scrape_line<'a>(&self, line: &'a [u8]) -> Option<(&'a [u8], &'a [u8])> {
        let caps = self.re.captures(line)?;
        match (caps.get(1), caps.get(2)) {
            (Some(timestamp), Some(offset)) => Some((timestamp.as_bytes(), offset.as_bytes())),
            _ => None,
        }
    }

    /// Counts matching and total lines in `reader`.
    pub fn scan<R: BufRead>(&self, mut reader: R) -> Result<ScanSummary, ScrapeError> {
        let mut summary = ScanSummary {
            matching_lines: 0,
            total_lines: 0,
        };

        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| ScrapeError::Io {
                    operation: "reading log line".to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }

            summary.total_lines += 1;
            if self.scrape_line(&line).is_some() {
                summary.matching_lines += 1;
            }
        }

        Ok(summary)
    }
}

/// Scans a broker log file with the standard append-record matcher.
pub fn scan_log(path: impl AsRef<Path>) -> Result<ScanSummary, ScrapeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScrapeError::Io {
        operation: format!("opening log file '{}'", path.display()),
        source,
    })?;
    AppendLineMatcher::new()?.scan(BufReader::new(file))
}
