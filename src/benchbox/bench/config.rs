use super::error::BenchError;
use std::path::PathBuf;

/// Literal value of the regen argument that makes a run reuse previously
/// collected sample files instead of collecting fresh ones.
pub const REUSE_FLAG: &str = "yes";

/// One labelled shell command to benchmark.
///
/// Ordering is significant: the first entry is the baseline ("old") and the
/// second the candidate ("new") in the speedup comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub label: String,
    pub command: String,
}

/// Immutable run configuration, built once from the command line and passed
/// by reference to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Prefix for sample files and the output image
    pub bench_name: String,
    /// Reuse existing sample files instead of collecting new ones
    pub reuse_samples: bool,
    /// Labelled commands in comparison order
    pub commands: Vec<CommandEntry>,
}

impl BenchConfig {
    /// Builds a config from the raw trailing `<label> <command>` arguments.
    pub fn from_pairs(bench_name: &str, regen: &str, pairs: &[String]) -> Result<Self, BenchError> {
        if pairs.len() % 2 != 0 {
            return Err(BenchError::UnpairedArguments {
                arg_count: pairs.len(),
            });
        }

        let commands: Vec<CommandEntry> = pairs
            .chunks(2)
            .map(|pair| CommandEntry {
                label: pair[0].clone(),
                command: pair[1].clone(),
            })
            .collect();
        if commands.is_empty() {
            return Err(BenchError::NoCommands);
        }

        Ok(Self {
            bench_name: bench_name.to_string(),
            reuse_samples: regen == REUSE_FLAG,
            commands,
        })
    }

    /// Sample file for one labelled command: `<bench_name>-<label>.times`
    pub fn sample_file(&self, entry: &CommandEntry) -> PathBuf {
        PathBuf::from(format!("{}-{}.times", self.bench_name, entry.label))
    }

    /// Output image: `<bench_name>.png`
    pub fn plot_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.png", self.bench_name))
    }
}
