use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while collecting samples, computing statistics, or
/// rendering the comparison plot.
///
/// Nothing here is retried or recovered; the binary reports the failure and
/// terminates.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Trailing arguments did not form complete `<label> <command>` pairs
    #[error("expected alternating <label> <command> pairs, got {arg_count} trailing arguments")]
    UnpairedArguments { arg_count: usize },

    /// No commands were supplied
    #[error("at least one <label> <command> pair is required")]
    NoCommands,

    /// The timing helper exited unsuccessfully
    #[error("timing helper failed for command '{command}' ({status})")]
    HelperFailed { command: String, status: ExitStatus },

    /// A sample file line was not a `minutes,seconds` record
    #[error("{}:{line}: malformed sample line '{content}': {reason}", .file.display())]
    MalformedSample {
        file: PathBuf,
        line: u64,
        content: String,
        reason: String,
    },

    /// Filesystem operation failed
    #[error("{operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The speedup comparison needs exactly two labelled sample sets
    #[error("speedup comparison requires exactly 2 labelled sample sets, got {actual}")]
    EntryCountMismatch { actual: usize },

    /// A sample file decoded to zero samples
    #[error("no samples for '{label}'")]
    EmptySamples { label: String },

    /// The baseline mean is zero, so percent change is undefined
    #[error("baseline '{label}' has a mean of zero; percent change is undefined")]
    ZeroBaseline { label: String },

    /// Chart rendering failed
    #[error("failed to render '{file}': {message}")]
    Render { file: String, message: String },
}
