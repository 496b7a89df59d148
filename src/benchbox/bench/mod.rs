//! Command timing comparison: sample collection, decoding, statistics, and
//! box plot rendering.

pub mod config;
pub mod error;
pub mod plot;
pub mod samples;
pub mod stats;

pub use config::{BenchConfig, CommandEntry, REUSE_FLAG};
pub use error::BenchError;
pub use plot::render_box_plot;
pub use samples::{read_samples, SampleCollector, SampleReader, SCRATCH_FILE, TIMING_HELPER};
pub use stats::ComparisonStats;
