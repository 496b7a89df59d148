//! # benchbox
//!
//! Utilities for comparing shell-command timings and for generating demo
//! Kafka traffic, built on `rdkafka`, `tokio`, and `plotters`.
//!
//! Three binaries ship with the crate:
//!
//! - **`bench-plot`** runs labelled shell commands through an external timing
//!   helper, decodes the recorded `minutes,seconds` samples, and renders a
//!   box-and-whisker comparison of their user time.
//! - **`kafka-exercise`** publishes a batch of numbered text messages to a
//!   local broker and reads the topic back from the beginning, printing every
//!   record.
//! - **`scrape`** counts message-append records in a broker log file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use benchbox::{KafkaProducer, StringSerializer};
//!
//! # async fn demo() -> Result<(), benchbox::KafkaClientError> {
//! let producer = KafkaProducer::new("localhost:9092", "test")?;
//! producer
//!     .send_with_serializer(&"hello".to_string(), &StringSerializer)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod benchbox;

// Re-export the main API at the crate root for easy access
pub use benchbox::bench::{
    read_samples, render_box_plot, BenchConfig, BenchError, CommandEntry, ComparisonStats,
    SampleCollector, SampleReader,
};
pub use benchbox::kafka::{
    BytesSerializer, KafkaClientError, KafkaConsumer, KafkaProducer, Message, SerializationError,
    Serializer, StringSerializer,
};
pub use benchbox::scrape::{scan_log, AppendLineMatcher, ScanSummary, ScrapeError};
