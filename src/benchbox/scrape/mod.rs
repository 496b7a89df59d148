//! Broker log scraping: counts append records in a Kafka server log.
//!
//! A broker processing traffic from the exerciser logs one line per appended
//! message set; scanning those lines gives a quick view of how much of a log
//! file is message-append activity.

mod scanner;

pub use scanner::{scan_log, AppendLineMatcher, ScanSummary, ScrapeError, APPEND_LINE_PATTERN};
