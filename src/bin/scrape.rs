//! Counts message-append records in a Kafka broker log file.

use benchbox::benchbox::scrape::scan_log;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrape")]
#[command(about = "Count message-append records in a broker log")]
struct Cli {
    /// Broker log file to scan
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let summary = scan_log(&cli.log_file)?;
    println!(
        "{}/{} lines match in the file",
        summary.matching_lines, summary.total_lines
    );

    Ok(())
}
