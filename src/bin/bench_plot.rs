//! Box-and-whisker timing comparison for shell commands.
//!
//! Each labelled command is run through the `gen_command_times.sh` helper,
//! which records one `minutes,seconds` line per run into `cmd_times.tmp`;
//! the samples are then decoded and rendered as `<benchmark>.png` comparing
//! the two labelled sets.

use benchbox::benchbox::bench::{
    read_samples, render_box_plot, BenchConfig, ComparisonStats, SampleCollector,
};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "bench-plot")]
#[command(about = "Run labelled shell commands repeatedly and plot a timing comparison")]
struct Cli {
    /// Benchmark name, used as the prefix for sample files and the output image
    bench_name: String,

    /// Pass "yes" to reuse existing sample files instead of collecting new ones
    regen: String,

    /// Alternating <label> <shell-command> pairs; exactly two pairs
    /// (baseline first, candidate second) for the speedup statistics
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pairs: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = BenchConfig::from_pairs(&cli.bench_name, &cli.regen, &cli.pairs)?;

    if config.reuse_samples {
        info!("reusing existing sample files for '{}'", config.bench_name);
    } else {
        SampleCollector::default().collect(&config)?;
    }

    let mut samples = Vec::with_capacity(config.commands.len());
    for entry in &config.commands {
        samples.push((entry.label.clone(), read_samples(config.sample_file(entry))?));
    }

    let stats = ComparisonStats::from_samples(&samples)?;
    let out = render_box_plot(&config, &samples, &stats)?;
    println!("wrote {}", out.display());

    Ok(())
}
