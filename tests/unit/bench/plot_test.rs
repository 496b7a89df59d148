use benchbox::benchbox::bench::{render_box_plot, BenchConfig, ComparisonStats};
use std::fs;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn plot_fixture(bench_name: &str) -> (BenchConfig, Vec<(String, Vec<f64>)>, ComparisonStats) {
    let pairs: Vec<String> = ["old", "./run-old.sh", "new", "./run-new.sh"]
        .iter()
        .map(|value| value.to_string())
        .collect();
    let config = BenchConfig::from_pairs(bench_name, "yes", &pairs).unwrap();

    let samples = vec![
        ("old".to_string(), vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("new".to_string(), vec![0.5, 1.0, 1.5, 2.0, 2.5]),
    ];
    let stats = ComparisonStats::from_samples(&samples).unwrap();
    (config, samples, stats)
}

#[test]
fn writes_a_png_named_after_the_benchmark() {
    let dir = tempfile::tempdir().unwrap();
    let bench_name = dir.path().join("regex").display().to_string();
    let (config, samples, stats) = plot_fixture(&bench_name);

    let out = render_box_plot(&config, &samples, &stats).unwrap();

    assert_eq!(out, config.plot_file());
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(&bytes[..PNG_MAGIC.len()], PNG_MAGIC);
}

#[test]
fn overwrites_an_existing_plot() {
    let dir = tempfile::tempdir().unwrap();
    let bench_name = dir.path().join("regex").display().to_string();
    let (config, samples, stats) = plot_fixture(&bench_name);

    fs::write(config.plot_file(), b"stale contents").unwrap();
    render_box_plot(&config, &samples, &stats).unwrap();

    let bytes = fs::read(config.plot_file()).unwrap();
    assert_eq!(&bytes[..PNG_MAGIC.len()], PNG_MAGIC);
}
