use benchbox::benchbox::bench::{BenchConfig, BenchError, CommandEntry};
use std::path::PathBuf;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn parses_alternating_label_command_pairs() {
    let config = BenchConfig::from_pairs(
        "regex",
        "no",
        &args(&["old", "./run-old.sh", "new", "./run-new.sh"]),
    )
    .unwrap();

    assert_eq!(config.bench_name, "regex");
    assert!(!config.reuse_samples);
    assert_eq!(
        config.commands,
        vec![
            CommandEntry {
                label: "old".to_string(),
                command: "./run-old.sh".to_string(),
            },
            CommandEntry {
                label: "new".to_string(),
                command: "./run-new.sh".to_string(),
            },
        ]
    );
}

#[test]
fn reuse_flag_is_the_exact_literal_yes() {
    let pairs = args(&["old", "a", "new", "b"]);
    assert!(
        BenchConfig::from_pairs("bench", "yes", &pairs)
            .unwrap()
            .reuse_samples
    );
    for other in ["no", "YES", "y", "", "yes "] {
        assert!(
            !BenchConfig::from_pairs("bench", other, &pairs)
                .unwrap()
                .reuse_samples,
            "'{}' must not reuse samples",
            other
        );
    }
}

#[test]
fn odd_trailing_arguments_are_a_usage_error() {
    let err = BenchConfig::from_pairs("bench", "no", &args(&["old", "a", "new"])).unwrap_err();
    assert!(matches!(err, BenchError::UnpairedArguments { arg_count: 3 }));
}

#[test]
fn zero_pairs_are_a_usage_error() {
    let err = BenchConfig::from_pairs("bench", "no", &[]).unwrap_err();
    assert!(matches!(err, BenchError::NoCommands));
}

#[test]
fn derives_sample_and_plot_file_names() {
    let config =
        BenchConfig::from_pairs("regex", "no", &args(&["old", "a", "new", "b"])).unwrap();

    assert_eq!(
        config.sample_file(&config.commands[0]),
        PathBuf::from("regex-old.times")
    );
    assert_eq!(
        config.sample_file(&config.commands[1]),
        PathBuf::from("regex-new.times")
    );
    assert_eq!(config.plot_file(), PathBuf::from("regex.png"));
}
