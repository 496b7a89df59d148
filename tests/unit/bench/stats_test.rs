use benchbox::benchbox::bench::{BenchError, ComparisonStats};

fn labelled(label: &str, samples: &[f64]) -> (String, Vec<f64>) {
    (label.to_string(), samples.to_vec())
}

#[test]
fn computes_the_worked_example() {
    let stats = ComparisonStats::from_samples(&[
        labelled("old", &[1.0, 2.0, 3.0]),
        labelled("new", &[1.0, 1.0, 1.0]),
    ])
    .unwrap();

    assert_eq!(stats.baseline_mean, 2.0);
    assert_eq!(stats.candidate_mean, 1.0);
    assert_eq!(stats.avg_speedup, 1.0);
    assert_eq!(stats.percent_change, 50.0);
}

#[test]
fn halved_mean_is_a_fifty_percent_change() {
    let stats = ComparisonStats::from_samples(&[
        labelled("old", &[4.0, 6.0, 8.0]),
        labelled("new", &[2.0, 3.0, 4.0]),
    ])
    .unwrap();

    // candidate mean is half the baseline mean of 6.0
    assert!((stats.avg_speedup - 3.0).abs() < 1e-12);
    assert!((stats.percent_change - 50.0).abs() < 1e-12);
}

#[test]
fn slower_candidate_yields_negative_change() {
    let stats = ComparisonStats::from_samples(&[
        labelled("old", &[1.0, 1.0, 1.0]),
        labelled("new", &[2.0, 2.0, 2.0]),
    ])
    .unwrap();

    assert_eq!(stats.avg_speedup, -1.0);
    assert_eq!(stats.percent_change, -100.0);
}

#[test]
fn three_sample_sets_are_a_shape_error() {
    let err = ComparisonStats::from_samples(&[
        labelled("old", &[1.0]),
        labelled("new", &[1.0]),
        labelled("newer", &[1.0]),
    ])
    .unwrap_err();

    assert!(matches!(err, BenchError::EntryCountMismatch { actual: 3 }));
}

#[test]
fn one_sample_set_is_a_shape_error() {
    let err = ComparisonStats::from_samples(&[labelled("old", &[1.0])]).unwrap_err();
    assert!(matches!(err, BenchError::EntryCountMismatch { actual: 1 }));
}

#[test]
fn empty_candidate_samples_are_rejected() {
    let err = ComparisonStats::from_samples(&[
        labelled("old", &[1.0, 2.0]),
        labelled("new", &[]),
    ])
    .unwrap_err();

    match err {
        BenchError::EmptySamples { label } => assert_eq!(label, "new"),
        other => panic!("expected EmptySamples, got {:?}", other),
    }
}

#[test]
fn zero_baseline_mean_is_rejected() {
    let err = ComparisonStats::from_samples(&[
        labelled("old", &[0.0, 0.0]),
        labelled("new", &[1.0]),
    ])
    .unwrap_err();

    match err {
        BenchError::ZeroBaseline { label } => assert_eq!(label, "old"),
        other => panic!("expected ZeroBaseline, got {:?}", other),
    }
}

#[test]
fn title_shows_three_and_two_decimal_places() {
    let stats = ComparisonStats::from_samples(&[
        labelled("old", &[1.0, 2.0, 3.0]),
        labelled("new", &[1.0, 1.0, 1.0]),
    ])
    .unwrap();

    assert_eq!(stats.title(), "1.000 (50.00 %) second average speedup");
}
