use super::error::BenchError;

/// Summary statistics comparing a baseline ("old") sample set against a
/// candidate ("new") one.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonStats {
    pub baseline_mean: f64,
    pub candidate_mean: f64,
    /// `mean(old) - mean(new)`; positive when the candidate is faster
    pub avg_speedup: f64,
    /// `-100 * (mean(new) - mean(old)) / mean(old)`; positive when faster
    pub percent_change: f64,
}

impl ComparisonStats {
    /// Computes the comparison from labelled sample sets.
    ///
    /// Exactly two sets are required, in [baseline, candidate] order. Any
    /// other count is a configuration error; a prefix is never used
    /// silently. An empty set or a zero baseline mean is rejected rather
    /// than producing NaN or infinity.
    pub fn from_samples(samples: &[(String, Vec<f64>)]) -> Result<Self, BenchError> {
        let [(baseline_label, baseline), (candidate_label, candidate)] = samples else {
            return Err(BenchError::EntryCountMismatch {
                actual: samples.len(),
            });
        };

        let baseline_mean = mean(baseline_label, baseline)?;
        let candidate_mean = mean(candidate_label, candidate)?;
        if baseline_mean == 0.0 {
            return Err(BenchError::ZeroBaseline {
                label: baseline_label.clone(),
            });
        }

        Ok(Self {
            baseline_mean,
            candidate_mean,
            avg_speedup: baseline_mean - candidate_mean,
            percent_change: -((candidate_mean - baseline_mean) / baseline_mean) * 100.0,
        })
    }

    /// Plot title line.
    pub fn title(&self) -> String {
        format!(
            "{:.3} ({:.2} %) second average speedup",
            self.avg_speedup, self.percent_change
        )
    }
}

fn mean(label: &str, samples: &[f64]) -> Result<f64, BenchError> {
    if samples.is_empty() {
        return Err(BenchError::EmptySamples {
            label: label.to_string(),
        });
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}
