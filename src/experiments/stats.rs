//! Descriptive statistics over experiment samples.

use std::fmt;

/// Arithmetic mean. `None` when `data` is empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom (`0` for the population
/// variance, `1` for the sample variance).
///
/// `None` when `data` has no more than `ddof` samples.
pub fn variance(data: &[f64], ddof: usize) -> Option<f64> {
    if data.len() <= ddof {
        return None;
    }
    let mu = mean(data)?;
    let squares: f64 = data.iter().map(|x| (x - mu) * (x - mu)).sum();
    Some(squares / (data.len() - ddof) as f64)
}

/// Population standard deviation.
pub fn stdev(data: &[f64]) -> Option<f64> {
    variance(data, 0).map(f64::sqrt)
}

/// Summary of a set of samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarizes `data`. `None` when it is empty.
    pub fn from_samples(data: &[f64]) -> Option<Self> {
        let mean = mean(data)?;
        let stdev = stdev(data)?;
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: data.len(),
            mean,
            stdev,
            min,
            max,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ({} samples) ===", self.count)?;
        writeln!(f, "  Mean:    {:.4}", self.mean)?;
        writeln!(f, "  Stdev:   {:.4}", self.stdev)?;
        writeln!(f, "  Min:     {:.4}", self.min)?;
        write!(f, "  Max:     {:.4}", self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn mean_and_deviation() {
        assert_eq!(mean(&DATA), Some(5.0));
        assert_eq!(variance(&DATA, 0), Some(4.0));
        assert_eq!(stdev(&DATA), Some(2.0));
        assert_eq!(variance(&DATA, 1), Some(32.0 / 7.0));
    }

    #[test]
    fn empty_data() {
        assert_eq!(mean(&[]), None);
        assert_eq!(variance(&[1.0], 1), None);
        assert_eq!(Summary::from_samples(&[]), None);
    }

    #[test]
    fn summary() {
        let summary = Summary::from_samples(&DATA).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(
            summary.to_string(),
            "=== Summary (8 samples) ===\n  Mean:    5.0000\n  Stdev:   2.0000\n  Min:     2.0000\n  Max:     9.0000"
        );
    }
}
