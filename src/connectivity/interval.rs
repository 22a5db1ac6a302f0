//! Closed intervals on the line.

use std::fmt::Display;

/// Closed range `[start, end]` on the line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: f64, end: f64) -> Self {
        assert!(start <= end, "Interval start must be <= end");
        Self { start, end }
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.start, self.end)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 100.0);
        assert_eq!(interval.start(), 0.0);
        assert_eq!(interval.end(), 100.0);
    }

    #[test]
    #[should_panic(expected = "start must be <= end")]
    fn test_interval_rejects_reversed_bounds() {
        let _ = Interval::new(2.0, 1.0);
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::new(0.0, 1.5).to_string(), "[0.000, 1.500]");
    }
}
