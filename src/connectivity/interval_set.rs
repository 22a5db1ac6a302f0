//! A canonical container for non-overlapping, sorted intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval>` and guarantees the **canonical
//! invariant** at all times: intervals are sorted by start and no two intervals
//! overlap or touch (touching intervals are merged).
//!
//! Sets are built from arbitrary intervals through `From<Vec<Interval>>` or
//! `FromIterator`, which normalize once. Read access goes through
//! `Deref<Target = [Interval]>`.

use std::fmt::Display;
use std::ops::Deref;

use super::interval::Interval;

/// A sorted set of disjoint closed intervals.
///
/// Construction from unsorted input costs an O(n log n) sort and an O(n) merge.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalSet(Vec<Interval>);

impl IntervalSet {
    /// Sorts by start and merges overlapping or touching intervals in place.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_by(|a, b| a.start().total_cmp(&b.start()));
        let mut merged: Vec<Interval> = Vec::with_capacity(self.0.len());
        for interval in self.0.drain(..) {
            match merged.last_mut() {
                Some(last) if last.end() >= interval.start() => {
                    if interval.end() > last.end() {
                        *last = Interval::new(last.start(), interval.end());
                    }
                }
                _ => merged.push(interval),
            }
        }
        self.0 = merged;
    }
}

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl From<Vec<Interval>> for IntervalSet {
    /// Normalizes an unsorted `Vec` on construction.
    fn from(vec: Vec<Interval>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "}}")
    }
}
