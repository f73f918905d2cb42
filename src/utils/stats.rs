//! Descriptive statistics and ordered counting.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Quantile of pre-sorted values with linear interpolation between ranks
///
/// Returns `None` for an empty slice. `q` is clamped to `[0, 1]`.
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    #[allow(clippy::cast_precision_loss)]
    let position = q.clamp(0.0, 1.0) * last as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(last);
    #[allow(clippy::cast_precision_loss)]
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Five-number summary plus count and mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Quartiles {
    /// Summarize a set of values; NaNs are ignored
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        #[allow(clippy::cast_precision_loss)]
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Some(Self {
            count: sorted.len(),
            mean,
            min: sorted[0],
            q1: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q3: quantile(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Counter that remembers the order keys were first seen
///
/// Rankings produced from it are stable: equal counts keep first-appearance
/// order.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    index: FxHashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> CountTable<K> {
    /// Create an empty counter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a key
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Count `n` occurrences of a key
    pub fn add_n(&mut self, key: K, n: usize) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += n;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, n));
        }
    }

    /// Count for a key (zero when never seen)
    #[must_use]
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// Entries by descending count, ties in first-appearance order
    #[must_use]
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-count entries
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for CountTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 0.75), Some(3.25));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
        assert_eq!(quantile(&[7.0], 0.75), Some(7.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn quartiles_sort_and_skip_nan() {
        let q = Quartiles::from_values([10.0, f64::NAN, 0.0, 5.0, 20.0, 15.0]).unwrap();
        assert_eq!(q.count, 5);
        assert_eq!(q.min, 0.0);
        assert_eq!(q.q1, 5.0);
        assert_eq!(q.median, 10.0);
        assert_eq!(q.q3, 15.0);
        assert_eq!(q.max, 20.0);
        assert_eq!(q.mean, 10.0);
        assert!(Quartiles::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let counts: CountTable<&str> = ["b", "a", "c", "a", "c", "d"].into_iter().collect();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get(&"a"), 2);
        assert_eq!(counts.get(&"z"), 0);
        assert_eq!(counts.ranked(), vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
        assert_eq!(counts.top(1), vec![("a", 2)]);
    }
}
