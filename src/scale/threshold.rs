use std::fmt;

use super::{Scale, Thresholded};
use crate::array::bisect;
use crate::error::{Result, ScaleError};

/// Buckets a continuous input by sorted cut points.
///
/// `n` thresholds split the number line into `n + 1` buckets, one per range
/// value. A value equal to a threshold falls into the bucket *below* it.
/// When the range is shorter than `thresholds + 1`, every bucket past the
/// end of the range reuses the last range value.
///
/// Three constructors share this type:
///
/// - [`Threshold::new`] takes the cut points as given;
/// - [`Threshold::quantize`] splits a `(d0, d1)` interval into equal-width
///   buckets;
/// - [`Threshold::quantile`] splits a data sample into buckets holding
///   roughly equal counts.
///
/// # Examples
///
/// ```rust
/// use skala::{Scale, Thresholded, scale::Threshold};
///
/// let scale = Threshold::new(vec![0.0, 10.0, 20.0], vec!["low", "medium", "high", "very high"]).unwrap();
/// assert_eq!(scale.apply(&-5.0), "low");
/// assert_eq!(scale.apply(&10.0), "medium");
/// assert_eq!(scale.apply(&25.0), "very high");
///
/// let scale = Threshold::quantize((0.0, 100.0), vec!["a", "b", "c", "d"]).unwrap();
/// assert_eq!(scale.thresholds(), [25.0, 50.0, 75.0]);
/// ```
#[derive(Clone)]
pub struct Threshold<V> {
    thresholds: Vec<f64>,
    range: Vec<V>,
    // Highest range index reachable
    limit: usize,
}

impl<V> Threshold<V> {
    /// Threshold scale over ascending cut points.
    ///
    /// Fails with [`ScaleError::EmptyRange`] when `range` is empty.
    pub fn new(thresholds: Vec<f64>, range: Vec<V>) -> Result<Self> {
        if range.is_empty() {
            log::debug!("rejecting threshold scale with an empty range");
            return Err(ScaleError::EmptyRange);
        }

        let limit = thresholds.len().min(range.len() - 1);
        Ok(Self { thresholds, range, limit })
    }

    /// `range.len()` equal-width buckets over `(d0, d1)`.
    pub fn quantize(domain: (f64, f64), range: Vec<V>) -> Result<Self> {
        let (d0, d1) = domain;
        let buckets = range.len();
        let step = (d1 - d0) / buckets as f64;
        let thresholds = (1..buckets).map(|i| d0 + step * i as f64).collect();

        Self::new(thresholds, range)
    }

    /// `range.len()` buckets holding roughly equal shares of `sample`.
    ///
    /// Cut points are interpolated between the neighbouring ranks of the
    /// sorted sample, so they need not be sample values. An empty sample
    /// yields no cut points and every input maps to `range[0]`.
    ///
    /// ```rust
    /// use skala::{Thresholded, scale::Threshold};
    ///
    /// let sample: Vec<f64> = (1..=10).map(f64::from).collect();
    /// let scale = Threshold::quantile(sample, vec!["s", "m", "l", "xl"]).unwrap();
    /// assert_eq!(scale.thresholds(), [3.25, 5.5, 7.75]);
    /// ```
    pub fn quantile(mut sample: Vec<f64>, range: Vec<V>) -> Result<Self> {
        sample.sort_unstable_by(f64::total_cmp);
        let thresholds = quantile_thresholds(&sample, range.len());

        Self::new(thresholds, range)
    }

    pub fn range(&self) -> &[V] {
        &self.range
    }

    fn get(&self, value: f64) -> &V {
        let index = bisect(&self.thresholds, &value);
        &self.range[index.min(self.limit)]
    }
}

fn quantile_thresholds(sorted: &[f64], buckets: usize) -> Vec<f64> {
    let Some(last) = sorted.len().checked_sub(1) else {
        return Vec::new();
    };

    let rank_step = last as f64 / buckets as f64;
    (1..buckets)
        .map(|i| {
            let rank = rank_step * i as f64;
            let lower = (rank.floor() as usize).min(last);
            let upper = (lower + 1).min(last);
            let (lo, hi) = (sorted[lower], sorted[upper]);
            lo + (hi - lo) * (rank - lower as f64)
        })
        .collect()
}

impl<V: Clone> Scale for Threshold<V> {
    type Input = f64;
    type Output = V;

    fn apply(&self, value: &f64) -> V {
        self.get(*value).clone()
    }
}

impl<V> Thresholded for Threshold<V> {
    fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

impl<V: fmt::Debug> fmt::Debug for Threshold<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Threshold")
            .field("thresholds", &self.thresholds)
            .field("range", &self.range)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_threshold_buckets() {
        let scale = Threshold::new(vec![0.0, 10.0, 20.0], vec!["low", "medium", "high", "very high"]).unwrap();

        assert_eq!(scale.apply(&-5.0), "low");
        assert_eq!(scale.apply(&0.0), "low");
        assert_eq!(scale.apply(&5.0), "medium");
        assert_eq!(scale.apply(&10.0), "medium");
        assert_eq!(scale.apply(&15.0), "high");
        assert_eq!(scale.apply(&20.0), "high");
        assert_eq!(scale.apply(&25.0), "very high");
        assert_eq!(scale.thresholds(), [0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_threshold_no_cut_points() {
        let scale = Threshold::new(vec![], vec!["single"]).unwrap();

        assert_eq!(scale.apply(&-100.0), "single");
        assert_eq!(scale.apply(&0.0), "single");
        assert_eq!(scale.apply(&100.0), "single");
    }

    #[test]
    fn test_threshold_single_cut_point() {
        let scale = Threshold::new(vec![50.0], vec!["below", "above"]).unwrap();

        assert_eq!(scale.apply(&49.0), "below");
        assert_eq!(scale.apply(&50.0), "below");
        assert_eq!(scale.apply(&51.0), "above");
    }

    #[test]
    fn test_threshold_short_range_clamps() {
        let scale = Threshold::new(vec![10.0, 20.0, 30.0, 40.0], vec!['a', 'b', 'c']).unwrap();
        let mapped: Vec<char> = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0]
            .iter()
            .map(|value| scale.apply(value))
            .collect();

        assert_eq!(mapped, vec!['a', 'a', 'b', 'b', 'c', 'c', 'c', 'c', 'c']);
        assert_eq!(scale.thresholds(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_threshold_empty_range_rejected() {
        let result = Threshold::<u8>::new(vec![1.0], vec![]);
        assert_eq!(result.unwrap_err(), ScaleError::EmptyRange);

        assert!(Threshold::<u8>::quantize((0.0, 1.0), vec![]).is_err());
        assert!(Threshold::<u8>::quantile(vec![1.0, 2.0], vec![]).is_err());
    }

    #[test]
    fn test_quantize_buckets() {
        let scale = Threshold::quantize((0.0, 100.0), vec!["a", "b", "c", "d"]).unwrap();

        assert_eq!(scale.thresholds(), [25.0, 50.0, 75.0]);
        assert_eq!(scale.apply(&-10.0), "a");
        assert_eq!(scale.apply(&25.0), "a");
        assert_eq!(scale.apply(&50.0), "b");
        assert_eq!(scale.apply(&51.0), "c");
        assert_eq!(scale.apply(&76.0), "d");
        assert_eq!(scale.apply(&110.0), "d");
    }

    #[test]
    fn test_quantize_thirds() {
        let scale = Threshold::quantize((0.0, 90.0), vec!["a", "b", "c"]).unwrap();
        assert_eq!(scale.thresholds(), [30.0, 60.0]);
    }

    #[test]
    fn test_quantize_two_buckets() {
        let scale = Threshold::quantize((0.0, 100.0), vec!["a", "b"]).unwrap();

        assert_eq!(scale.apply(&50.0), "a");
        assert_eq!(scale.apply(&51.0), "b");
    }

    #[test]
    fn test_quantile_sorted_sample() {
        let sample: Vec<f64> = (1..=10).map(f64::from).collect();
        let scale = Threshold::quantile(sample, vec!["small", "medium", "large", "xlarge"]).unwrap();

        let thresholds = scale.thresholds();
        assert_eq!(thresholds.len(), 3);
        assert_close(thresholds[0], 3.25);
        assert_close(thresholds[1], 5.5);
        assert_close(thresholds[2], 7.75);

        assert_eq!(scale.apply(&3.0), "small");
        assert_eq!(scale.apply(&4.0), "medium");
        assert_eq!(scale.apply(&6.0), "large");
        assert_eq!(scale.apply(&8.0), "xlarge");
    }

    #[test]
    fn test_quantile_unsorted_sample() {
        let sample = vec![5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 10.0, 6.0];
        let scale = Threshold::quantile(sample, vec!["small", "medium", "large", "xlarge"]).unwrap();

        assert_eq!(scale.apply(&1.0), "small");
        assert_eq!(scale.apply(&5.0), "medium");
        assert_eq!(scale.apply(&8.0), "xlarge");
    }

    #[test]
    fn test_quantile_outside_sample() {
        let scale = Threshold::quantile(vec![10.0, 20.0, 30.0, 40.0, 50.0], vec!['a', 'b', 'c']).unwrap();

        assert_eq!(scale.apply(&0.0), 'a');
        assert_eq!(scale.apply(&60.0), 'c');
    }

    #[test]
    fn test_quantile_equal_values() {
        let scale = Threshold::quantile(vec![5.0; 5], vec!['a', 'b', 'c']).unwrap();

        assert_eq!(scale.thresholds(), [5.0, 5.0]);
        assert_eq!(scale.apply(&4.0), 'a');
        assert_eq!(scale.apply(&5.0), 'a');
        assert_eq!(scale.apply(&6.0), 'c');
    }

    #[test]
    fn test_quantile_tiny_samples() {
        let pair = Threshold::quantile(vec![1.0, 2.0], vec!["low", "high"]).unwrap();
        assert_eq!(pair.apply(&1.0), "low");
        assert_eq!(pair.apply(&2.0), "high");

        let single = Threshold::quantile(vec![7.0], vec!["low", "high"]).unwrap();
        assert_eq!(single.thresholds(), [7.0]);

        let empty = Threshold::quantile(vec![], vec!["only", "unused"]).unwrap();
        assert!(empty.thresholds().is_empty());
        assert_eq!(empty.apply(&1e9), "only");
    }
}
