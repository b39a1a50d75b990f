/// First quartile, median and third quartile of a dataset.
///
/// # Examples
///
/// ```
/// use nutristat_stats::quantile::Quartiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let quartiles = Quartiles::new(&values).unwrap();
///
/// assert_eq!(quartiles.q1, 2.0);
/// assert_eq!(quartiles.median, 3.0);
/// assert_eq!(quartiles.q3, 4.0);
/// assert_eq!(quartiles.iqr(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes quartiles from sorted values.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return None;
        }
        Some(Self {
            q1: quantile(sorted_values, 0.25),
            median: quantile(sorted_values, 0.5),
            q3: quantile(sorted_values, 0.75),
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes a single quantile from sorted data.
///
/// Uses linear interpolation between the two closest ranks: the quantile `q`
/// sits at fractional position `(n - 1) * q`.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute, clamped to `0.0..=1.0`
///
/// # Returns
///
/// The interpolated value. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use nutristat_stats::quantile::quantile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), 2.5);
/// assert_eq!(quantile(&values, 0.25), 1.75);
/// assert_eq!(quantile(&values, 1.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], q: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let last = sorted_values.len() - 1;
    let pos = last as f64 * q.clamp(0.0, 1.0);
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(last);
    let frac = pos - pos.floor();
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(quantile(&[], 0.5).is_nan());
        assert!(Quartiles::new(&[]).is_none());
    }

    #[test]
    fn test_single_value() {
        let quartiles = Quartiles::new(&[42.0]).unwrap();
        assert_eq!(quartiles.q1, 42.0);
        assert_eq!(quartiles.q3, 42.0);
        assert_eq!(quartiles.iqr(), 0.0);
    }

    #[test]
    fn test_interpolates_between_ranks() {
        // Positions: q1 -> 1.25, q3 -> 3.75
        let quartiles = Quartiles::new(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]).unwrap();
        assert!((quartiles.q1 - 22.5).abs() < 1e-12);
        assert!((quartiles.median - 35.0).abs() < 1e-12);
        assert!((quartiles.q3 - 47.5).abs() < 1e-12);
        assert!((quartiles.iqr() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let quartiles = Quartiles::new(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(quartiles.median, 3.0);
    }

    #[test]
    fn test_extremes() {
        let values = [1.0, 5.0, 9.0];
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 1.0), 9.0);
        assert_eq!(quantile(&values, 2.0), 9.0);
    }
}
