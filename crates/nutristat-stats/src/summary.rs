use crate::{descriptive::DescriptiveStats, quantile::Quartiles};

/// Descriptive statistics and quartiles of one column.
///
/// This is the set of numbers a group report shows: mean, mode, median,
/// standard deviation, and the quartiles with their interquartile range.
///
/// # Examples
///
/// ```
/// use nutristat_stats::summary::ColumnSummary;
///
/// let summary = ColumnSummary::new([1.0, 2.0, 2.0, 3.0, 7.0]).unwrap();
/// assert_eq!(summary.stats.mean, 3.0);
/// assert_eq!(summary.stats.mode, 2.0);
/// assert_eq!(summary.quartiles.q1, 2.0);
/// assert_eq!(summary.quartiles.q3, 3.0);
/// assert_eq!(summary.iqr(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Central tendency and dispersion.
    pub stats: DescriptiveStats,
    /// First quartile, median and third quartile.
    pub quartiles: Quartiles,
}

impl ColumnSummary {
    /// Summarizes unsorted values.
    ///
    /// Returns `None` if the dataset is empty.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Summarizes pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::from_sorted(sorted_values)?;
        let quartiles = Quartiles::from_sorted(sorted_values)?;
        Some(Self { stats, quartiles })
    }

    /// Interquartile range.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.quartiles.iqr()
    }
}
