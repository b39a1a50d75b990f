use crate::quantile::Quartiles;

/// Whisker reach, in multiples of the interquartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// The geometry of a box-and-whisker plot.
///
/// The box spans `q1..=q3` with a line at the median. Whiskers extend to the
/// most extreme data points that lie within `1.5 * IQR` of the box; anything
/// beyond is reported as an outlier and drawn individually.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSummary {
    /// Quartiles of the whole dataset (outliers included).
    pub quartiles: Quartiles,
    /// Lowest data point at or above `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Highest data point at or below `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Data points outside the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Computes the box-plot geometry from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nutristat_stats::boxplot::BoxPlotSummary;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    /// let summary = BoxPlotSummary::new(values).unwrap();
    /// assert_eq!(summary.upper_whisker, 5.0);
    /// assert_eq!(summary.outliers, vec![100.0]);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes the box-plot geometry from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let quartiles = Quartiles::from_sorted(sorted_values)?;
        let reach = WHISKER_IQR_FACTOR * quartiles.iqr();
        let low_fence = quartiles.q1 - reach;
        let high_fence = quartiles.q3 + reach;

        // Inliers are a contiguous run of the sorted slice
        let start = sorted_values.partition_point(|&v| v < low_fence);
        let end = sorted_values.partition_point(|&v| v <= high_fence);
        let (lower_whisker, upper_whisker) = if start < end {
            (sorted_values[start], sorted_values[end - 1])
        } else {
            // Only reachable with NaN quartiles; fall back to the box itself
            (quartiles.q1, quartiles.q3)
        };

        let outliers = sorted_values[..start]
            .iter()
            .chain(&sorted_values[end..])
            .copied()
            .collect();

        Some(Self {
            quartiles,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Smallest and largest values drawn, outliers included.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let low = self
            .outliers
            .first()
            .copied()
            .map_or(self.lower_whisker, |v| v.min(self.lower_whisker));
        let high = self
            .outliers
            .last()
            .copied()
            .map_or(self.upper_whisker, |v| v.max(self.upper_whisker));
        (low, high)
    }
}
