use crate::descriptive;

/// Pearson product-moment correlation coefficient of two paired series.
///
/// # Returns
///
/// * `None` - if the series differ in length or hold fewer than two pairs
/// * `Some(NaN)` - if either series has zero variance
/// * `Some(r)` - otherwise, with `r` in `-1.0..=1.0`
///
/// # Examples
///
/// ```
/// use nutristat_stats::correlation::pearson;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&x, &y[..3]), None);
/// ```
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mean_x = descriptive::mean(x.iter().copied())?;
    let mean_y = descriptive::mean(y.iter().copied())?;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return Some(f64::NAN);
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlations between named series.
///
/// Cells are indexed `(row, column)` in the order the series were supplied.
/// A cell is `NaN` when the coefficient is undefined for that pair.
///
/// # Examples
///
/// ```
/// use nutristat_stats::correlation::CorrelationMatrix;
///
/// let matrix = CorrelationMatrix::new([
///     ("a", vec![1.0, 2.0, 3.0]),
///     ("b", vec![3.0, 2.0, 1.0]),
/// ]);
/// assert_eq!(matrix.labels(), ["a", "b"]);
/// assert!((matrix.get(0, 1) + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    cells: Vec<f64>,
}

impl CorrelationMatrix {
    /// Builds the matrix from `(label, values)` pairs.
    #[must_use]
    pub fn new<I, L>(series: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        let (labels, values): (Vec<String>, Vec<Vec<f64>>) = series
            .into_iter()
            .map(|(label, values)| (label.into(), values))
            .unzip();
        let n = values.len();
        let mut cells = vec![f64::NAN; n * n];
        for i in 0..n {
            for j in i..n {
                let r = pearson(&values[i], &values[j]).unwrap_or(f64::NAN);
                cells[i * n + j] = r;
                cells[j * n + i] = r;
            }
        }
        Self { labels, cells }
    }

    /// Series labels, in row/column order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Coefficient between series `row` and series `column`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        let n = self.len();
        assert!(row < n && column < n, "index out of range");
        self.cells[row * n + column]
    }

    /// Iterates over rows as `(label, coefficients)`.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        let n = self.len().max(1);
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.chunks(n))
    }
}
