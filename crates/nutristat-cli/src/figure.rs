//! Plot descriptions handed to the figure viewer.

use nutristat_stats::boxplot::BoxPlotSummary;
use nutristat_survey::{column::Column, record::Dataset};

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Box-and-whisker plot of one column. `None` when the group is empty.
    BoxPlot {
        title: String,
        summary: Option<BoxPlotSummary>,
    },
    /// Scatter plot of two columns.
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<(f64, f64)>,
    },
}

impl Figure {
    #[must_use]
    pub fn box_plot(title: impl Into<String>, values: Vec<f64>) -> Self {
        Self::BoxPlot {
            title: title.into(),
            summary: BoxPlotSummary::new(values),
        }
    }

    /// Scatter plot titled `"<y> vs <x>"`, one point per row.
    #[must_use]
    pub fn scatter(dataset: &Dataset, x: Column, y: Column) -> Self {
        let points = dataset
            .records()
            .iter()
            .map(|r| (r.value(x), r.value(y)))
            .collect();
        Self::Scatter {
            title: format!("{y} vs {x}"),
            x_label: x.header().to_owned(),
            y_label: y.header().to_owned(),
            points,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::BoxPlot { title, .. } | Self::Scatter { title, .. } => title,
        }
    }
}

/// Axis bounds covering `low..=high` with a 5% margin on each side.
///
/// Degenerate ranges are widened so the axis never collapses; non-finite
/// input falls back to `[0, 1]`.
#[must_use]
pub fn padded_bounds(low: f64, high: f64) -> [f64; 2] {
    if !low.is_finite() || !high.is_finite() || low > high {
        return [0.0, 1.0];
    }
    let span = high - low;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        low.abs().max(1.0) * 0.05
    };
    [low - pad, high + pad]
}

/// Bounds of the finite values yielded by `values`, padded.
#[must_use]
pub fn data_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (low, high) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    padded_bounds(low, high)
}

/// `count` evenly spaced tick labels across `bounds`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn tick_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    let steps = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let v = bounds[0] + (bounds[1] - bounds[0]) * (i as f64) / steps;
            format!("{v:.2}")
        })
        .collect()
}
