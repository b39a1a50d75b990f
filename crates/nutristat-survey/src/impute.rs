//! Handling sentinel-coded missing values.
//!
//! Missing cells are either overwritten with a central-tendency statistic of
//! the column's observed values, or the affected rows are dropped.

use nutristat_stats::descriptive::DescriptiveStats;

use crate::{column::Column, record::Dataset};

/// How to deal with missing values in the watched columns.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum Statistic {
    /// Replace with the mean of the observed values.
    #[default]
    #[display("mean")]
    Mean,
    /// Replace with the median of the observed values.
    #[display("median")]
    Median,
    /// Replace with the most frequent observed value.
    #[display("mode")]
    Mode,
    /// Drop rows with a missing value in any watched column.
    #[display("remove")]
    Remove,
}

/// Cells of one column overwritten by [`impute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Replacement {
    pub column: Column,
    pub cells: usize,
    pub value: f64,
}

/// What [`impute`] changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImputeOutcome {
    /// Rows dropped in [`Statistic::Remove`] mode.
    pub removed_rows: usize,
    /// Per-column replacements, in processing order.
    pub replacements: Vec<Replacement>,
    /// Columns whose cells are all missing, so no replacement could be computed.
    pub unresolved: Vec<Column>,
}

/// The value `statistic` assigns to missing cells of `column`, computed over
/// the non-missing cells only.
///
/// Returns `None` for [`Statistic::Remove`] or when every cell is missing.
#[must_use]
pub fn replacement_value(
    dataset: &Dataset,
    statistic: Statistic,
    column: Column,
    sentinel: f64,
) -> Option<f64> {
    let observed = dataset
        .records()
        .iter()
        .filter(|r| !r.is_missing(column, sentinel))
        .map(|r| r.value(column));
    let stats = DescriptiveStats::new(observed)?;
    match statistic {
        Statistic::Mean => Some(stats.mean),
        Statistic::Median => Some(stats.median),
        Statistic::Mode => Some(stats.mode),
        Statistic::Remove => None,
    }
}

/// Resolves missing values in the `watched` columns according to `statistic`.
///
/// * [`Statistic::Remove`] keeps exactly the rows where no watched column
///   holds `sentinel`.
/// * Otherwise each watched column in turn has every `sentinel` cell
///   overwritten with [`replacement_value`] for that column. Columns that are
///   not watched are left as they are.
///
/// # Examples
///
/// ```
/// use nutristat_survey::{
///     column::{Column, Sex},
///     impute::{Statistic, impute},
///     record::{Dataset, Record, SENTINEL},
/// };
///
/// let row = |alcohol, calories| Record { alcohol, saturated_fat: 20.0, calories, sex: Sex::Male };
/// let mut dataset = Dataset::new(vec![row(2.0, 1000.0), row(SENTINEL, 1200.0), row(4.0, 1400.0)]);
///
/// let outcome = impute(&mut dataset, Statistic::Mean, &[Column::Alcohol], SENTINEL);
/// assert_eq!(dataset.values(Column::Alcohol), vec![2.0, 3.0, 4.0]);
/// assert_eq!(outcome.replacements[0].cells, 1);
/// ```
pub fn impute(
    dataset: &mut Dataset,
    statistic: Statistic,
    watched: &[Column],
    sentinel: f64,
) -> ImputeOutcome {
    let mut outcome = ImputeOutcome::default();

    if statistic == Statistic::Remove {
        let before = dataset.len();
        dataset
            .records_mut()
            .retain(|r| watched.iter().all(|&c| !r.is_missing(c, sentinel)));
        outcome.removed_rows = before - dataset.len();
        tracing::debug!(removed = outcome.removed_rows, "rows with missing values removed");
        return outcome;
    }

    let mut seen = Vec::with_capacity(watched.len());
    for &column in watched {
        if seen.contains(&column) {
            continue;
        }
        seen.push(column);

        let Some(value) = replacement_value(dataset, statistic, column, sentinel) else {
            tracing::warn!(%column, "every value is missing, nothing to impute from");
            outcome.unresolved.push(column);
            continue;
        };
        let mut cells = 0;
        for record in dataset.records_mut() {
            if record.is_missing(column, sentinel) {
                *record.value_mut(column) = value;
                cells += 1;
            }
        }
        tracing::debug!(%column, %statistic, cells, value, "missing values replaced");
        outcome.replacements.push(Replacement {
            column,
            cells,
            value,
        });
    }
    outcome
}
