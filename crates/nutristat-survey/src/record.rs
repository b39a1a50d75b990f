use nutristat_stats::correlation::CorrelationMatrix;

use crate::column::{Column, Sex};

/// Value the survey uses to mark a missing measurement.
pub const SENTINEL: f64 = 999.99;

/// Returns `true` if `value` is the missing-value marker `sentinel`, up to
/// float round-off.
#[must_use]
pub fn is_sentinel(value: f64, sentinel: f64) -> bool {
    (value - sentinel).abs() <= sentinel.abs() * 1e-12
}

/// One survey respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub alcohol: f64,
    pub saturated_fat: f64,
    pub calories: f64,
    pub sex: Sex,
}

impl Record {
    #[must_use]
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Alcohol => self.alcohol,
            Column::SaturatedFat => self.saturated_fat,
            Column::Calories => self.calories,
        }
    }

    pub fn value_mut(&mut self, column: Column) -> &mut f64 {
        match column {
            Column::Alcohol => &mut self.alcohol,
            Column::SaturatedFat => &mut self.saturated_fat,
            Column::Calories => &mut self.calories,
        }
    }

    #[must_use]
    pub fn is_missing(&self, column: Column, sentinel: f64) -> bool {
        is_sentinel(self.value(column), sentinel)
    }
}

/// The survey table: an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of `column`, in row order.
    #[must_use]
    pub fn values(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// Rows matching `predicate`, as a new dataset.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Number of cells in `column` holding `sentinel`.
    #[must_use]
    pub fn missing_count(&self, column: Column, sentinel: f64) -> usize {
        self.records
            .iter()
            .filter(|r| r.is_missing(column, sentinel))
            .count()
    }

    /// Pearson correlations between all numeric columns.
    ///
    /// Labels are the spreadsheet headers, in [`Column::ALL`] order.
    #[must_use]
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        CorrelationMatrix::new(
            Column::ALL
                .into_iter()
                .map(|column| (column.header(), self.values(column))),
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(alcohol: f64, saturated_fat: f64, calories: f64, sex: Sex) -> Record {
        Record {
            alcohol,
            saturated_fat,
            calories,
            sex,
        }
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel(999.99, SENTINEL));
        assert!(is_sentinel("999.99".parse().unwrap(), SENTINEL));
        assert!(!is_sentinel(999.98, SENTINEL));
        assert!(!is_sentinel(f64::NAN, SENTINEL));
    }

    #[test]
    fn test_value_accessors() {
        let mut r = record(1.0, 2.0, 3.0, Sex::Male);
        assert_eq!(r.value(Column::SaturatedFat), 2.0);
        *r.value_mut(Column::Calories) = 1500.0;
        assert_eq!(r.calories, 1500.0);
        assert!(!r.is_missing(Column::Alcohol, SENTINEL));
    }

    #[test]
    fn test_filter_and_missing_count() {
        let dataset: Dataset = [
            record(SENTINEL, 2.0, 900.0, Sex::Male),
            record(1.0, SENTINEL, 1200.0, Sex::Female),
            record(SENTINEL, 4.0, 1800.0, Sex::Female),
        ]
        .into_iter()
        .collect();
        assert_eq!(dataset.missing_count(Column::Alcohol, SENTINEL), 2);
        assert_eq!(dataset.missing_count(Column::Calories, SENTINEL), 0);
        let women = dataset.filter(|r| r.sex == Sex::Female);
        assert_eq!(women.values(Column::Calories), vec![1200.0, 1800.0]);
    }

    #[test]
    fn test_correlation_matrix_labels() {
        let dataset = Dataset::new(vec![
            record(0.0, 10.0, 1000.0, Sex::Male),
            record(5.0, 20.0, 1500.0, Sex::Male),
            record(10.0, 15.0, 2000.0, Sex::Male),
        ]);
        let matrix = dataset.correlation_matrix();
        assert_eq!(matrix.labels(), ["Alcohol", "Grasas_sat", "Calorías"]);
        assert!((matrix.get(0, 2) - 1.0).abs() < 1e-12);
    }
}
