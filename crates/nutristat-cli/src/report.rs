//! Console statistics blocks.

use std::io::{self, Write};

use nutristat_stats::{correlation::CorrelationMatrix, summary::ColumnSummary};
use nutristat_survey::{column::Column, record::Dataset};

const FRAME_WIDTH: usize = 42;

/// Writes the statistics block of `column` over `dataset`, titled `title`.
///
/// The block is framed by lines of `*` and holds the central tendency,
/// dispersion and quartiles of the column, followed by the correlation
/// matrix of all numeric columns of the group.
pub fn write_statistics<W>(
    out: &mut W,
    title: &str,
    dataset: &Dataset,
    column: Column,
) -> io::Result<()>
where
    W: Write,
{
    let frame = "*".repeat(FRAME_WIDTH);
    writeln!(out, "{frame}")?;
    writeln!(out, "{title}")?;
    writeln!(out)?;

    match ColumnSummary::new(dataset.values(column)) {
        Some(summary) => {
            writeln!(out, "Mean: {}", summary.stats.mean)?;
            writeln!(out, "Mode: {}", summary.stats.mode)?;
            writeln!(out, "Median: {}", summary.stats.median)?;
            writeln!(out, "Std. deviation: {}", summary.stats.std_dev)?;
            writeln!(
                out,
                "Q1: {} | IQR: {} | Q3: {}",
                summary.quartiles.q1,
                summary.iqr(),
                summary.quartiles.q3
            )?;
            writeln!(out, "Correlation:")?;
            write_matrix(out, &dataset.correlation_matrix())?;
        }
        None => writeln!(out, "(no rows)")?,
    }

    writeln!(out, "{frame}")?;
    Ok(())
}

fn write_matrix<W>(out: &mut W, matrix: &CorrelationMatrix) -> io::Result<()>
where
    W: Write,
{
    let width = matrix
        .labels()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    write!(out, "{:width$}", "")?;
    for label in matrix.labels() {
        write!(out, " {label:>12}")?;
    }
    writeln!(out)?;

    for (label, cells) in matrix.rows() {
        write!(out, "{label:<width$}")?;
        for r in cells {
            write!(out, " {r:>12.6}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nutristat_survey::{column::Sex, record::Record};

    use super::*;

    fn render(title: &str, dataset: &Dataset, column: Column) -> String {
        let mut buf = Vec::new();
        write_statistics(&mut buf, title, dataset, column).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn row(alcohol: f64, saturated_fat: f64, calories: f64) -> Record {
        Record {
            alcohol,
            saturated_fat,
            calories,
            sex: Sex::Male,
        }
    }

    #[test]
    fn test_statistics_block() {
        let dataset = Dataset::new(vec![
            row(1.0, 10.0, 1000.0),
            row(2.0, 30.0, 1500.0),
            row(2.0, 20.0, 2000.0),
            row(3.0, 40.0, 2500.0),
        ]);
        let text = render("Alcohol Statistics", &dataset, Column::Alcohol);
        let lines = text.lines().collect::<Vec<_>>();

        let frame = "*".repeat(42);
        assert_eq!(lines[0], frame);
        assert_eq!(lines[1], "Alcohol Statistics");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Mean: 2");
        assert_eq!(lines[4], "Mode: 2");
        assert_eq!(lines[5], "Median: 2");
        assert!(lines[6].starts_with("Std. deviation: 0.816496580927726"));
        assert_eq!(lines[7], "Q1: 1.75 | IQR: 0.5 | Q3: 2.25");
        assert_eq!(lines[8], "Correlation:");
        // Header plus one row per numeric column
        assert!(lines[9].contains("Grasas_sat"));
        assert!(lines[10].starts_with("Alcohol "));
        assert!(lines[10].contains("1.000000"));
        assert!(lines[12].starts_with("Calorías"));
        assert_eq!(lines[13], frame);
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn test_empty_group() {
        let text = render("Female Alcohol Statistics", &Dataset::default(), Column::Alcohol);
        let frame = "*".repeat(42);
        assert_eq!(
            text,
            format!("{frame}\nFemale Alcohol Statistics\n\n(no rows)\n{frame}\n")
        );
    }

    #[test]
    fn test_single_row_has_undefined_dispersion() {
        let dataset = Dataset::new(vec![row(4.0, 10.0, 1200.0)]);
        let text = render("Alcohol Statistics", &dataset, Column::Alcohol);
        assert!(text.contains("Std. deviation: NaN\n"));
        assert!(text.contains("Q1: 4 | IQR: 0 | Q3: 4\n"));
    }
}
