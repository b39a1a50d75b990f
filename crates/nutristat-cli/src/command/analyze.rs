use std::io::{self, IsTerminal as _, Write as _};

use anyhow::Context as _;
use nutristat_survey::{column::Column, impute, partition, record::Dataset};

use super::CommandArgs;
use crate::{figure::Figure, report, viewer};

/// Grouping the analysis is run on.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum PlotMode {
    /// The whole population.
    #[default]
    Population,
    /// Male and female respondents.
    Sex,
    /// The three calorie-intake bands.
    Calories,
    /// Scatter of the two selected columns; no statistics.
    Scatter,
}

/// One statistics block of the console report.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub title: String,
    /// Calorie range of the group, for band reports.
    pub calorie_range: Option<String>,
    pub rows: Dataset,
}

/// Everything a run prints and plots, in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub reports: Vec<GroupReport>,
    pub figures: Vec<Figure>,
}

impl Analysis {
    fn push(&mut self, title: String, figure_title: String, rows: Dataset, column: Column) {
        self.figures
            .push(Figure::box_plot(figure_title, rows.values(column)));
        self.reports.push(GroupReport {
            title,
            calorie_range: None,
            rows,
        });
    }
}

/// Builds the reports and figures `mode` calls for.
#[must_use]
pub fn plan(mode: PlotMode, dataset: &Dataset, column: Column, column2: Column) -> Analysis {
    let mut analysis = Analysis::default();
    match mode {
        PlotMode::Population => analysis.push(
            format!("{column} Statistics"),
            format!("Population {column}"),
            dataset.clone(),
            column,
        ),
        PlotMode::Sex => {
            let groups = partition::by_sex(dataset);
            analysis.push(
                format!("Male {column} Statistics"),
                format!("{column} Hombres"),
                groups.male,
                column,
            );
            analysis.push(
                format!("Female {column} Statistics"),
                format!("{column} Mujeres"),
                groups.female,
                column,
            );
        }
        PlotMode::Calories => {
            for (band, rows) in partition::by_calorie_band(dataset) {
                analysis.push(
                    format!("{band} {column} Statistics"),
                    format!("{column} {band}"),
                    rows,
                    column,
                );
                if let Some(report) = analysis.reports.last_mut() {
                    report.calorie_range = Some(band.describe_range());
                }
            }
        }
        PlotMode::Scatter => analysis
            .figures
            .push(Figure::scatter(dataset, column, column2)),
    }
    analysis
}

/// Sentinel cell counts of `columns`, skipping repeated columns.
fn missing_cells(dataset: &Dataset, columns: &[Column], sentinel: f64) -> Vec<(Column, usize)> {
    let mut counts: Vec<(Column, usize)> = Vec::with_capacity(columns.len());
    for &column in columns {
        if counts.iter().all(|&(c, _)| c != column) {
            counts.push((column, dataset.missing_count(column, sentinel)));
        }
    }
    counts
}

pub(super) fn run(args: &CommandArgs) -> anyhow::Result<()> {
    let CommandArgs {
        file,
        column,
        column2,
        statistic,
        plot,
        sentinel,
        no_plot,
        ..
    } = args;

    tracing::info!(path = %file.display(), "loading survey");
    let mut dataset = Dataset::load(file)
        .with_context(|| format!("Failed to load survey from {}", file.display()))?;
    tracing::info!(rows = dataset.len(), "survey loaded");

    let watched = [*column, *column2];
    for (column, cells) in missing_cells(&dataset, &watched, *sentinel) {
        tracing::info!(%column, cells, "missing values found");
    }

    let outcome = impute::impute(&mut dataset, *statistic, &watched, *sentinel);
    if outcome.removed_rows > 0 {
        tracing::info!(rows = outcome.removed_rows, "removed rows with missing values");
    }
    for replacement in &outcome.replacements {
        tracing::info!(
            column = %replacement.column,
            cells = replacement.cells,
            value = replacement.value,
            "replaced missing values with the {statistic}"
        );
    }
    for column in &outcome.unresolved {
        tracing::warn!(%column, "no observed values, missing cells left as {sentinel}");
    }

    let analysis = plan(*plot, &dataset, *column, *column2);

    let mut stdout = io::stdout().lock();
    for group in &analysis.reports {
        if let Some(range) = &group.calorie_range {
            tracing::debug!(group = %group.title, range = %range, "calorie band");
        }
        report::write_statistics(&mut stdout, &group.title, &group.rows, *column)
            .context("Failed to write statistics")?;
    }
    stdout.flush().context("Failed to flush stdout")?;
    drop(stdout);

    if *no_plot {
        return Ok(());
    }
    if !io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, skipping plots");
        return Ok(());
    }
    tracing::debug!(
        figures = ?analysis.figures.iter().map(Figure::title).collect::<Vec<_>>(),
        "opening figure viewer"
    );
    viewer::run(analysis.figures).context("Failed to run the figure viewer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use nutristat_survey::{
        column::Sex,
        record::{Record, SENTINEL},
    };

    use super::*;

    fn sample() -> Dataset {
        [
            (1.0, 900.0, Sex::Male),
            (2.0, 1200.0, Sex::Female),
            (3.0, 1500.0, Sex::Male),
            (4.0, 2000.0, Sex::Female),
            (5.0, 2100.0, Sex::Unknown),
        ]
        .into_iter()
        .map(|(alcohol, calories, sex)| Record {
            alcohol,
            saturated_fat: 20.0,
            calories,
            sex,
        })
        .collect()
    }

    fn titles(analysis: &Analysis) -> (Vec<&str>, Vec<&str>) {
        (
            analysis.reports.iter().map(|r| r.title.as_str()).collect(),
            analysis.figures.iter().map(Figure::title).collect(),
        )
    }

    #[test]
    fn test_parse_plot_mode() {
        assert_eq!("population".parse::<PlotMode>().unwrap(), PlotMode::Population);
        assert_eq!("sex".parse::<PlotMode>().unwrap(), PlotMode::Sex);
        assert_eq!("calories".parse::<PlotMode>().unwrap(), PlotMode::Calories);
        assert_eq!("scatter".parse::<PlotMode>().unwrap(), PlotMode::Scatter);
        assert!("histogram".parse::<PlotMode>().is_err());
    }

    #[test]
    fn test_population() {
        let dataset = sample();
        let analysis = plan(PlotMode::Population, &dataset, Column::Alcohol, Column::Calories);
        assert_eq!(
            titles(&analysis),
            (vec!["Alcohol Statistics"], vec!["Population Alcohol"])
        );
        assert_eq!(analysis.reports[0].rows, dataset);
    }

    #[test]
    fn test_sex() {
        let analysis = plan(PlotMode::Sex, &sample(), Column::Alcohol, Column::Calories);
        assert_eq!(
            titles(&analysis),
            (
                vec!["Male Alcohol Statistics", "Female Alcohol Statistics"],
                vec!["Alcohol Hombres", "Alcohol Mujeres"]
            )
        );
        assert_eq!(analysis.reports[0].rows.values(Column::Alcohol), vec![1.0, 3.0]);
        assert_eq!(analysis.reports[1].rows.values(Column::Alcohol), vec![2.0, 4.0]);
    }

    #[test]
    fn test_calories() {
        let analysis = plan(PlotMode::Calories, &sample(), Column::SaturatedFat, Column::Calories);
        assert_eq!(
            titles(&analysis),
            (
                vec![
                    "CATE 1 Grasas_sat Statistics",
                    "CATE 2 Grasas_sat Statistics",
                    "CATE 3 Grasas_sat Statistics",
                ],
                vec!["Grasas_sat CATE 1", "Grasas_sat CATE 2", "Grasas_sat CATE 3"]
            )
        );
        let sizes = analysis
            .reports
            .iter()
            .map(|r| r.rows.len())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![1, 2, 2]);
        let ranges = analysis
            .reports
            .iter()
            .map(|r| r.calorie_range.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(
            ranges,
            vec![Some("<= 1100"), Some("(1100, 1700]"), Some("> 1700")]
        );
    }

    #[test]
    fn test_only_band_reports_carry_a_range() {
        let analysis = plan(PlotMode::Sex, &sample(), Column::Alcohol, Column::Calories);
        assert!(analysis.reports.iter().all(|r| r.calorie_range.is_none()));
    }

    #[test]
    fn test_missing_cells() {
        let missing = Record {
            alcohol: SENTINEL,
            saturated_fat: SENTINEL,
            calories: 1000.0,
            sex: Sex::Male,
        };
        let dataset: Dataset = sample().records().iter().cloned().chain([missing]).collect();
        assert_eq!(
            missing_cells(
                &dataset,
                &[Column::Alcohol, Column::Calories, Column::Alcohol],
                SENTINEL
            ),
            vec![(Column::Alcohol, 1), (Column::Calories, 0)]
        );
    }

    #[test]
    fn test_scatter_has_no_reports() {
        let analysis = plan(PlotMode::Scatter, &sample(), Column::Alcohol, Column::Calories);
        assert!(analysis.reports.is_empty());
        assert_eq!(analysis.figures.len(), 1);
        assert_eq!(analysis.figures[0].title(), "Calorías vs Alcohol");
    }

    #[test]
    fn test_empty_group_still_gets_a_figure() {
        let dataset = sample().filter(|r| r.sex.is_male());
        let analysis = plan(PlotMode::Sex, &dataset, Column::Alcohol, Column::Calories);
        assert!(analysis.reports[1].rows.is_empty());
        assert_eq!(
            analysis.figures[1],
            Figure::BoxPlot {
                title: "Alcohol Mujeres".into(),
                summary: None,
            }
        );
    }
}
