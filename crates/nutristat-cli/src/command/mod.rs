use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use nutristat_survey::{column::Column, impute::Statistic, record::SENTINEL};
use tracing_subscriber::EnvFilter;

use self::analyze::PlotMode;

mod analyze;

/// Exploratory statistics for the nutrition survey.
///
/// Loads the survey spreadsheet, resolves missing values, prints descriptive
/// statistics for the selected grouping and shows the matching plots.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the survey spreadsheet (.xls, .xlsx, .ods or .csv)
    #[arg(short, long, value_name = "FILE", default_value = "Datos trabajo 1.xls")]
    pub file: PathBuf,

    /// Column to analyze [alcohol | fat | calories]
    #[arg(short, long, default_value = "alcohol")]
    pub column: Column,

    /// Column to compare against [alcohol | fat | calories]
    ///
    /// The short form is -C (capital C); -c2 is read as -c 2.
    #[arg(short = 'C', long, default_value = "calories")]
    pub column2: Column,

    /// How to handle missing values [mean | median | mode | remove]
    #[arg(short, long, default_value = "mean")]
    pub statistic: Statistic,

    /// What to plot [population | sex | calories | scatter]
    #[arg(short, long, default_value = "population")]
    pub plot: PlotMode,

    /// Value marking a missing measurement
    #[arg(long, default_value_t = SENTINEL, allow_negative_numbers = true)]
    pub sentinel: f64,

    /// Print the statistics without opening the figure viewer
    #[arg(long)]
    pub no_plot: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose, args.quiet);
    analyze::run(&args)
}

/// Human-readable logs on stderr. `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["nutristat"]).unwrap();
        assert_eq!(args.file, PathBuf::from("Datos trabajo 1.xls"));
        assert_eq!(args.column, Column::Alcohol);
        assert_eq!(args.column2, Column::Calories);
        assert_eq!(args.statistic, Statistic::Mean);
        assert_eq!(args.plot, PlotMode::Population);
        assert_eq!(args.sentinel.to_bits(), SENTINEL.to_bits());
        assert!(!args.no_plot);
    }

    #[test]
    fn test_all_flags() {
        let args = CommandArgs::try_parse_from([
            "nutristat",
            "-f",
            "survey.csv",
            "-c",
            "fat",
            "-C",
            "alcohol",
            "-s",
            "remove",
            "-p",
            "scatter",
            "--sentinel",
            "-1",
            "--no-plot",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.file, PathBuf::from("survey.csv"));
        assert_eq!(args.column, Column::SaturatedFat);
        assert_eq!(args.column2, Column::Alcohol);
        assert_eq!(args.statistic, Statistic::Remove);
        assert_eq!(args.plot, PlotMode::Scatter);
        assert_eq!(args.sentinel.to_bits(), (-1.0_f64).to_bits());
        assert!(args.no_plot);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        for flag in ["--column", "--column2"] {
            let err = CommandArgs::try_parse_from(["nutristat", flag, "protein"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert!(
                err.to_string()
                    .contains("option must be either [alcohol | fat | calories]")
            );
        }
    }

    #[test]
    fn test_invalid_statistic_and_plot_are_rejected() {
        assert!(CommandArgs::try_parse_from(["nutristat", "-s", "average"]).is_err());
        assert!(CommandArgs::try_parse_from(["nutristat", "-p", "histogram"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let err = CommandArgs::try_parse_from(["nutristat", "-v", "-q"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_column2_help_names_short_flag() {
        use clap::CommandFactory;
        let command = CommandArgs::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "column2")
            .unwrap();
        assert_eq!(arg.get_short(), Some('C'));
        let help = arg.get_long_help().unwrap().to_string();
        assert!(help.contains("-C (capital C)"));
        assert!(help.contains("-c2"));
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        CommandArgs::command().debug_assert();
    }
}
