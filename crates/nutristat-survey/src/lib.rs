//! The nutrition survey table and the operations the analysis runs on it.
//!
//! # Overview
//!
//! The survey records, per respondent, alcohol consumption, saturated fat
//! intake, caloric intake and sex. Missing measurements are coded with a
//! sentinel value ([`record::SENTINEL`], `999.99`).
//!
//! A typical run goes through these steps:
//!
//! 1. **Load** ([`record::Dataset::load`]): read the table from a workbook or CSV file
//! 2. **Impute** ([`impute::impute`]): replace sentinel cells with a statistic, or drop the rows
//! 3. **Partition** ([`partition`]): group rows by sex or by calorie band
//! 4. **Summarize**: compute statistics per group with [`nutristat_stats`]
//!
//! # Examples
//!
//! ```no_run
//! use nutristat_survey::{
//!     column::Column,
//!     impute::{Statistic, impute},
//!     partition,
//!     record::{Dataset, SENTINEL},
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let mut dataset = Dataset::load("Datos trabajo 1.xls")?;
//! impute(&mut dataset, Statistic::Mean, &[Column::Alcohol, Column::Calories], SENTINEL);
//!
//! for (band, rows) in partition::by_calorie_band(&dataset) {
//!     println!("{band}: {} rows", rows.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod column;
pub mod impute;
pub mod load;
pub mod partition;
pub mod record;
