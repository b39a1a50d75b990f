//! Statistical utilities for the nutristat survey analysis.
//!
//! This crate provides the numeric core of the tool:
//!
//! - **Descriptive statistics**: mean, median, mode, sample variance and standard deviation
//! - **Quantiles**: linearly interpolated quantiles and quartiles
//! - **Column summaries**: descriptive statistics combined with quartiles and IQR
//! - **Box plots**: box, whisker and outlier geometry
//! - **Correlation**: Pearson coefficients and correlation matrices
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`quantile`]: Quantile computation and quartiles
//! - [`summary`]: Per-column summary used by reports
//! - [`boxplot`]: Box-and-whisker geometry for plotting
//! - [`correlation`]: Pearson correlation between paired series
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use nutristat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing quartiles
//!
//! ```
//! use nutristat_stats::quantile::Quartiles;
//!
//! let quartiles = Quartiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(quartiles.iqr(), 2.0);
//! ```
//!
//! ## Correlating columns
//!
//! ```
//! use nutristat_stats::correlation::CorrelationMatrix;
//!
//! let matrix = CorrelationMatrix::new([
//!     ("alcohol", vec![0.0, 10.0, 20.0]),
//!     ("calories", vec![900.0, 1500.0, 2100.0]),
//! ]);
//! assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
//! ```

pub mod boxplot;
pub mod correlation;
pub mod descriptive;
pub mod quantile;
pub mod summary;
