//! Grouping rows by sex and by calorie band.

use std::fmt;

use crate::record::Dataset;

/// Rows split by respondent sex. Rows of unknown sex are in neither group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SexGroups {
    pub male: Dataset,
    pub female: Dataset,
}

/// Splits `dataset` into male and female respondents.
#[must_use]
pub fn by_sex(dataset: &Dataset) -> SexGroups {
    SexGroups {
        male: dataset.filter(|r| r.sex.is_male()),
        female: dataset.filter(|r| r.sex.is_female()),
    }
}

/// Calorie-intake band ("CATE").
///
/// | band   | calories              |
/// |--------|-----------------------|
/// | CATE 1 | `<= 1100`             |
/// | CATE 2 | `> 1100` and `<= 1700`|
/// | CATE 3 | `> 1700`              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalorieBand {
    Cate1,
    Cate2,
    Cate3,
}

impl fmt::Display for CalorieBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl CalorieBand {
    pub const ALL: [Self; 3] = [Self::Cate1, Self::Cate2, Self::Cate3];

    /// Upper bound (inclusive) of CATE 1.
    pub const CATE1_MAX: f64 = 1100.0;
    /// Upper bound (inclusive) of CATE 2.
    pub const CATE2_MAX: f64 = 1700.0;

    fn to_str(self) -> &'static str {
        match self {
            Self::Cate1 => "CATE 1",
            Self::Cate2 => "CATE 2",
            Self::Cate3 => "CATE 3",
        }
    }

    /// The band `calories` falls in.
    ///
    /// Every value maps to exactly one band; `NaN` lands in CATE 3 because it
    /// is not at or below either bound. The loader rejects non-finite cells,
    /// so loaded data never hits that case.
    ///
    /// ```
    /// # use nutristat_survey::partition::CalorieBand;
    /// assert_eq!(CalorieBand::of(1100.0), CalorieBand::Cate1);
    /// assert_eq!(CalorieBand::of(1100.5), CalorieBand::Cate2);
    /// assert_eq!(CalorieBand::of(1700.0), CalorieBand::Cate2);
    /// assert_eq!(CalorieBand::of(1700.5), CalorieBand::Cate3);
    /// ```
    #[must_use]
    pub fn of(calories: f64) -> Self {
        if calories <= Self::CATE1_MAX {
            Self::Cate1
        } else if calories <= Self::CATE2_MAX {
            Self::Cate2
        } else {
            Self::Cate3
        }
    }

    /// Human-readable calorie range of this band.
    #[must_use]
    pub fn describe_range(self) -> String {
        match self {
            Self::Cate1 => format!("<= {}", Self::CATE1_MAX),
            Self::Cate2 => format!("({}, {}]", Self::CATE1_MAX, Self::CATE2_MAX),
            Self::Cate3 => format!("> {}", Self::CATE2_MAX),
        }
    }

    /// Whether `calories` belongs to this band.
    #[must_use]
    pub fn contains(self, calories: f64) -> bool {
        Self::of(calories) == self
    }
}

/// Splits `dataset` into the three calorie bands, in band order.
#[must_use]
pub fn by_calorie_band(dataset: &Dataset) -> [(CalorieBand, Dataset); 3] {
    CalorieBand::ALL.map(|band| (band, dataset.filter(|r| band.contains(r.calories))))
}
