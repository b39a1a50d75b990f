use std::{fmt, str::FromStr};

/// A numeric survey column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Alcohol consumption.
    Alcohol,
    /// Saturated fat intake.
    SaturatedFat,
    /// Caloric intake.
    Calories,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.header(), f)
    }
}

impl Column {
    /// All numeric columns, in spreadsheet order.
    pub const ALL: [Self; 3] = [Self::Alcohol, Self::SaturatedFat, Self::Calories];

    /// Header of this column in the survey spreadsheet.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Alcohol => "Alcohol",
            Self::SaturatedFat => "Grasas_sat",
            Self::Calories => "Calorías",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn arg_name(self) -> &'static str {
        match self {
            Self::Alcohol => "alcohol",
            Self::SaturatedFat => "fat",
            Self::Calories => "calories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid column '{input}', option must be either [alcohol | fat | calories]")]
pub struct ParseColumnError {
    pub input: String,
}

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.arg_name() == s)
            .ok_or_else(|| ParseColumnError {
                input: s.to_owned(),
            })
    }
}

/// Header of the sex column in the survey spreadsheet.
pub const SEX_HEADER: &str = "Sexo";

/// Respondent sex as coded in the `Sexo` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Sex {
    /// Coded `M`.
    Male,
    /// Coded `F`.
    Female,
    /// Blank or any other code.
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "?",
        };
        fmt::Display::fmt(code, f)
    }
}

impl Sex {
    /// Decodes a `Sexo` cell. Surrounding whitespace and case are ignored.
    ///
    /// ```
    /// # use nutristat_survey::column::Sex;
    /// assert_eq!(Sex::from_code("M"), Sex::Male);
    /// assert_eq!(Sex::from_code(" f "), Sex::Female);
    /// assert_eq!(Sex::from_code(""), Sex::Unknown);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            c if c.eq_ignore_ascii_case("m") => Self::Male,
            c if c.eq_ignore_ascii_case("f") => Self::Female,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_names() {
        assert_eq!("alcohol".parse::<Column>(), Ok(Column::Alcohol));
        assert_eq!("fat".parse::<Column>(), Ok(Column::SaturatedFat));
        assert_eq!("calories".parse::<Column>(), Ok(Column::Calories));
    }

    #[test]
    fn test_parse_rejects_headers_and_unknown_names() {
        let err = "Grasas_sat".parse::<Column>().unwrap_err();
        assert_eq!(err.input, "Grasas_sat");
        assert!(err.to_string().contains("[alcohol | fat | calories]"));
        assert!("protein".parse::<Column>().is_err());
    }

    #[test]
    fn test_display_uses_header() {
        assert_eq!(Column::Calories.to_string(), "Calorías");
        assert_eq!(format!("{:<10}|", Column::Alcohol), "Alcohol   |");
    }

    #[test]
    fn test_sex_codes() {
        assert!(Sex::from_code("m").is_male());
        assert!(Sex::from_code("F").is_female());
        assert!(Sex::from_code("X").is_unknown());
    }
}
