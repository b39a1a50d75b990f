//! Reading the survey table from spreadsheet files.
//!
//! Workbooks (`.xls`, `.xlsx`, `.xlsm`, `.xlsb`, `.ods`) are read from their
//! first worksheet; `.csv` files are read as comma-separated text. In both
//! cases the first row holds the headers and columns are located by name, so
//! their order does not matter and extra columns are ignored.
//!
//! Blank numeric cells are read as [`SENTINEL`] and handled like any other
//! missing measurement. Non-finite numbers (`NaN`, `inf`) are rejected.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader as _};

use crate::{
    column::{Column, SEX_HEADER, Sex},
    record::{Dataset, Record, SENTINEL},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("unsupported spreadsheet format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[display("failed to read workbook {}", path.display())]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },
    #[display("workbook {} has no worksheets", path.display())]
    NoWorksheet { path: PathBuf },
    #[display("failed to read CSV file {}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[display("missing column '{header}' in {}", path.display())]
    MissingColumn { path: PathBuf, header: &'static str },
    #[display("row {row}: invalid value '{value}' in column '{header}'")]
    InvalidCell {
        row: usize,
        header: &'static str,
        value: String,
    },
}

/// Supported input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Workbook,
    Csv,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl Dataset {
    /// Loads the survey table from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is not recognized, the file cannot be
    /// read, a required header is missing, or a numeric cell holds text.
    pub fn load<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let dataset = match Format::from_path(path) {
            Some(Format::Workbook) => load_workbook(path)?,
            Some(Format::Csv) => load_csv(path)?,
            None => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_owned(),
                });
            }
        };
        tracing::debug!(rows = dataset.len(), path = %path.display(), "survey table loaded");
        Ok(dataset)
    }
}

/// Positions of the survey columns within a header row.
#[derive(Debug, Clone, Copy)]
struct HeaderLayout {
    numeric: [usize; 3],
    sex: usize,
}

impl HeaderLayout {
    fn locate<'a, I>(path: &Path, headers: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers = headers.into_iter().map(str::trim).collect::<Vec<_>>();
        let find = |header: &'static str| {
            headers
                .iter()
                .position(|h| *h == header)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_owned(),
                    header,
                })
        };
        let mut numeric = [0; 3];
        for (slot, column) in numeric.iter_mut().zip(Column::ALL) {
            *slot = find(column.header())?;
        }
        let sex = find(SEX_HEADER)?;
        Ok(Self { numeric, sex })
    }
}

fn record_from_parts(values: [Option<f64>; 3], sex: &str) -> Record {
    let [alcohol, saturated_fat, calories] = values.map(|v| v.unwrap_or(SENTINEL));
    Record {
        alcohol,
        saturated_fat,
        calories,
        sex: Sex::from_code(sex),
    }
}

fn load_workbook(path: &Path) -> Result<Dataset, LoadError> {
    let workbook_error = |source| LoadError::Workbook {
        path: path.to_owned(),
        source,
    };

    let mut workbook = calamine::open_workbook_auto(path).map_err(workbook_error)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::NoWorksheet {
            path: path.to_owned(),
        })?;
    let range = workbook.worksheet_range(&sheet).map_err(workbook_error)?;
    tracing::debug!(%sheet, "reading worksheet");

    let mut rows = range.rows();
    let header_row = rows.next().unwrap_or_default();
    let layout = HeaderLayout::locate(path, header_row.iter().map(text_cell))?;

    let mut records = Vec::new();
    // Spreadsheet rows are 1-based and the header occupies row 1
    for (row, cells) in (2..).zip(rows) {
        if cells.iter().all(is_blank) {
            continue;
        }
        let mut values = [None; 3];
        for ((value, &idx), column) in values.iter_mut().zip(&layout.numeric).zip(Column::ALL) {
            *value = cells
                .get(idx)
                .map_or(Ok(None), numeric_cell)
                .map_err(|value| LoadError::InvalidCell {
                    row,
                    header: column.header(),
                    value,
                })?;
        }
        let sex = cells.get(layout.sex).map_or("", text_cell);
        records.push(record_from_parts(values, sex));
    }
    Ok(Dataset::new(records))
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn text_cell(cell: &Data) -> &str {
    match cell {
        Data::String(s) => s,
        _ => "",
    }
}

/// Reads a numeric cell; blank cells are `None`, unreadable or non-finite
/// cells return their text as the error.
#[expect(clippy::cast_precision_loss)]
fn numeric_cell(cell: &Data) -> Result<Option<f64>, String> {
    let value = match cell {
        Data::Float(v) => *v,
        Data::Int(v) => *v as f64,
        Data::Empty => return Ok(None),
        Data::String(s) if s.trim().is_empty() => return Ok(None),
        Data::String(s) => s.trim().parse::<f64>().map_err(|_| s.clone())?,
        other => return Err(format!("{other:?}")),
    };
    finite(value).map(Some)
}

fn finite(value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(value.to_string())
    }
}

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Alcohol")]
    alcohol: Option<f64>,
    #[serde(rename = "Grasas_sat")]
    saturated_fat: Option<f64>,
    #[serde(rename = "Calorías")]
    calories: Option<f64>,
    #[serde(rename = "Sexo", default)]
    sex: Option<String>,
}

fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();
    HeaderLayout::locate(path, headers.iter())?;

    (2..)
        .zip(reader.deserialize::<CsvRow>())
        .map(|(row_number, row)| {
            let row = row.map_err(csv_error)?;
            let values = [row.alcohol, row.saturated_fat, row.calories];
            for (value, column) in values.iter().zip(Column::ALL) {
                if let Some(value) = *value {
                    finite(value).map_err(|value| LoadError::InvalidCell {
                        row: row_number,
                        header: column.header(),
                        value,
                    })?;
                }
            }
            Ok(record_from_parts(
                values,
                row.sex.as_deref().unwrap_or_default(),
            ))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Dataset::new)
}
