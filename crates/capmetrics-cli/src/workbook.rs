//! Calamine-backed price source.
//!
//! Every sheet is read eagerly at open, decoded to [`RawRow`]s, and served
//! from memory; the driver never touches the file again after `open`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDate;

use capmetrics_core::Date;
use capmetrics_portfolio::{PortfolioError, PortfolioResult, PriceSource, RawRow};

use crate::error::{CliError, CliResult};

/// Rows before this index are headers; data starts at cells A3/B3.
const DATA_START_ROW: usize = 2;

/// An Excel workbook decoded into raw price rows, one entry per sheet.
pub struct Workbook {
    sheets: Vec<(String, Vec<RawRow>)>,
}

impl Workbook {
    /// Opens a workbook and decodes every sheet.
    ///
    /// Column 0 is treated as the date, column 1 as the price, from
    /// [`DATA_START_ROW`] onward. Cells that decode to neither are left as
    /// `None` for the driver's Clean step to drop.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Workbook` when the file or a sheet cannot be
    /// read.
    pub fn open(path: &Path) -> CliResult<Self> {
        let mut workbook = open_workbook_auto(path).map_err(|e| CliError::Workbook {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let names = workbook.sheet_names().to_owned();
        let mut sheets = Vec::with_capacity(names.len());

        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| CliError::Workbook {
                    path: path.display().to_string(),
                    reason: format!("sheet '{name}': {e}"),
                })?;

            let rows = range
                .rows()
                .skip(DATA_START_ROW)
                .map(decode_row)
                .collect();

            sheets.push((name, rows));
        }

        tracing::debug!(
            path = %path.display(),
            sheets = sheets.len(),
            "workbook decoded"
        );

        Ok(Workbook { sheets })
    }
}

impl PriceSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn rows(&self, sheet: &str) -> PortfolioResult<Vec<RawRow>> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| PortfolioError::Source {
                sheet: sheet.to_string(),
                reason: "sheet not present in workbook".to_string(),
            })
    }
}

fn decode_row(cells: &[Data]) -> RawRow {
    RawRow {
        date: cells.first().and_then(decode_date),
        price: cells.get(1).and_then(decode_price),
    }
}

/// Decodes a date cell: Excel datetime values directly, text cells via the
/// common date formats.
fn decode_date(cell: &Data) -> Option<Date> {
    match cell {
        Data::String(s) => parse_text_date(s),
        _ => cell.as_date().map(Date::from),
    }
}

fn parse_text_date(text: &str) -> Option<Date> {
    let text = text.trim();
    if let Ok(date) = Date::parse(text) {
        return Some(date);
    }
    NaiveDate::parse_from_str(text, "%m/%d/%Y").ok().map(Date::from)
}

/// Decodes a price cell: numeric cells directly, text cells via `f64`
/// parsing.
fn decode_price(cell: &Data) -> Option<f64> {
    match cell {
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => cell.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_iso_text_date() {
        let cell = Data::String("2024-01-31".to_string());
        assert_eq!(decode_date(&cell), Some(Date::from_ymd(2024, 1, 31).unwrap()));
    }

    #[test]
    fn test_decode_us_text_date() {
        let cell = Data::String(" 01/31/2024 ".to_string());
        assert_eq!(decode_date(&cell), Some(Date::from_ymd(2024, 1, 31).unwrap()));
    }

    #[test]
    fn test_undecodable_date_is_none() {
        assert_eq!(decode_date(&Data::String("n/a".to_string())), None);
        assert_eq!(decode_date(&Data::Empty), None);
    }

    #[test]
    fn test_decode_numeric_price() {
        assert_eq!(decode_price(&Data::Float(184.40)), Some(184.40));
        assert_eq!(decode_price(&Data::Int(180)), Some(180.0));
    }

    #[test]
    fn test_decode_text_price() {
        assert_eq!(decode_price(&Data::String(" 184.40 ".to_string())), Some(184.40));
        assert_eq!(decode_price(&Data::String("n/a".to_string())), None);
    }

    #[test]
    fn test_decode_row_pairs_cells() {
        let cells = vec![
            Data::String("2024-01-31".to_string()),
            Data::Float(184.40),
        ];

        let row = decode_row(&cells);

        assert_eq!(row.date, Some(Date::from_ymd(2024, 1, 31).unwrap()));
        assert_eq!(row.price, Some(184.40));
    }

    #[test]
    fn test_decode_short_row() {
        let cells = vec![Data::String("2024-01-31".to_string())];

        let row = decode_row(&cells);

        assert!(row.date.is_some());
        assert_eq!(row.price, None);
    }
}
