//! The price source abstraction and sheet naming policy.

use capmetrics_core::Date;

use crate::error::PortfolioResult;

/// Fallback instrument name when a sheet does not carry the label.
pub const UNKNOWN_INSTRUMENT: &str = "Unknown";

/// One raw spreadsheet row, cells decoded to domain values where possible.
///
/// `None` means the cell did not decode to a date or price; the Clean step
/// drops such rows and counts them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRow {
    /// The date cell, if it decoded.
    pub date: Option<Date>,
    /// The price cell, if it decoded.
    pub price: Option<f64>,
}

/// A spreadsheet-shaped source of dated price rows.
///
/// The real implementation reads an Excel workbook; tests inject in-memory
/// fixtures. The driver takes the source as an explicit parameter - there
/// is no ambient workbook state.
pub trait PriceSource {
    /// Returns the sheet names, in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Returns the data rows of one sheet, already past any header offset.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::Source` when the sheet cannot be read;
    /// this is fatal to the run.
    fn rows(&self, sheet: &str) -> PortfolioResult<Vec<RawRow>>;
}

/// Derives an instrument name from a sheet name.
///
/// The configured label substring (e.g. `"Price History"`) is stripped and
/// the remaining suffix trimmed: `"Price History AAPL"` becomes `"AAPL"`.
/// Sheets without the label map to [`UNKNOWN_INSTRUMENT`].
#[must_use]
pub fn instrument_from_sheet(sheet: &str, label: &str) -> String {
    match sheet.find(label) {
        Some(idx) => sheet[idx + label.len()..].trim().to_string(),
        None => UNKNOWN_INSTRUMENT.to_string(),
    }
}
