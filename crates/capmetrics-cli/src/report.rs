//! Console report rendering.

use capmetrics_analytics::CapmResult;
use capmetrics_portfolio::{PortfolioReport, SkippedInstrument, StockReport};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::error::CliResult;

const BANNER_WIDTH: usize = 40;

/// Prints the portfolio report in the requested format.
///
/// The table format is the full console report: one banner-framed detail
/// section per instrument, skip warnings, and the final comparison. JSON
/// emits a summary document (skips included); CSV emits summary rows on
/// stdout with skips warned to stderr.
pub fn print_report(
    report: &PortfolioReport,
    market: &str,
    max_rows: usize,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_full(report, market, max_rows),
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => print_csv(report),
    }
}

fn print_full(report: &PortfolioReport, market: &str, max_rows: usize) -> CliResult<()> {
    for stock in &report.stocks {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("Sheet: {}", stock.instrument());
        println!("Expected Return (CAPM): {:.2}", stock.result.expected_return);
        println!("Beta: {:.2}", stock.result.beta);
        if stock.dropped_rows > 0 {
            println!("({} rows dropped during cleaning)", stock.dropped_rows);
        }
        println!("{}", detail_table(stock, max_rows));
        println!("{}\n", "=".repeat(BANNER_WIDTH));
    }

    for skip in &report.skipped {
        print_warning(&format!("skipped {}: {}", skip.instrument, skip.reason));
    }

    println!("\nComparison with {}:", market);
    for result in report.summary() {
        println!("{}", summary_line(result));
    }

    Ok(())
}

/// One line of the final comparison section.
fn summary_line(result: &CapmResult) -> String {
    format!(
        "Stock: {}, Expected Return: {:.5}, Beta: {:.2}",
        result.instrument, result.expected_return, result.beta
    )
}

/// A row in the per-instrument detail view.
#[derive(Debug, Tabled)]
struct DetailRow {
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Normalized Price")]
    normalized: String,
    #[tabled(rename = "Monthly Return")]
    monthly_return: String,
}

fn detail_rows(stock: &StockReport, max_rows: usize) -> Vec<DetailRow> {
    stock
        .aligned
        .iter()
        .take(max_rows)
        .map(|row| DetailRow {
            stock: stock.instrument().to_string(),
            date: row.date.to_string(),
            price: format!("{:.2}", row.price),
            normalized: format!("{:.4}", row.normalized),
            monthly_return: format!("{:.4}", row.stock_return),
        })
        .collect()
}

fn detail_table(stock: &StockReport, max_rows: usize) -> String {
    Table::new(detail_rows(stock, max_rows))
        .with(Style::rounded())
        .to_string()
}

/// The machine-readable summary document.
#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    results: Vec<&'a CapmResult>,
    skipped: &'a [SkippedInstrument],
}

fn print_json(report: &PortfolioReport) -> CliResult<()> {
    let document = SummaryDocument {
        results: report.summary(),
        skipped: &report.skipped,
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn print_csv(report: &PortfolioReport) -> CliResult<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for result in report.summary() {
        writer.serialize(result)?;
    }
    writer.flush()?;

    for skip in &report.skipped {
        print_warning(&format!("skipped {}: {}", skip.instrument, skip.reason));
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use capmetrics_core::{Date, NormalizedSeries, ReturnSeries, SeriesPoint};
    use capmetrics_portfolio::AlignedRow;

    fn stock_report(rows: usize) -> StockReport {
        let aligned = (0..rows)
            .map(|i| AlignedRow {
                date: Date::from_ymd(2023, 1, i as u32 + 1).unwrap(),
                price: 100.0 + i as f64,
                normalized: 1.0 + i as f64 / 100.0,
                stock_return: if i == 0 { 0.0 } else { 0.01 },
                market_return: 0.005,
            })
            .collect();

        StockReport {
            normalized: NormalizedSeries {
                instrument: "AAPL".to_string(),
                points: vec![SeriesPoint {
                    date: Date::from_ymd(2023, 1, 28).unwrap(),
                    price: 100.0,
                    value: 1.0,
                }],
            },
            returns: ReturnSeries {
                instrument: "AAPL".to_string(),
                points: vec![],
            },
            aligned,
            result: CapmResult {
                instrument: "AAPL".to_string(),
                beta: 1.2345,
                expected_return: 0.091234,
            },
            dropped_rows: 0,
        }
    }

    #[test]
    fn test_detail_rows_truncate_to_max() {
        let stock = stock_report(15);

        assert_eq!(detail_rows(&stock, 10).len(), 10);
        assert_eq!(detail_rows(&stock, 20).len(), 15);
    }

    #[test]
    fn test_detail_row_formatting() {
        let stock = stock_report(2);
        let rows = detail_rows(&stock, 10);

        assert_eq!(rows[0].stock, "AAPL");
        assert_eq!(rows[0].date, "2023-01-01");
        assert_eq!(rows[0].price, "100.00");
        assert_eq!(rows[0].normalized, "1.0000");
        assert_eq!(rows[1].monthly_return, "0.0100");
    }

    #[test]
    fn test_detail_table_has_headers() {
        let stock = stock_report(3);
        let table = detail_table(&stock, 10);

        assert!(table.contains("Monthly Return"));
        assert!(table.contains("Normalized Price"));
        assert!(table.contains("AAPL"));
    }

    #[test]
    fn test_summary_line_precision() {
        let result = CapmResult {
            instrument: "AAPL".to_string(),
            beta: 1.2345,
            expected_return: 0.091234,
        };

        assert_eq!(
            summary_line(&result),
            "Stock: AAPL, Expected Return: 0.09123, Beta: 1.23"
        );
    }
}
