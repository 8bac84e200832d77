//! SVG plot of a normalized price series.
//!
//! Hand-rendered SVG: a single line per chart, monthly time axis with
//! vertical grid lines, horizontal value grid lines, and a legend carrying
//! the instrument name.

use std::fs;
use std::path::{Path, PathBuf};

use capmetrics_core::NormalizedSeries;

use crate::error::CliResult;

const WIDTH: i32 = 576;
const HEIGHT: i32 = 288;
const PADDING: f64 = 36.0;
const SERIES_COLOR: &str = "#348dc1";
const VALUE_GRID_LINES: usize = 4;

/// Renders the chart and writes it to `<dir>/<instrument>.svg`.
///
/// The directory is created if needed. Returns the written path.
pub fn write_normalized_chart(series: &NormalizedSeries, dir: &Path) -> CliResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.svg", file_stem(&series.instrument)));
    fs::write(&path, render_normalized_chart(series))?;

    Ok(path)
}

/// Renders a normalized price series as a standalone SVG document.
#[must_use]
pub fn render_normalized_chart(series: &NormalizedSeries) -> String {
    let width = f64::from(WIDTH);
    let height = f64::from(HEIGHT);

    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    let xs = x_positions(values.len(), width);
    let (min_v, max_v) = value_extent(&values);

    let mut svg = String::new();
    svg.push_str(&svg_header(WIDTH, HEIGHT));

    svg.push_str(&format!(
        r##"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="12" fill="#333">Normalized Stock Price for {name}</text>"##,
        x = width / 2.0,
        y = PADDING - 16.0,
        name = series.instrument
    ));

    add_value_grid(&mut svg, min_v, max_v, width, height);
    add_time_axis(&mut svg, series, &xs, width, height);

    let points_attr = xs
        .iter()
        .zip(&values)
        .map(|(x, v)| format!("{:.2},{:.2}", x, scale_value(*v, min_v, max_v, height)))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        r#"<polyline fill="none" stroke="{color}" stroke-width="1.5" points="{points}" />"#,
        color = SERIES_COLOR,
        points = points_attr
    ));

    add_legend(&mut svg, &series.instrument);

    svg.push_str("</svg>");
    svg
}

fn svg_header(width: i32, height: i32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}"><style>text{{font-family:Arial,sans-serif;font-size:10px;fill:#666}}</style>"#,
        w = width,
        h = height
    )
}

/// Horizontal grid lines with value labels along the y-axis.
fn add_value_grid(svg: &mut String, min_v: f64, max_v: f64, width: f64, height: f64) {
    for step in 0..=VALUE_GRID_LINES {
        let value = min_v + (max_v - min_v) * step as f64 / VALUE_GRID_LINES as f64;
        let y = scale_value(value, min_v, max_v, height);

        svg.push_str(&format!(
            r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#dddddd" stroke-width="0.5" />"##,
            x1 = PADDING,
            x2 = width - PADDING,
            y = y
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end">{value:.2}</text>"#,
            x = PADDING - 4.0,
            y = y + 3.0,
            value = value
        ));
    }
}

/// Time axis: one label and vertical grid line per distinct month.
fn add_time_axis(svg: &mut String, series: &NormalizedSeries, xs: &[f64], width: f64, height: f64) {
    let axis_y = height - PADDING + 5.0;

    svg.push_str(&format!(
        r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#000" stroke-width="1" />"##,
        x1 = PADDING,
        x2 = width - PADDING,
        y = axis_y
    ));

    let mut last_month: Option<(i32, u32)> = None;
    for (idx, point) in series.points.iter().enumerate() {
        let key = (point.date.year(), point.date.month());
        if last_month == Some(key) {
            continue;
        }
        last_month = Some(key);

        let x = xs[idx];
        svg.push_str(&format!(
            r##"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="#dddddd" stroke-width="0.5" />"##,
            x = x,
            y1 = PADDING,
            y2 = height - PADDING
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{label}</text>"#,
            x = x,
            y = axis_y + 16.0,
            label = format!("{}-{:02}", point.date.year(), point.date.month())
        ));
    }
}

fn add_legend(svg: &mut String, label: &str) {
    let x = PADDING + 10.0;
    let y = PADDING + 14.0;

    svg.push_str(&format!(
        r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="1.5" />"##,
        x1 = x,
        x2 = x + 20.0,
        y = y - 4.0,
        color = SERIES_COLOR
    ));
    svg.push_str(&format!(
        r##"<text x="{x:.2}" y="{y:.2}" text-anchor="start" fill="#333">{label}</text>"##,
        x = x + 26.0,
        y = y,
        label = label
    ));
}

fn x_positions(len: usize, width: f64) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![width / 2.0];
    }

    let inner_width = width - 2.0 * PADDING;
    (0..len)
        .map(|i| PADDING + inner_width * (i as f64 / (len - 1) as f64))
        .collect()
}

/// Value extent, widened when the series is flat so the line stays visible.
fn value_extent(values: &[f64]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;

    for v in values {
        if *v < min_v {
            min_v = *v;
        }
        if *v > max_v {
            max_v = *v;
        }
    }

    if !min_v.is_finite() || !max_v.is_finite() {
        return (0.0, 1.0);
    }

    if min_v == max_v {
        let adjust = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 };
        min_v -= adjust;
        max_v += adjust;
    }

    (min_v, max_v)
}

fn scale_value(value: f64, min_v: f64, max_v: f64, height: f64) -> f64 {
    let inner_height = height - 2.0 * PADDING;
    let norm = (value - min_v) / (max_v - min_v);
    PADDING + (1.0 - norm) * inner_height
}

/// Instrument names become file stems; anything outside `[A-Za-z0-9_-]`
/// is replaced so the name is path-safe.
fn file_stem(instrument: &str) -> String {
    let stem: String = instrument
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "unknown".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capmetrics_core::{Date, SeriesPoint};

    fn normalized(instrument: &str, values: &[f64]) -> NormalizedSeries {
        NormalizedSeries {
            instrument: instrument.to_string(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &value)| SeriesPoint {
                    date: Date::from_ymd(2023, i as u32 + 1, 28).unwrap(),
                    price: 100.0 * value,
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_contains_polyline_and_legend() {
        let svg = render_normalized_chart(&normalized("AAPL", &[1.0, 1.05, 1.02]));

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("AAPL"));
        assert!(svg.contains("2023-01"));
    }

    #[test]
    fn test_render_flat_series_does_not_divide_by_zero() {
        let svg = render_normalized_chart(&normalized("FLAT", &[1.0, 1.0, 1.0]));

        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_write_creates_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_normalized_chart(&normalized("AAPL", &[1.0, 1.1]), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "AAPL.svg");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("</svg>"));
    }

    #[test]
    fn test_file_stem_sanitizes() {
        assert_eq!(file_stem("BRK.B"), "BRK_B");
        assert_eq!(file_stem("S&P 500"), "S_P_500");
        assert_eq!(file_stem(""), "unknown");
    }
}
