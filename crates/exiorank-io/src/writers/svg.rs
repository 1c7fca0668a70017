//! Horizontal bar-chart artifact, built as an SVG string.
//!
//! The chart is laid out from the ascending sequence (a reversal of the
//! ranked input, never a re-sort) bottom-to-top, so the largest value sits
//! at the top of the list. Bar color comes from `is_target` alone; tagging
//! is never re-derived from the label here.

use std::fs;
use std::path::{Path, PathBuf};

use exiorank_core::types::RankedEntry;

use crate::{Error, Result};

/// Default artifact filename when the caller supplies none.
pub const DEFAULT_CHART_FILENAME: &str = "pm_emissions_top.svg";

const ROW_HEIGHT: f64 = 24.0;
const ROW_GAP: f64 = 6.0;
const LABEL_GUTTER: f64 = 340.0;
const BAR_AREA: f64 = 460.0;
const TITLE_AREA: f64 = 48.0;
const MARGIN: f64 = 16.0;

const TARGET_FILL: &str = "#d62728";
const OTHER_FILL: &str = "#1f77b4";

/// Write the chart for `entries` (descending ranked order) to `path`.
/// The file is truncated on rewrite, so re-runs are idempotent.
pub fn write_svg_chart(entries: &[RankedEntry], title: &str, path: &Path) -> Result<PathBuf> {
    if entries.is_empty() {
        return Err(Error::EmptyReport);
    }

    let svg = render_svg(entries, title);
    fs::write(path, svg)?;
    tracing::info!(bars = entries.len(), output = %path.display(), "wrote chart");
    Ok(path.to_path_buf())
}

fn render_svg(entries: &[RankedEntry], title: &str) -> String {
    let n = entries.len();
    let width = MARGIN * 2.0 + LABEL_GUTTER + BAR_AREA;
    let height = MARGIN * 2.0 + TITLE_AREA + (n as f64) * (ROW_HEIGHT + ROW_GAP);
    let chart_bottom = height - MARGIN;

    let max_value = entries
        .iter()
        .map(|e| e.value)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
         viewBox=\"0 0 {:.0} {:.0}\" font-family=\"sans-serif\">\n",
        width, height, width, height
    ));
    out.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"18\" text-anchor=\"middle\">{}</text>\n",
        width / 2.0,
        MARGIN + 20.0,
        escape_xml(title)
    ));

    // Ascending order, laid out bottom-to-top: last ascending entry (the
    // largest) lands at the top.
    for (i, entry) in entries.iter().rev().enumerate() {
        let y = chart_bottom - ((i + 1) as f64) * (ROW_HEIGHT + ROW_GAP);
        let bar_w = BAR_AREA * (entry.value / max_value).max(0.0);
        let fill = if entry.is_target { TARGET_FILL } else { OTHER_FILL };

        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"end\">{}</text>\n",
            MARGIN + LABEL_GUTTER - 8.0,
            y + ROW_HEIGHT / 2.0 + 4.0,
            escape_xml(&entry.label)
        ));
        out.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
            MARGIN + LABEL_GUTTER,
            y,
            bar_w,
            ROW_HEIGHT,
            fill
        ));
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\">{}</text>\n",
            MARGIN + LABEL_GUTTER + bar_w + 6.0,
            y + ROW_HEIGHT / 2.0 + 4.0,
            format_value(entry.value)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn format_value(v: f64) -> String {
    if v.abs() >= 10_000.0 {
        format!("{:.3e}", v)
    } else {
        format!("{:.1}", v)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
