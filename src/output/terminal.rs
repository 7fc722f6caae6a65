// Colored terminal output for analysis results.
//
// Rendering functions return strings so the interactive shell can write them
// to any sink; the `display_*` helpers print straight to stdout.

use colored::Colorize;

use crate::analysis::{AnalysisResult, OverlapCounts};
use crate::matching::keywords::KeywordSet;

use super::NO_MISSING_SUMMARY;

/// Width of a full-length chart bar, in characters.
pub const BAR_WIDTH: usize = 30;

/// One bar of the overlap chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub label: &'static str,
    pub count: usize,
    /// Filled characters, scaled against the largest count
    pub filled: usize,
}

/// Bars for the overlap chart, in display order.
pub fn chart_rows(counts: &OverlapCounts, bar_width: usize) -> Vec<ChartRow> {
    let max = counts.max();
    [
        ("Overlap", counts.overlap),
        ("Only JD", counts.only_job),
        ("Only Resume", counts.only_resume),
    ]
    .into_iter()
    .map(|(label, count)| {
        let filled = if max == 0 {
            0
        } else {
            ((count as f64 / max as f64) * bar_width as f64).round() as usize
        };
        ChartRow {
            label,
            count,
            filled,
        }
    })
    .collect()
}

/// Render the keyword overlap bar chart.
pub fn render_overlap_chart(counts: &OverlapCounts) -> String {
    let mut out = format!("\n{}\n\n", "=== Skill Overlap Summary ===".bold());

    for row in chart_rows(counts, BAR_WIDTH) {
        let bar = "=".repeat(row.filled);
        let pad = " ".repeat(BAR_WIDTH - row.filled);
        let colored_bar = match row.label {
            "Overlap" => bar.green(),
            "Only JD" => bar.yellow(),
            _ => bar.cyan(),
        };
        out.push_str(&format!(
            "  {:<12} [{}{}] {}\n",
            row.label, colored_bar, pad, row.count
        ));
    }

    out.push_str(&format!("  {}\n", "Count of keywords".dimmed()));
    out
}

/// Render the text summary of one analysis.
pub fn render_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n\n",
        "Similarity Score:".bold(),
        colorize_similarity(result.similarity)
    ));
    out.push_str(&section("Job Description Keywords:", &result.job_keywords));
    out.push_str(&section("Resume Keywords:", &result.resume_keywords));

    out.push_str(&format!("{}\n", "Missing Keywords in Resume:".bold()));
    if result.is_full_match() {
        out.push_str(&format!("{}\n", NO_MISSING_SUMMARY.green()));
    } else {
        out.push_str(&format!("{}\n", result.missing_keywords.joined().red()));
    }

    out
}

fn section(title: &str, keywords: &KeywordSet) -> String {
    let body = if keywords.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        keywords.joined()
    };
    format!("{}\n{}\n\n", title.bold(), body)
}

fn colorize_similarity(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}%");
    if score >= 70.0 {
        text.green().bold()
    } else if score >= 40.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

/// Print the summary to stdout.
pub fn display_summary(result: &AnalysisResult) {
    print!("{}", render_summary(result));
}

/// Print the overlap chart to stdout.
pub fn display_overlap_chart(counts: &OverlapCounts) {
    print!("{}", render_overlap_chart(counts));
}
