//! Report formatters for complexity analysis.
//!
//! Three output modes: per-file table, per-function breakdown, and
//! JSON. Scores are per function; the file rows summarize the count,
//! average, and worst function in each file, with the severity of the
//! worst one. There is deliberately no cross-file totals row: the
//! metric is only meaningful per unit.

use std::path::PathBuf;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::analyzer::{Severity, Thresholds, UnitInfo};

/// Per-file results: the units in discovery order plus summary figures.
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub unit_count: usize,
    pub avg_score: f64,
    pub max_score: f64,
    pub severity: Severity,
    pub units: Vec<UnitInfo>,
}

impl FileReport {
    pub fn new(
        path: PathBuf,
        language: &str,
        units: Vec<UnitInfo>,
        thresholds: &Thresholds,
    ) -> Self {
        let total: f64 = units.iter().map(|u| u.score).sum();
        let max_score = units.iter().map(|u| u.score).fold(0.0, f64::max);
        let avg_score = if units.is_empty() {
            0.0
        } else {
            total / units.len() as f64
        };
        Self {
            path,
            language: language.to_string(),
            unit_count: units.len(),
            avg_score,
            max_score,
            severity: Severity::from_score(max_score, thresholds),
            units,
        }
    }
}

/// Render a score without a trailing ".0" when it is whole.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

/// Width of the File column: the longest path, floored at the header.
fn path_column_width(files: &[FileReport]) -> usize {
    files
        .iter()
        .map(|f| f.path.display().to_string().len())
        .max()
        .unwrap_or(0)
        .max("File".len())
}

fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Print a table of per-file results.
///
/// Columns: File, Functions (count), Avg (average score per function),
/// Max (worst single function), Severity (classification of the worst).
pub fn print_report(files: &[FileReport]) {
    if files.is_empty() {
        println!("No recognized source files found.");
        return;
    }

    let max_path_len = path_column_width(files);
    let separator = separator((max_path_len + 40).max(78));

    println!("Structural Complexity");
    println!("{separator}");
    println!(
        " {:<width$}  {:>9} {:>5} {:>5}  Severity",
        "File",
        "Functions",
        "Avg",
        "Max",
        width = max_path_len
    );
    println!("{separator}");

    for f in files {
        println!(
            " {:<width$}  {:>9} {:>5.1} {:>5}  {}",
            f.path.display(),
            f.unit_count,
            f.avg_score,
            format_score(f.max_score),
            f.severity.as_str(),
            width = max_path_len
        );
    }

    println!("{separator}");
}

/// Print every function with its own score and severity, grouped by
/// file, in discovery order.
pub fn print_per_function(files: &[FileReport]) {
    if files.is_empty() {
        println!("No recognized source files found.");
        return;
    }

    let separator = separator(78);
    println!("Structural Complexity (per function)");
    println!("{separator}");

    for f in files {
        println!();
        println!("{}:", f.path.display());

        let max_name_len = f
            .units
            .iter()
            .map(|unit| unit.name.width())
            .max()
            .unwrap_or(10)
            .max(10);

        for unit in &f.units {
            println!(
                "  {:<width$}  line {:>4}  {:>5}  {}",
                unit.name,
                unit.unit_span.start.row + 1,
                format_score(unit.score),
                unit.severity.as_str(),
                width = max_name_len
            );
        }
    }

    println!("{separator}");
}

/// JSON-serializable representation of a single function's result.
#[derive(Serialize)]
struct JsonUnitEntry {
    name: String,
    line: usize,
    score: f64,
    severity: Severity,
}

/// JSON-serializable representation of a file's results.
#[derive(Serialize)]
struct JsonFileEntry {
    path: String,
    language: String,
    unit_count: usize,
    avg_score: f64,
    max_score: f64,
    severity: Severity,
    units: Vec<JsonUnitEntry>,
}

/// Serialize per-file results (with per-function detail) as
/// pretty-printed JSON to stdout.
pub fn print_json(files: &[FileReport]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonFileEntry> = files
        .iter()
        .map(|f| JsonFileEntry {
            path: f.path.display().to_string(),
            language: f.language.clone(),
            unit_count: f.unit_count,
            avg_score: f.avg_score,
            max_score: f.max_score,
            severity: f.severity,
            units: f
                .units
                .iter()
                .map(|unit| JsonUnitEntry {
                    name: unit.name.clone(),
                    line: unit.unit_span.start.row + 1,
                    score: unit.score,
                    severity: unit.severity,
                })
                .collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
