pub(crate) mod analyzer;
pub(crate) mod locator;
pub(crate) mod report;
pub(crate) mod weights;

use std::error::Error;
use std::path::Path;

use crate::config::Config;
use crate::language::{self, LanguageSpec};
use crate::session::Session;
use crate::session::console::{BoxPresenter, LinePresenter, StaticCursor};
use crate::tree::sitter::{ParsedDocument, SourceTree};
use crate::tree::{Point, SyntaxNode};
use crate::walk;

pub use analyzer::{Severity, Thresholds, UnitInfo, is_problematic};
pub use locator::NameNotFound;

use report::FileReport;

/// Analyze a whole tree: every function/method in pre-order, scored and
/// classified. Nested functions appear independently, and their nodes
/// also count toward every enclosing unit's score.
///
/// Fails on the first unit whose name cannot be resolved; a partial
/// report is never returned.
pub fn analyze<N: SyntaxNode>(
    root: &N,
    thresholds: &Thresholds,
) -> Result<Vec<UnitInfo>, NameNotFound> {
    locator::find_units(root)
        .iter()
        .map(|unit| analyzer::build_info(unit, thresholds))
        .collect()
}

/// The subsequence of a report worth flagging (score above `low`).
pub fn problematic<'r>(report: &'r [UnitInfo], low: f64) -> impl Iterator<Item = &'r UnitInfo> {
    report
        .iter()
        .filter(move |unit| is_problematic(unit.score, low))
}

/// The first unit in report order whose range contains the position's
/// row. For properly nested functions that is the outermost enclosing
/// one; callers wanting the innermost match can scan the report in
/// reverse.
pub fn unit_containing<'r>(report: &'r [UnitInfo], position: Point) -> Option<&'r UnitInfo> {
    report
        .iter()
        .find(|unit| unit.unit_span.contains_row(position.row))
}

/// Analyze one file with a known grammar. Returns `None` when the file
/// contains no functions.
pub(crate) fn analyze_file(
    path: &Path,
    spec: &LanguageSpec,
    thresholds: &Thresholds,
) -> Result<Option<FileReport>, Box<dyn Error>> {
    let source = std::fs::read_to_string(path)?;
    let tree = SourceTree::parse(source, spec)?;
    let units = analyze(&tree.root(), thresholds)?;
    if units.is_empty() {
        return Ok(None);
    }
    Ok(Some(FileReport::new(
        path.to_path_buf(),
        spec.name,
        units,
        thresholds,
    )))
}

pub fn run(
    path: &Path,
    config: &Config,
    filter: &walk::ExcludeFilter,
    json: bool,
    include_tests: bool,
    per_function: bool,
    top: usize,
    min_score: f64,
    sort_by: &str,
) -> Result<(), Box<dyn Error>> {
    let exclude_tests = !include_tests;
    let mut results: Vec<FileReport> = Vec::new();

    for entry in walk::walk(path, exclude_tests, filter) {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let file_path = entry.path();
        if exclude_tests && walk::is_test_file(file_path) {
            continue;
        }
        let Some(spec) = language::detect(file_path) else {
            continue;
        };
        match analyze_file(file_path, spec, &config.thresholds) {
            Ok(Some(file_report)) => results.push(file_report),
            Ok(None) => {}
            Err(err) => eprintln!("warning: {}: {err}", file_path.display()),
        }
    }

    if min_score > 0.0 {
        results.retain(|f| f.max_score >= min_score);
    }

    // Sort by chosen metric descending
    match sort_by {
        "avg" => results.sort_by(|a, b| {
            b.avg_score
                .partial_cmp(&a.avg_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => results.sort_by(|a, b| {
            b.max_score
                .partial_cmp(&a.max_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    results.truncate(top);

    if json {
        report::print_json(&results)?;
    } else if per_function {
        report::print_per_function(&results);
    } else {
        report::print_report(&results);
    }

    Ok(())
}

/// On-demand flow: describe the function at a position in one file.
pub fn run_at(
    file: &Path,
    line: usize,
    column: usize,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let document = ParsedDocument::open(file)?;
    let cursor = StaticCursor::new(Point::new(line.saturating_sub(1), column));
    let presenter = BoxPresenter::new(config.border);
    let mut session = Session::new(document, cursor, presenter, config.clone());
    session.show_current_unit()?;
    Ok(())
}

/// Continuous flow: publish problematic functions for every recognized
/// file under `path` as compiler-style diagnostic lines.
pub fn run_diagnostics(
    path: &Path,
    config: &Config,
    include_tests: bool,
    filter: &walk::ExcludeFilter,
) -> Result<(), Box<dyn Error>> {
    // The subcommand is an explicit request, so force the producer flag
    // the editor flow would have set in its setup.
    let producer = Config {
        diagnostics: true,
        ..config.clone()
    };
    let exclude_tests = !include_tests;

    for entry in walk::walk(path, exclude_tests, filter) {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let file_path = entry.path();
        if exclude_tests && walk::is_test_file(file_path) {
            continue;
        }
        if language::detect(file_path).is_none() {
            continue;
        }
        match ParsedDocument::open(file_path) {
            Ok(document) => {
                let presenter = LinePresenter::new(file_path.to_path_buf());
                let mut session =
                    Session::new(document, StaticCursor::default(), presenter, producer.clone());
                if let Err(err) = session.refresh_diagnostics() {
                    eprintln!("warning: {}: {err}", file_path.display());
                }
            }
            Err(err) => eprintln!("warning: {}: {err}", file_path.display()),
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
