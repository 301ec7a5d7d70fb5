use std::path::PathBuf;

use super::*;
use crate::tree::{Point, Span};

fn unit(name: &str, row: usize, score: f64, severity: Severity) -> UnitInfo {
    UnitInfo {
        name: name.to_string(),
        name_span: Span::new(Point::new(row, 4), Point::new(row, 4 + name.len())),
        unit_span: Span::new(Point::new(row, 0), Point::new(row + 3, 0)),
        score,
        severity,
    }
}

// ── format_score ─────────────────────────────────────────────────────

#[test]
fn whole_scores_drop_the_decimal() {
    assert_eq!(format_score(1.0), "1");
    assert_eq!(format_score(8.0), "8");
    assert_eq!(format_score(14.0), "14");
}

#[test]
fn fractional_scores_keep_one_digit() {
    assert_eq!(format_score(1.5), "1.5");
    assert_eq!(format_score(2.5), "2.5");
}

// ── table helpers ────────────────────────────────────────────────────

#[test]
fn path_column_grows_with_the_longest_path() {
    let files = vec![
        FileReport::new(
            PathBuf::from("a.py"),
            "Python",
            vec![unit("f", 0, 1.0, Severity::Info)],
            &Thresholds::default(),
        ),
        FileReport::new(
            PathBuf::from("src/deeply/nested.py"),
            "Python",
            vec![unit("g", 0, 1.0, Severity::Info)],
            &Thresholds::default(),
        ),
    ];
    assert_eq!(path_column_width(&files), "src/deeply/nested.py".len());
}

#[test]
fn path_column_never_shrinks_below_the_header() {
    assert_eq!(path_column_width(&[]), "File".len());
}

#[test]
fn separator_counts_characters_not_bytes() {
    assert_eq!(separator(7).chars().count(), 7);
}

// ── FileReport aggregation ───────────────────────────────────────────

#[test]
fn aggregates_count_avg_and_max() {
    let units = vec![
        unit("calm", 0, 2.0, Severity::Info),
        unit("busy", 10, 8.0, Severity::Warning),
    ];
    let report = FileReport::new(
        PathBuf::from("src/app.py"),
        "Python",
        units,
        &Thresholds::default(),
    );

    assert_eq!(report.unit_count, 2);
    assert!((report.avg_score - 5.0).abs() < 0.01);
    assert_eq!(report.max_score, 8.0);
    assert_eq!(report.severity, Severity::Warning);
}

#[test]
fn file_severity_follows_the_worst_function() {
    let units = vec![unit("wild", 0, 14.0, Severity::Error)];
    let report = FileReport::new(
        PathBuf::from("a.c"),
        "C",
        units,
        &Thresholds::default(),
    );
    assert_eq!(report.severity, Severity::Error);
}

#[test]
fn file_severity_respects_custom_thresholds() {
    let strict = Thresholds { low: 1.0, high: 2.0 };
    let units = vec![unit("f", 0, 3.0, Severity::Error)];
    let report = FileReport::new(PathBuf::from("a.py"), "Python", units, &strict);
    assert_eq!(report.severity, Severity::Error);
}

// ── printing ─────────────────────────────────────────────────────────

#[test]
fn empty_input_prints_a_notice() {
    print_report(&[]);
    print_per_function(&[]);
}

#[test]
fn table_and_breakdown_render() {
    let files = vec![FileReport::new(
        PathBuf::from("src/app.py"),
        "Python",
        vec![
            unit("calm", 0, 1.0, Severity::Info),
            unit("busy", 8, 9.5, Severity::Warning),
        ],
        &Thresholds::default(),
    )];
    print_report(&files);
    print_per_function(&files);
}

#[test]
fn json_output_serializes() {
    let files = vec![FileReport::new(
        PathBuf::from("src/app.py"),
        "Python",
        vec![unit("f", 3, 2.5, Severity::Info)],
        &Thresholds::default(),
    )];
    print_json(&files).unwrap();
}
