use serde::Serialize;

use crate::tree::{Span, SyntaxNode};

use super::locator::{self, NameNotFound};
use super::weights::weight_of;

/// Ordered score thresholds separating the severity tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 7.0, high: 12.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Classify a score: at or below `low` is Info, at or below `high`
    /// is Warning, above `high` is Error.
    pub fn from_score(score: f64, thresholds: &Thresholds) -> Self {
        if score <= thresholds.low {
            Self::Info
        } else if score <= thresholds.high {
            Self::Warning
        } else {
            Self::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Whether a score is worth flagging. Warning and Error both qualify;
/// only the low threshold matters here.
pub fn is_problematic(score: f64, low: f64) -> bool {
    score > low
}

/// Per-unit analysis result: identifier, where it sits, and the score.
#[derive(Debug, Clone)]
pub struct UnitInfo {
    pub name: String,
    pub name_span: Span,
    pub unit_span: Span,
    pub score: f64,
    pub severity: Severity,
}

/// Compute the structural complexity of one unit.
///
/// Every node below the unit contributes its kind's weight; the unit
/// itself contributes a fixed entry-point 1, added exactly once, for
/// the baseline execution path.
pub fn complexity<N: SyntaxNode>(unit: &N) -> f64 {
    1.0 + subtree_weight(unit)
}

fn subtree_weight<N: SyntaxNode>(node: &N) -> f64 {
    node.children()
        .iter()
        .map(|child| weight_of(child.kind()) + subtree_weight(child))
        .sum()
}

/// Build the full record for a located unit. Fails when the unit has no
/// resolvable name; the caller aborts the report rather than dropping
/// the unit silently.
pub fn build_info<N: SyntaxNode>(unit: &N, thresholds: &Thresholds) -> Result<UnitInfo, NameNotFound> {
    let name_node = locator::find_name_node(unit)?;
    let score = complexity(unit);
    Ok(UnitInfo {
        name: name_node.text().to_string(),
        name_span: name_node.span(),
        unit_span: unit.span(),
        score,
        severity: Severity::from_score(score, thresholds),
    })
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
