//! Locating function/method units and their identifiers in a tree.

use thiserror::Error;

use crate::tree::{Span, SyntaxNode};

use super::weights;

/// A relevant unit had no resolvable name among its direct children.
///
/// This aborts the report for the whole pass: it means the grammar
/// nests names deeper than the locator supports, which should be fixed
/// in the tables rather than masked by dropping the unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no name found for `{kind}` node at line {}", .span.start.row + 1)]
pub struct NameNotFound {
    pub kind: String,
    pub span: Span,
}

/// Whether a node defines a function or method.
pub fn is_relevant_unit<N: SyntaxNode>(node: &N) -> bool {
    weights::is_unit_kind(node.kind())
}

/// Collect every unit in the tree, in pre-order.
///
/// The walk does not stop at a unit: it recurses into its children as
/// well, so nested functions are discovered and reported independently.
pub fn find_units<N: SyntaxNode>(root: &N) -> Vec<N> {
    let mut units = Vec::new();
    collect_units(root, &mut units);
    units
}

fn collect_units<N: SyntaxNode>(node: &N, units: &mut Vec<N>) {
    if is_relevant_unit(node) {
        units.push(node.clone());
    }
    for child in node.children() {
        collect_units(&child, units);
    }
}

/// Find the identifier child of a unit node.
///
/// Scans direct children in order; a name kind is returned as-is, a
/// declarator wrapper is recursed into instead of returned. The search
/// never descends into other children: grammars that nest the name
/// elsewhere are unsupported and fail loudly instead of misattributing
/// a name.
pub fn find_name_node<N: SyntaxNode>(unit: &N) -> Result<N, NameNotFound> {
    for child in unit.children() {
        if weights::is_name_kind(child.kind()) {
            return Ok(child);
        }
        if weights::is_declarator_kind(child.kind()) {
            return find_name_node(&child);
        }
    }
    Err(NameNotFound {
        kind: unit.kind().to_string(),
        span: unit.span(),
    })
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
