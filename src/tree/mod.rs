//! Syntax tree abstraction the complexity engine walks.
//!
//! The engine never talks to a parser directly: it sees a tree of nodes
//! through the `SyntaxNode` trait, each with a grammar kind, ordered
//! children, a source span, and the source text it covers. The
//! tree-sitter backend lives in `sitter`; tests use the `fake` tree.

pub mod sitter;

/// A zero-based (row, column) source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A half-open source range: `end.column` is exclusive, matching the
/// parser's position semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Row-inclusive containment: a position is inside the span when its
    /// row lies within `[start.row, end.row]`, regardless of column.
    pub fn contains_row(&self, row: usize) -> bool {
        self.start.row <= row && row <= self.end.row
    }
}

/// A node in a parsed syntax tree.
///
/// Implementations borrow from a tree owned elsewhere; the engine only
/// holds nodes for the duration of one analysis pass and never caches
/// them across passes.
pub trait SyntaxNode: Clone {
    /// The grammar production tag, e.g. `"if_statement"`.
    fn kind(&self) -> &str;

    /// Ordered direct children.
    fn children(&self) -> Vec<Self>;

    /// Source range covered by this node.
    fn span(&self) -> Span;

    /// Source text covered by this node.
    fn text(&self) -> &str;
}


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
