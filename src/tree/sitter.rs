//! Tree-sitter backend for the `SyntaxNode` abstraction.
//!
//! `SourceTree` owns a parsed tree together with its source text;
//! `SourceNode` pairs a borrowed `tree_sitter::Node` with the source so
//! the engine can read identifier text. `ParsedDocument` is the
//! file-on-disk tree provider used by the CLI: a file with no matching
//! grammar simply has no tree, which the engine treats as an empty
//! report.

use std::path::Path;

use thiserror::Error;
use tree_sitter::{Parser, Tree};

use crate::language::{self, LanguageSpec};
use crate::session::TreeProvider;
use crate::tree::{Point, Span, SyntaxNode};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("grammar rejected by tree-sitter: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser returned no tree")]
    NoTree,
}

/// A parsed syntax tree that owns its source text.
pub struct SourceTree {
    tree: Tree,
    source: String,
}

impl SourceTree {
    pub fn parse(source: String, spec: &LanguageSpec) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&spec.language())?;
        let tree = parser.parse(source.as_bytes(), None).ok_or(ParseError::NoTree)?;
        Ok(Self { tree, source })
    }

    pub fn root(&self) -> SourceNode<'_> {
        SourceNode {
            node: self.tree.root_node(),
            source: &self.source,
        }
    }
}

/// A borrowed tree-sitter node plus the source it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct SourceNode<'t> {
    node: tree_sitter::Node<'t>,
    source: &'t str,
}

fn point(p: tree_sitter::Point) -> Point {
    Point::new(p.row, p.column)
}

impl<'t> SyntaxNode for SourceNode<'t> {
    fn kind(&self) -> &str {
        self.node.kind()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|node| SourceNode {
                node,
                source: self.source,
            })
            .collect()
    }

    fn span(&self) -> Span {
        Span::new(point(self.node.start_position()), point(self.node.end_position()))
    }

    fn text(&self) -> &str {
        std::str::from_utf8(&self.source.as_bytes()[self.node.byte_range()]).unwrap_or("")
    }
}

/// A file on disk, parsed when a grammar matches its extension.
///
/// Holds `None` when no grammar is registered for the file, so
/// `current_tree` degrades to "no tree" rather than an error.
pub struct ParsedDocument {
    inner: Option<SourceTree>,
}

impl ParsedDocument {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(spec) = language::detect(path) else {
            return Ok(Self { inner: None });
        };
        let source = std::fs::read_to_string(path)?;
        let tree = SourceTree::parse(source, spec)?;
        Ok(Self { inner: Some(tree) })
    }
}

impl TreeProvider for ParsedDocument {
    type Node<'t>
        = SourceNode<'t>
    where
        Self: 't;

    fn current_tree(&self) -> Option<SourceNode<'_>> {
        self.inner.as_ref().map(SourceTree::root)
    }
}

#[cfg(test)]
#[path = "sitter_test.rs"]
mod tests;
