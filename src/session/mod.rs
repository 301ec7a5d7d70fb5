//! Editor-facing surface: the collaborator seams and the session that
//! wires them to the engine.
//!
//! The engine produces plain data; everything the host environment owns
//! (buffers, cursors, rendering, a diagnostics store) is reached through
//! the three traits here. A `Session` threads one immutable `Config`
//! into both flows: the on-demand "what is under the cursor" query and
//! the continuous diagnostics refresh.

pub mod console;

use crate::complexity::report::format_score;
use crate::complexity::{self, NameNotFound, Severity, UnitInfo};
use crate::config::Config;
use crate::tree::{Point, Span, SyntaxNode};

/// Supplies the parsed tree for the current buffer. `None` means no
/// grammar is available for the content, which degrades to an empty
/// report rather than an error.
pub trait TreeProvider {
    type Node<'t>: SyntaxNode
    where
        Self: 't;

    fn current_tree(&self) -> Option<Self::Node<'_>>;
}

/// Supplies the cursor position for on-demand queries.
pub trait PositionProvider {
    fn cursor_position(&self) -> Point;
}

/// One entry for the host's diagnostics store, anchored to the unit's
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub span: Span,
    pub severity: Severity,
    pub message: String,
}

/// Renders results. Implementations own all presentation concerns; the
/// session only hands over data.
pub trait Presenter {
    fn show_unit(&mut self, info: &UnitInfo);
    fn show_notice(&mut self, message: &str);
    fn publish(&mut self, diagnostics: &[Diagnostic]);
}

pub struct Session<T, C, P> {
    tree: T,
    cursor: C,
    presenter: P,
    config: Config,
}

impl<T: TreeProvider, C: PositionProvider, P: Presenter> Session<T, C, P> {
    pub fn new(tree: T, cursor: C, presenter: P, config: Config) -> Self {
        Self {
            tree,
            cursor,
            presenter,
            config,
        }
    }

    /// On-demand flow: describe the unit at the cursor position.
    ///
    /// No tree and no enclosing unit are both neutral notices, not
    /// errors. A unit with an unresolvable name propagates.
    pub fn show_current_unit(&mut self) -> Result<(), NameNotFound> {
        let Some(root) = self.tree.current_tree() else {
            self.presenter.show_notice("no syntax tree available for this file");
            return Ok(());
        };
        let report = complexity::analyze(&root, &self.config.thresholds)?;
        let position = self.cursor.cursor_position();
        match complexity::unit_containing(&report, position) {
            Some(info) => self.presenter.show_unit(info),
            None => self.presenter.show_notice("no function at the current position"),
        }
        Ok(())
    }

    /// Continuous flow: publish the problematic units as diagnostics.
    ///
    /// Does nothing unless the config enables diagnostics production.
    /// A failed pass returns before `publish`, so diagnostics from an
    /// earlier successful pass are left untouched.
    pub fn refresh_diagnostics(&mut self) -> Result<(), NameNotFound> {
        if !self.config.diagnostics {
            return Ok(());
        }
        let Some(root) = self.tree.current_tree() else {
            self.presenter.publish(&[]);
            return Ok(());
        };
        let report = complexity::analyze(&root, &self.config.thresholds)?;
        let diagnostics: Vec<Diagnostic> =
            complexity::problematic(&report, self.config.thresholds.low)
                .map(|unit| Diagnostic {
                    span: unit.name_span,
                    severity: unit.severity,
                    message: format!("Complexity: {}", format_score(unit.score)),
                })
                .collect();
        self.presenter.publish(&diagnostics);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
