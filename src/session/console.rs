//! Console presenters: the CLI's stand-ins for an editor's popup and
//! diagnostics store.

use std::path::PathBuf;

use unicode_width::UnicodeWidthStr;

use crate::complexity::UnitInfo;
use crate::complexity::report::format_score;
use crate::config::BorderStyle;
use crate::tree::Point;

use super::{Diagnostic, PositionProvider, Presenter};

/// A fixed cursor position handed to the session by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCursor(Point);

impl StaticCursor {
    pub fn new(position: Point) -> Self {
        Self(position)
    }
}

impl PositionProvider for StaticCursor {
    fn cursor_position(&self) -> Point {
        self.0
    }
}

struct Frame {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

fn frame_for(border: BorderStyle) -> Option<Frame> {
    match border {
        BorderStyle::Rounded => Some(Frame {
            top_left: "\u{256d}",
            top_right: "\u{256e}",
            bottom_left: "\u{2570}",
            bottom_right: "\u{256f}",
            horizontal: "\u{2500}",
            vertical: "\u{2502}",
        }),
        BorderStyle::Single => Some(Frame {
            top_left: "\u{250c}",
            top_right: "\u{2510}",
            bottom_left: "\u{2514}",
            bottom_right: "\u{2518}",
            horizontal: "\u{2500}",
            vertical: "\u{2502}",
        }),
        BorderStyle::Double => Some(Frame {
            top_left: "\u{2554}",
            top_right: "\u{2557}",
            bottom_left: "\u{255a}",
            bottom_right: "\u{255d}",
            horizontal: "\u{2550}",
            vertical: "\u{2551}",
        }),
        BorderStyle::None => None,
    }
}

/// Renders one unit in a framed box, like an editor popup.
pub struct BoxPresenter {
    border: BorderStyle,
}

impl BoxPresenter {
    pub fn new(border: BorderStyle) -> Self {
        Self { border }
    }
}

impl Presenter for BoxPresenter {
    fn show_unit(&mut self, info: &UnitInfo) {
        let title = info.name.clone();
        let body = format!(
            "Complexity: {} ({})",
            format_score(info.score),
            info.severity.as_str()
        );
        let width = title.width().max(body.width());

        match frame_for(self.border) {
            Some(frame) => {
                println!(
                    "{}{}{}",
                    frame.top_left,
                    frame.horizontal.repeat(width + 2),
                    frame.top_right
                );
                for line in [&title, &body] {
                    println!(
                        "{} {}{} {}",
                        frame.vertical,
                        line,
                        " ".repeat(width - line.width()),
                        frame.vertical
                    );
                }
                println!(
                    "{}{}{}",
                    frame.bottom_left,
                    frame.horizontal.repeat(width + 2),
                    frame.bottom_right
                );
            }
            None => {
                println!("{title}");
                println!("{body}");
            }
        }
    }

    fn show_notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn publish(&mut self, diagnostics: &[Diagnostic]) {
        for d in diagnostics {
            println!(
                "{}:{}: {}: {}",
                d.span.start.row + 1,
                d.span.start.column + 1,
                d.severity.as_str(),
                d.message
            );
        }
    }
}

/// Prints diagnostics as `path:line:col: severity: message` lines.
pub struct LinePresenter {
    path: PathBuf,
}

impl LinePresenter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Presenter for LinePresenter {
    fn show_unit(&mut self, info: &UnitInfo) {
        println!(
            "{}:{}: {} Complexity: {} ({})",
            self.path.display(),
            info.unit_span.start.row + 1,
            info.name,
            format_score(info.score),
            info.severity.as_str()
        );
    }

    fn show_notice(&mut self, message: &str) {
        println!("{}: {message}", self.path.display());
    }

    fn publish(&mut self, diagnostics: &[Diagnostic]) {
        for d in diagnostics {
            println!(
                "{}:{}:{}: {}: {}",
                self.path.display(),
                d.span.start.row + 1,
                d.span.start.column + 1,
                d.severity.as_str(),
                d.message
            );
        }
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
