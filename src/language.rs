//! Grammar registry: which tree-sitter language parses which files.

use std::path::Path;

use tree_sitter::Language;

/// A supported language: display name, file extensions, and the
/// tree-sitter grammar constructor.
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    grammar: fn() -> Language,
}

impl LanguageSpec {
    pub fn language(&self) -> Language {
        (self.grammar)()
    }
}

fn python() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

fn c() -> Language {
    tree_sitter_c::LANGUAGE.into()
}

fn cpp() -> Language {
    tree_sitter_cpp::LANGUAGE.into()
}

fn java() -> Language {
    tree_sitter_java::LANGUAGE.into()
}

static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "Python",
        extensions: &["py", "pyi"],
        grammar: python,
    },
    LanguageSpec {
        name: "C",
        extensions: &["c", "h"],
        grammar: c,
    },
    LanguageSpec {
        name: "C++",
        extensions: &["cc", "cpp", "cxx", "hh", "hpp", "hxx"],
        grammar: cpp,
    },
    LanguageSpec {
        name: "Java",
        extensions: &["java"],
        grammar: java,
    },
];

/// Look up the grammar for a path by its extension.
pub fn detect(path: &Path) -> Option<&'static LanguageSpec> {
    let ext = path.extension()?.to_str()?;
    LANGUAGES
        .iter()
        .find(|spec| spec.extensions.contains(&ext))
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
