use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Test directory names to exclude unless `--include-tests` is active.
pub const TEST_DIRS: &[&str] = &["tests", "test", "__tests__", "spec"];

/// Check whether a file matches a test naming pattern for one of the
/// supported languages.
pub fn is_test_file(path: &Path) -> bool {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    let Some(dot) = file_name.rfind('.') else {
        return false;
    };
    let ext = &file_name[dot + 1..];
    let base = &file_name[..dot];

    match ext {
        "py" => base.starts_with("test_") || base.ends_with("_test"),
        "c" | "h" => {
            base.ends_with("_test") || base.starts_with("test_") || base.ends_with("_unittest")
        }
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => {
            base.ends_with("_test")
                || base.starts_with("test_")
                || base.ends_with("_unittest")
                || base.ends_with("Test")
        }
        "java" => base.ends_with("Test") || base.ends_with("Tests"),
        _ => false,
    }
}

/// Glob-based exclusions from `--exclude` flags.
#[derive(Default)]
pub struct ExcludeFilter {
    set: Option<GlobSet>,
}

impl ExcludeFilter {
    pub fn new(patterns: &[String]) -> Result<Self, globset::Error> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            set: Some(builder.build()?),
        })
    }

}

/// Build a directory walker that respects `.gitignore`, skips `.git`,
/// applies glob excludes, and optionally excludes test directories.
pub fn walk(path: &Path, exclude_tests: bool, filter: &ExcludeFilter) -> ignore::Walk {
    let set = filter.set.clone();
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if entry.file_name() == ".git" {
                    return false;
                }
                if exclude_tests
                    && let Some(name) = entry.file_name().to_str()
                    && TEST_DIRS.contains(&name)
                {
                    return false;
                }
            }
            if let Some(set) = &set
                && set.is_match(entry.path())
            {
                return false;
            }
            true
        })
        .build()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
