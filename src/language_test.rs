use std::path::Path;

use super::*;

#[test]
fn python_by_extension() {
    assert_eq!(detect(Path::new("app.py")).unwrap().name, "Python");
    assert_eq!(detect(Path::new("types.pyi")).unwrap().name, "Python");
}

#[test]
fn c_and_headers() {
    assert_eq!(detect(Path::new("main.c")).unwrap().name, "C");
    assert_eq!(detect(Path::new("util.h")).unwrap().name, "C");
}

#[test]
fn cpp_extension_variants() {
    for name in ["a.cc", "a.cpp", "a.cxx", "a.hh", "a.hpp", "a.hxx"] {
        assert_eq!(detect(Path::new(name)).unwrap().name, "C++", "{name}");
    }
}

#[test]
fn java_by_extension() {
    assert_eq!(detect(Path::new("App.java")).unwrap().name, "Java");
}

#[test]
fn unsupported_extensions_are_none() {
    assert!(detect(Path::new("lib.rs")).is_none());
    assert!(detect(Path::new("notes.md")).is_none());
    assert!(detect(Path::new("data.json")).is_none());
}

#[test]
fn no_extension_is_none() {
    assert!(detect(Path::new("Makefile")).is_none());
}

#[test]
fn extension_matching_is_case_sensitive() {
    assert!(detect(Path::new("APP.PY")).is_none());
}

#[test]
fn every_grammar_loads() {
    for spec in [
        detect(Path::new("a.py")).unwrap(),
        detect(Path::new("a.c")).unwrap(),
        detect(Path::new("a.cc")).unwrap(),
        detect(Path::new("a.java")).unwrap(),
    ] {
        // Loading the grammar is enough; a version mismatch would fail
        // in SourceTree::parse.
        let _ = spec.language();
    }
}
