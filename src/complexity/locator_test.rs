use super::*;
use crate::tree::fake::FakeNode;

fn unit(name: &str) -> FakeNode {
    FakeNode::new("function_definition").child(FakeNode::with_text("identifier", name))
}

fn names(units: &[FakeNode]) -> Vec<String> {
    units
        .iter()
        .map(|u| find_name_node(u).unwrap().text().to_string())
        .collect()
}

// ── find_units ───────────────────────────────────────────────────────

#[test]
fn tree_without_units_is_empty() {
    let root = FakeNode::new("module")
        .child(FakeNode::new("import_statement"))
        .child(FakeNode::new("expression_statement"));
    assert!(find_units(&root).is_empty());
}

#[test]
fn units_come_out_in_preorder() {
    let root = FakeNode::new("module")
        .child(unit("alpha"))
        .child(FakeNode::new("class_definition").child(unit("beta")))
        .child(unit("gamma"));
    assert_eq!(names(&find_units(&root)), ["alpha", "beta", "gamma"]);
}

#[test]
fn walk_descends_into_found_units() {
    let inner = unit("inner");
    let outer = FakeNode::new("function_definition")
        .child(FakeNode::with_text("identifier", "outer"))
        .child(FakeNode::new("block").child(inner));
    let root = FakeNode::new("module").child(outer);

    let units = find_units(&root);
    assert_eq!(names(&units), ["outer", "inner"]);
}

#[test]
fn root_node_itself_can_be_a_unit() {
    let root = unit("solo");
    assert_eq!(names(&find_units(&root)), ["solo"]);
}

#[test]
fn method_declarations_are_units() {
    let root = FakeNode::new("class_body")
        .child(FakeNode::new("method_declaration").child(FakeNode::with_text("identifier", "m")));
    assert_eq!(find_units(&root).len(), 1);
}

#[test]
fn lambdas_are_not_units() {
    let root = FakeNode::new("module").child(FakeNode::new("lambda"));
    assert!(find_units(&root).is_empty());
}

// ── find_name_node ───────────────────────────────────────────────────

#[test]
fn name_from_direct_identifier() {
    let u = unit("plain");
    assert_eq!(find_name_node(&u).unwrap().text(), "plain");
}

#[test]
fn name_kind_name_also_accepted() {
    let u = FakeNode::new("method_declaration").child(FakeNode::with_text("name", "render"));
    assert_eq!(find_name_node(&u).unwrap().text(), "render");
}

#[test]
fn name_through_function_declarator() {
    let u = FakeNode::new("function_definition")
        .child(FakeNode::new("primitive_type"))
        .child(
            FakeNode::new("function_declarator")
                .child(FakeNode::with_text("identifier", "main"))
                .child(FakeNode::new("parameter_list")),
        )
        .child(FakeNode::new("compound_statement"));
    assert_eq!(find_name_node(&u).unwrap().text(), "main");
}

#[test]
fn missing_name_is_a_structured_error() {
    let u = FakeNode::new("function_definition")
        .spanned(4, 9)
        .child(FakeNode::new("parameters"))
        .child(FakeNode::new("block"));

    let err = find_name_node(&u).unwrap_err();
    assert_eq!(err.kind, "function_definition");
    assert_eq!(err.span.start.row, 4);
    assert_eq!(err.span.end.row, 9);
}

#[test]
fn error_display_names_the_line() {
    let u = FakeNode::new("function_definition").spanned(4, 9);
    let err = find_name_node(&u).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no name found for `function_definition` node at line 5"
    );
}

#[test]
fn grandchildren_of_other_children_are_not_searched() {
    // The identifier exists, but behind a non-declarator wrapper; the
    // shallow policy must fail rather than misattribute it.
    let u = FakeNode::new("function_definition")
        .child(FakeNode::new("modifiers").child(FakeNode::with_text("identifier", "hidden")));
    assert!(find_name_node(&u).is_err());
}

#[test]
fn empty_declarator_fails_with_declarator_kind() {
    let u = FakeNode::new("function_definition")
        .child(FakeNode::new("function_declarator").child(FakeNode::new("parameter_list")));
    let err = find_name_node(&u).unwrap_err();
    assert_eq!(err.kind, "function_declarator");
}
