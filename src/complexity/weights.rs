//! Node classification tables for the complexity engine.
//!
//! The tables are language-agnostic: they name tree-sitter grammar
//! productions shared by the supported grammars. Kinds not listed weigh
//! nothing, but their children are still visited.

/// A syntax-node kind that contributes weight to a unit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    If,
    Elif,
    Else,
    For,
    Foreach,
    Case,
    BooleanOperator,
    BinaryExpression,
}

impl BranchKind {
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "if_statement" => Some(Self::If),
            "elif_clause" => Some(Self::Elif),
            "else_clause" => Some(Self::Else),
            "for_statement" => Some(Self::For),
            "foreach_statement" => Some(Self::Foreach),
            "case_statement" => Some(Self::Case),
            "boolean_operator" => Some(Self::BooleanOperator),
            "binary_expression" => Some(Self::BinaryExpression),
            _ => None,
        }
    }

    /// Generic binary expressions get half weight: not every one is a
    /// logical operator, and grammars with a dedicated boolean-operator
    /// kind already count those at full weight.
    pub fn weight(self) -> f64 {
        match self {
            Self::BinaryExpression => 0.5,
            _ => 1.0,
        }
    }
}

/// Weight contributed by a node kind; unlisted kinds contribute 0.
pub fn weight_of(kind: &str) -> f64 {
    BranchKind::from_node_kind(kind).map_or(0.0, BranchKind::weight)
}

/// Kinds that define a function or method, the units of analysis.
const UNIT_KINDS: &[&str] = &["function_definition", "method_declaration"];

/// Kinds that carry a unit's identifier.
const NAME_KINDS: &[&str] = &["identifier", "name"];

/// Wrapper kinds that nest the identifier one level deeper
/// (C-family declarators).
const DECLARATOR_KINDS: &[&str] = &["function_declarator"];

pub fn is_unit_kind(kind: &str) -> bool {
    UNIT_KINDS.contains(&kind)
}

pub fn is_name_kind(kind: &str) -> bool {
    NAME_KINDS.contains(&kind)
}

pub fn is_declarator_kind(kind: &str) -> bool {
    DECLARATOR_KINDS.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_kinds_weigh_one() {
        assert_eq!(weight_of("if_statement"), 1.0);
        assert_eq!(weight_of("elif_clause"), 1.0);
        assert_eq!(weight_of("else_clause"), 1.0);
        assert_eq!(weight_of("for_statement"), 1.0);
        assert_eq!(weight_of("foreach_statement"), 1.0);
        assert_eq!(weight_of("case_statement"), 1.0);
        assert_eq!(weight_of("boolean_operator"), 1.0);
    }

    #[test]
    fn binary_expression_weighs_half() {
        assert_eq!(weight_of("binary_expression"), 0.5);
    }

    #[test]
    fn unknown_kinds_weigh_nothing() {
        assert_eq!(weight_of("call_expression"), 0.0);
        assert_eq!(weight_of("identifier"), 0.0);
        assert_eq!(weight_of(""), 0.0);
    }

    #[test]
    fn unit_kinds() {
        assert!(is_unit_kind("function_definition"));
        assert!(is_unit_kind("method_declaration"));
        assert!(!is_unit_kind("lambda"));
        assert!(!is_unit_kind("class_definition"));
    }

    #[test]
    fn name_and_declarator_kinds() {
        assert!(is_name_kind("identifier"));
        assert!(is_name_kind("name"));
        assert!(!is_name_kind("field_identifier"));
        assert!(is_declarator_kind("function_declarator"));
        assert!(!is_declarator_kind("pointer_declarator"));
    }
}
