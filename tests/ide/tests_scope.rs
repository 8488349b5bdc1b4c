//! Scope resolution tests for the Analyzer facade.

use velang::base::Position;
use velang::scope::ScopeKind;

use crate::helpers::offline_analyzer;
use crate::helpers::source_fixtures::*;

#[test]
fn test_parameters_locals_then_value_preview() {
    let analyzer = offline_analyzer();
    // Cursor at the end of the `return c;` line
    let bindings = analyzer.resolve_scope(ADD_FUNCTION, Position::new(2, 13));

    assert_eq!(bindings.len(), 3);

    assert_eq!(bindings[0].name, "a");
    assert_eq!(bindings[0].ty, "i32");
    assert_eq!(bindings[0].scope, ScopeKind::Parameter);

    assert_eq!(bindings[1].name, "b");
    assert_eq!(bindings[1].scope, ScopeKind::Parameter);

    assert_eq!(bindings[2].name, "c");
    assert_eq!(bindings[2].ty, "i32");
    assert_eq!(bindings[2].scope, ScopeKind::Local);
    assert_eq!(bindings[2].value_preview.as_deref(), Some("a + b"));
}

#[test]
fn test_ordering_parameters_locals_globals() {
    let analyzer = offline_analyzer();
    // Cursor on the `print(item);` line inside main
    let bindings = analyzer.resolve_scope(MULTIPLE_DECLARATIONS, Position::new(7, 8));

    let tiers: Vec<(&str, ScopeKind)> = bindings
        .iter()
        .map(|b| (b.name.as_str(), b.scope))
        .collect();
    assert_eq!(
        tiers,
        vec![
            ("total", ScopeKind::Local),
            ("item", ScopeKind::Loop),
            ("limit", ScopeKind::Global),
        ]
    );
}

#[test]
fn test_declaration_after_cursor_not_in_scope() {
    let source = "fn f() {\n    let before: i32 = 1;\n    let after: i32 = 2;\n    return 0;\n}";
    let analyzer = offline_analyzer();
    // Cursor on the `let after` line itself
    let bindings = analyzer.resolve_scope(source, Position::new(2, 4));

    let names: Vec<_> = bindings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["before"]);
}

#[test]
fn test_inferred_types_for_unannotated_locals() {
    let analyzer = offline_analyzer();
    let bindings = analyzer.resolve_scope(MULTIPLE_DECLARATIONS, Position::new(7, 8));

    let total = bindings.iter().find(|b| b.name == "total").unwrap();
    assert_eq!(total.ty, "i32"); // inferred from `0`

    let item = bindings.iter().find(|b| b.name == "item").unwrap();
    assert_eq!(item.ty, "iterator");
}

#[test]
fn test_top_level_cursor_sees_only_globals() {
    let analyzer = offline_analyzer();
    // Cursor on the blank line after the import
    let bindings = analyzer.resolve_scope(MULTIPLE_DECLARATIONS, Position::new(1, 0));

    let names: Vec<_> = bindings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["limit"]);
    assert_eq!(bindings[0].scope, ScopeKind::Global);
}

#[test]
fn test_unterminated_body_still_resolves() {
    let analyzer = offline_analyzer();
    let bindings = analyzer.resolve_scope(UNTERMINATED_FUNCTION, Position::new(2, 0));

    let names: Vec<_> = bindings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["started"]);
}
