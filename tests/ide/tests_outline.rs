//! Document outline tests for the Analyzer facade.

use velang::outline::SymbolKind;

use crate::helpers::offline_analyzer;
use crate::helpers::source_fixtures::*;

// =============================================================================
// SINGLE FUNCTION
// =============================================================================

#[test]
fn test_single_function_buffer_yields_one_symbol() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(ADD_FUNCTION);

    assert_eq!(symbols.len(), 1);
    let func = &symbols[0];
    assert_eq!(func.name, "add");
    assert_eq!(func.kind, SymbolKind::Function);
    // Range ends at the line of the matching closing brace
    assert_eq!(func.range.end.line, 3);
}

#[test]
fn test_function_child_is_annotated_local() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(ADD_FUNCTION);

    let children = &symbols[0].children;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "c");
    assert_eq!(children[0].kind, SymbolKind::Variable);
}

// =============================================================================
// MIXED DECLARATIONS
// =============================================================================

#[test]
fn test_mixed_buffer_top_level_order() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(MULTIPLE_DECLARATIONS);

    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["limit", "main", "Point", "Color"]);

    let kinds: Vec<_> = symbols.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SymbolKind::Variable,
            SymbolKind::Function,
            SymbolKind::Struct,
            SymbolKind::Enum,
        ]
    );
}

#[test]
fn test_struct_and_enum_children() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(MULTIPLE_DECLARATIONS);

    let point = symbols.iter().find(|s| s.name == "Point").unwrap();
    let fields: Vec<_> = point.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(fields, vec!["x", "y"]);

    let color = symbols.iter().find(|s| s.name == "Color").unwrap();
    let variants: Vec<_> = color.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(variants, vec!["Red", "Green", "Blue"]);
    assert!(color.children.iter().all(|c| c.kind == SymbolKind::EnumVariant));
}

#[test]
fn test_unannotated_local_stays_out_of_outline() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(MULTIPLE_DECLARATIONS);

    let main = symbols.iter().find(|s| s.name == "main").unwrap();
    assert!(main.children.is_empty());
}

// =============================================================================
// BEST-EFFORT INPUT
// =============================================================================

#[test]
fn test_unterminated_function_extends_to_buffer_end() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline(UNTERMINATED_FUNCTION);

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].range.end.line, 1);
    assert_eq!(symbols[0].children.len(), 1);
    assert_eq!(symbols[0].children[0].name, "started");
}

#[test]
fn test_malformed_lines_are_skipped_not_fatal() {
    let analyzer = offline_analyzer();
    let symbols = analyzer.build_outline("??? not velang ???\n}{\nfn ok() {\n}\n");

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "ok");
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[test]
fn test_entry_point_lines() {
    let analyzer = offline_analyzer();

    assert_eq!(analyzer.entry_points(MULTIPLE_DECLARATIONS), vec![4]);
    assert!(analyzer.entry_points(ADD_FUNCTION).is_empty());
}
