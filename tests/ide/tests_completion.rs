//! Completion tests for the Analyzer facade.

use velang::base::Position;
use velang::complete::CandidateKind;
use velang::ide::Analyzer;
use velang::keywords;

use crate::helpers::offline_analyzer;
use crate::helpers::source_fixtures::*;

// =============================================================================
// IMPORT COMPLETION
// =============================================================================

#[test]
fn test_unterminated_import_quote_offers_matching_modules_only() {
    let analyzer = offline_analyzer();
    let source = "import \"std/";
    let items = analyzer.completion_candidates(source, Position::new(0, 12));

    assert!(!items.is_empty());
    assert!(items.iter().all(|c| c.kind == CandidateKind::Module));
    assert!(items.iter().all(|c| c.label.starts_with("std/")));
    // Each candidate rewrites the line into a complete statement
    for item in &items {
        assert!(item.replace_line);
        assert_eq!(item.insert_text, format!("import \"{}\";", item.label));
    }
}

#[test]
fn test_import_before_quote_offers_quoted_snippets() {
    let analyzer = offline_analyzer();
    let items = analyzer.completion_candidates("import ", Position::new(0, 7));

    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|c| c.label.starts_with('"') && c.label.ends_with('"')));
}

#[test]
fn test_import_keyword_is_single_candidate() {
    let analyzer = offline_analyzer();
    let items = analyzer.completion_candidates("import", Position::new(0, 6));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "import");
    assert_eq!(items[0].kind, CandidateKind::Keyword);
}

// =============================================================================
// FUNCTION AND IDENTIFIER COMPLETION
// =============================================================================

#[test]
fn test_fn_keyword_offers_main_skeleton() {
    let analyzer = offline_analyzer();
    let items = analyzer.completion_candidates("fn ", Position::new(0, 3));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "main");
    assert!(items[0].insert_text.contains("$0"));
}

#[test]
fn test_identifier_prefix_matches_buffer_function() {
    let source = format!("{ADD_FUNCTION}\nad");
    let analyzer = offline_analyzer();
    let items = analyzer.completion_candidates(&source, Position::new(4, 2));

    let add = items
        .iter()
        .find(|c| c.kind == CandidateKind::Function && c.label == "add")
        .unwrap();
    assert_eq!(add.insert_text, "add(${1:a}, ${2:b})");
    assert_eq!(add.sort_key, "1add");
}

#[test]
fn test_empty_context_offers_functions_variables_and_keywords() {
    let analyzer = offline_analyzer();
    // Cursor at the start of a blank line inside main
    let items = analyzer.completion_candidates(MULTIPLE_DECLARATIONS, Position::new(5, 0));

    assert!(items.iter().any(|c| c.kind == CandidateKind::Function && c.label == "main"));
    assert!(items.iter().any(|c| c.kind == CandidateKind::Variable && c.label == "limit"));
    for kw in keywords::KEYWORDS {
        assert!(items.iter().any(|c| c.label == *kw), "missing keyword {kw}");
    }
}

#[test]
fn test_sort_keys_tier_candidates() {
    let analyzer = offline_analyzer();
    let mut items = analyzer.completion_candidates(MULTIPLE_DECLARATIONS, Position::new(5, 0));
    items.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    let first_function = items
        .iter()
        .position(|c| c.kind == CandidateKind::Function)
        .unwrap();
    let last_keyword = items
        .iter()
        .rposition(|c| c.kind == CandidateKind::Keyword)
        .unwrap();
    let first_variable = items
        .iter()
        .position(|c| c.kind == CandidateKind::Variable)
        .unwrap();

    assert!(last_keyword < first_function);
    assert!(first_function < first_variable);
}

// =============================================================================
// IMPORTED STANDARD-LIBRARY FUNCTIONS
// =============================================================================

#[test]
fn test_imported_module_functions_become_candidates() {
    let stdlib = tempfile::tempdir().unwrap();
    std::fs::write(
        stdlib.path().join("io.ve"),
        "// Input/output\nexport fn read_line(prompt: str) {\n}\nexport fn print(value: str) {\n}\n",
    )
    .unwrap();

    let analyzer = Analyzer::new().with_stdlib_root(stdlib.path());
    let source = "import \"std/io\";\n\nfn main() {\n}\n";
    let items = analyzer.completion_candidates(source, Position::new(1, 0));

    let read_line = items
        .iter()
        .find(|c| c.kind == CandidateKind::Function && c.label == "read_line")
        .unwrap();
    assert_eq!(read_line.insert_text, "read_line(${1:prompt})");
    assert_eq!(read_line.detail.as_deref(), Some("Function (prompt: str)"));
}

#[test]
fn test_unimported_module_functions_stay_hidden() {
    let stdlib = tempfile::tempdir().unwrap();
    std::fs::write(stdlib.path().join("io.ve"), "export fn read_line(prompt: str) {\n}\n").unwrap();

    let analyzer = Analyzer::new().with_stdlib_root(stdlib.path());
    let items = analyzer.completion_candidates("fn main() {\n}\n", Position::new(1, 0));

    assert!(!items.iter().any(|c| c.label == "read_line"));
}

// =============================================================================
// STABILITY
// =============================================================================

#[test]
fn test_completion_is_idempotent() {
    let analyzer = offline_analyzer();
    let source = format!("{ADD_FUNCTION}\nad");

    let first = analyzer.completion_candidates(&source, Position::new(4, 2));
    let second = analyzer.completion_candidates(&source, Position::new(4, 2));

    assert_eq!(first, second);
}
