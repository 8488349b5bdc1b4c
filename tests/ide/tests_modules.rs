//! Module catalog tests for the Analyzer facade.

use velang::base::Position;
use velang::complete::CandidateKind;
use velang::ide::Analyzer;
use velang::project::fallback_catalog;

use crate::helpers::offline_analyzer;

// =============================================================================
// FALLBACK CATALOG
// =============================================================================

#[test]
fn test_missing_install_yields_exactly_the_fallback_catalog() {
    let analyzer = offline_analyzer();
    let modules = analyzer.list_modules();

    assert_eq!(modules, fallback_catalog());
    assert_eq!(modules.len(), 10);

    let io = modules.iter().find(|m| m.name == "std/io").unwrap();
    assert_eq!(io.description, "Input/output operations");
    let crypto = modules.iter().find(|m| m.name == "std/crypto").unwrap();
    assert_eq!(crypto.description, "Cryptographic functions");
}

// =============================================================================
// REAL INSTALL + WORKSPACE
// =============================================================================

#[test]
fn test_standard_then_local_modules() {
    let stdlib = tempfile::tempdir().unwrap();
    std::fs::write(stdlib.path().join("io.ve"), "// Reading and writing\n").unwrap();
    std::fs::write(stdlib.path().join("math.ve"), "fn abs(x: i32) {\n}\n").unwrap();

    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("main.ve"), "fn main() {\n}\n").unwrap();
    std::fs::create_dir(workspace.path().join("util")).unwrap();
    std::fs::write(workspace.path().join("util").join("strings.ve"), "").unwrap();

    let analyzer = Analyzer::new()
        .with_stdlib_root(stdlib.path())
        .with_workspace_root(workspace.path())
        .with_open_file("main");
    let modules = analyzer.list_modules();

    let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
    // Standard modules first, then local ones; the open file is excluded
    assert_eq!(names, vec!["std/io", "std/math", "./util/strings"]);

    assert_eq!(modules[0].description, "Reading and writing");
    assert_eq!(modules[1].description, "math module");
    assert_eq!(modules[2].description, "Local module: util/strings");
}

#[test]
fn test_import_completion_includes_local_modules() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("util.ve"), "").unwrap();

    let analyzer = offline_analyzer()
        .with_workspace_root(workspace.path())
        .with_open_file("main");
    let items = analyzer.completion_candidates("import \"./", Position::new(0, 10));

    let labels: Vec<_> = items.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["./util"]);
    assert_eq!(items[0].kind, CandidateKind::Module);
    assert_eq!(items[0].insert_text, "import \"./util\";");
    assert_eq!(items[0].detail.as_deref(), Some("Local module"));
}
