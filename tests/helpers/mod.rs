
use velang::ide::Analyzer;

/// Analyzer pointed at a location with no standard-library install, so
/// module listings come from the fallback catalog.
pub fn offline_analyzer() -> Analyzer {
    Analyzer::new().with_stdlib_root("/nonexistent/velang/stdlib")
}
