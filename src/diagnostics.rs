//! Compiler output parsing.
//!
//! The host runs the VeLang compiler and hands its stderr here; this module
//! only turns `line:col: severity: message` lines into positioned
//! diagnostics. Lines that do not carry that shape are skipped — compiler
//! banners and context lines are expected, not errors.

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A hard error reported by the compiler
    #[default]
    Error,
    /// A warning that doesn't fail the build
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }
}

/// One positioned compiler message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line, as printed by the compiler.
    pub line: u32,
    /// 1-based source column, as printed by the compiler.
    pub column: u32,
    /// Highlight length in characters; the compiler does not report one,
    /// so a single character is marked.
    pub length: u32,
    pub message: String,
    pub severity: Severity,
}

/// Parse compiler output into diagnostics.
///
/// Recognizes `line:col: error|warning: message` anywhere in a line, so a
/// `file.ve:3:5: error: ...` prefix form parses too.
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Diagnostic> {
    let segments: Vec<&str> = line.split(':').collect();
    if segments.len() < 4 {
        return None;
    }

    for window in 0..=segments.len() - 4 {
        let Ok(line_no) = segments[window].trim().parse::<u32>() else {
            continue;
        };
        let Ok(column) = segments[window + 1].trim().parse::<u32>() else {
            continue;
        };
        let Some(severity) = Severity::parse(segments[window + 2].trim()) else {
            continue;
        };

        let message = segments[window + 3..].join(":").trim().to_string();
        if message.is_empty() {
            continue;
        }

        return Some(Diagnostic {
            line: line_no,
            column,
            length: 1,
            message,
            severity,
        });
    }

    None
}
