use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One match returned by the indexer: where a symbol occurs and the raw
/// source line at that location.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub file_path: String,
    pub symbol_name: String,
    /// 1-based; a parsed record never carries 0.
    pub line_number: u32,
    /// May be empty when the indexer reports nothing past the line number.
    pub line_text: String,
}

/// A saved cursor position, pushed to history before jumping away.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NavigationFrame {
    pub file_path: String,
    /// 0 means unknown/unset.
    pub line_number: u32,
    pub column_number: u32,
}

impl NavigationFrame {
    pub fn new(file_path: impl Into<String>, line_number: u32, column_number: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            column_number,
        }
    }
}

/// Navigation intents. Each maps to a fixed cscope line-oriented query
/// number; extending this enum means extending `request_code` with it.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// All occurrences of a symbol.
    Symbol,
    /// Places where the symbol is defined.
    Definitions,
    /// Functions calling the given function.
    Callers,
    /// Files including the given file.
    Includers,
}

impl QueryKind {
    pub fn request_code(self) -> u32 {
        match self {
            QueryKind::Symbol => 0,
            QueryKind::Definitions => 1,
            QueryKind::Callers => 3,
            QueryKind::Includers => 8,
        }
    }

    /// Label used in user-facing messages.
    pub fn describe(self) -> &'static str {
        match self {
            QueryKind::Symbol => "occurrences",
            QueryKind::Definitions => "definitions",
            QueryKind::Callers => "callers",
            QueryKind::Includers => "including files",
        }
    }
}
