//! Common types used throughout pagewise
//!
//! This module contains shared type definitions, type aliases,
//! and limits used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered)
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Page Size Limits
// ============================================================================

/// Smallest page size the collection endpoint accepts
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size the collection endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used by interactive sessions until changed
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Check that a page size lies within `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`
pub fn check_page_size(size: u32) -> Result<u32> {
    if (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(Error::precondition(format!(
            "page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {size}"
        )))
    }
}

// ============================================================================
// Export Format
// ============================================================================

/// Serialization format for exporting accumulated records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a fixed column set
    #[default]
    Csv,
    /// Pretty-printed JSON array of full records
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "c" => Ok(ExportFormat::Csv),
            "json" | "j" => Ok(ExportFormat::Json),
            other => Err(Error::precondition(format!(
                "unknown export format '{other}', choose 'csv' or 'json'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1 ; "lower bound")]
    #[test_case(25 ; "middle")]
    #[test_case(100 ; "upper bound")]
    fn test_check_page_size_accepts(size: u32) {
        assert_eq!(check_page_size(size).unwrap(), size);
    }

    #[test_case(0 ; "zero")]
    #[test_case(101 ; "above max")]
    fn test_check_page_size_rejects(size: u32) {
        assert!(check_page_size(size).unwrap_err().is_precondition());
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" J ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
