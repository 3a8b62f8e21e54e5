//! Export types

use crate::types::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column header line of the CSV export
pub const CSV_HEADER: &str = "ID,Name,Email,Role,TimeZone,Status,JobTitle";

/// Where exports are written and how files are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Target directory
    pub dir: PathBuf,
    /// File name prefix; the epoch second and extension are appended
    pub prefix: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: "pagerduty_users".to_string(),
        }
    }
}

impl ExporterConfig {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }
}

/// Result of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Records written
    pub count: usize,
}
