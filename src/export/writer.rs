//! CSV and JSON writers

use super::types::{ExportSummary, ExporterConfig, CSV_HEADER};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::types::ExportFormat;
use chrono::Utc;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Quote `value` when it contains a comma, quote or newline
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render records as CSV, header first, one line per record
///
/// `Status` is `Record::status_label`, not the raw boolean.
pub fn to_csv(records: &[Record]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let cells = [
            Some(record.id()),
            record.name(),
            record.email(),
            record.role(),
            record.timezone(),
            record.status_label(),
            record.job_title(),
        ];
        let line = cells
            .iter()
            .map(|cell| cell.map(escape_csv).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Render records as a pretty-printed JSON array in wire shape
pub fn to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes exports under a configured directory
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExporterConfig,
}

impl Exporter {
    pub fn new(config: ExporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// `<dir>/<prefix>_<epoch seconds>.<ext>`
    pub fn next_path(&self, format: ExportFormat) -> PathBuf {
        let name = format!(
            "{}_{}.{}",
            self.config.prefix,
            Utc::now().timestamp(),
            format.extension()
        );
        self.config.dir.join(name)
    }

    /// Export to a freshly named file in the configured directory
    pub fn export(&self, records: &[Record], format: ExportFormat) -> Result<ExportSummary> {
        let path = self.next_path(format);
        self.export_to(&path, records, format)
    }

    /// Export to an explicit path
    pub fn export_to(
        &self,
        path: &Path,
        records: &[Record],
        format: ExportFormat,
    ) -> Result<ExportSummary> {
        let contents = match format {
            ExportFormat::Csv => to_csv(records),
            ExportFormat::Json => to_json(records)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::export(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        fs::write(path, contents)
            .map_err(|e| Error::export(format!("cannot write {}: {e}", path.display())))?;

        info!(path = %path.display(), count = records.len(), %format, "Exported records");
        Ok(ExportSummary {
            path: path.to_path_buf(),
            format,
            count: records.len(),
        })
    }
}
