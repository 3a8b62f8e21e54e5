//! Export module
//!
//! Serializes accumulated records to CSV or pretty-printed JSON files.
//! Exporters only read records; they never fetch.
//!
//! The CSV `Status` column carries the label shown in the detail view
//! (`Active` / `Invitation Pending`, empty when unknown) rather than the raw
//! `invitation_sent` boolean. The JSON export keeps the raw field.

mod types;
mod writer;

pub use types::{ExportSummary, ExporterConfig, CSV_HEADER};
pub use writer::{escape_csv, to_csv, to_json, Exporter};
