//! Session module
//!
//! Interactive exploration of a paginated collection as a state machine.
//!
//! # Overview
//!
//! A `Session` executes one `Command` at a time to completion and reports an
//! `Outcome`:
//!
//! ```text
//! Idle ──ViewPage──▶ PageLoaded ──▶ { PageLoaded, Searching, BulkLoading,
//!                                     Exporting, Terminated }
//! ```
//!
//! Navigation state (offset, page size, current page) changes only after a
//! fetch succeeds. A 429 from any fetch causes one fixed backoff wait, after
//! which the error is returned; the request is never reissued automatically.

mod machine;
mod types;

pub use machine::Session;
pub use types::{
    Command, LoadSummary, Outcome, PageView, SearchResults, SessionConfig, SessionState,
    SessionSummary, StatsReport,
};
