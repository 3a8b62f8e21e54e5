//! Pagination module
//!
//! Offset/limit traversal of a remote collection.
//!
//! # Overview
//!
//! `Paginator::traverse` produces a lazy `Stream` of pages starting at a
//! given offset. Each step fetches one page, yields it, and, if the server
//! reported `more`, advances the offset by the page's limit. Termination is
//! driven only by the `more` flag; `total` is never consulted.
//!
//! Between requests the stream waits at least the configured pacing delay,
//! and an optional cancellation token is checked before every fetch (never
//! during one).

mod traversal;
mod types;

pub use traversal::{PageStream, Paginator, StepStream};
pub use types::{PaginationState, TraversalConfig, TraversalStep};
