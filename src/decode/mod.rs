//! Response decoder module
//!
//! Turns raw response bodies into `Page`s and `Record`s.
//!
//! # Overview
//!
//! The collection endpoint wraps its items under a named key next to the
//! pagination metadata:
//!
//! ```text
//! { "users": [ {...}, ... ], "limit": 25, "offset": 0, "more": true, "total": null }
//! ```
//!
//! and the single-entity endpoint wraps the record under a singular key:
//!
//! ```text
//! { "user": { ... } }
//! ```

mod decoders;
mod types;

pub use decoders::EnvelopeDecoder;
pub use types::{EnvelopeConfig, ResponseDecoder};
