//! Transport adapter module
//!
//! One request per page or entity, returning the raw response body.
//!
//! # Overview
//!
//! - `Transport` - the replaceable boundary the traversal and session use
//! - `HttpTransport` - real implementation over `HttpClient`
//! - `InMemoryTransport` - serves an in-memory collection in the same wire
//!   shape, with scripted failures, for tests and offline runs
//!
//! Implementations validate `1 <= limit <= 100` before touching the network
//! and never retry: a non-2xx outcome is returned as `Error::Transport`.

mod http;
mod memory;
mod types;

pub use http::HttpTransport;
pub use memory::{demo_records, InMemoryTransport, RequestLogEntry};
pub use types::{check_fetch_limit, Transport};
