// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagewise
//!
//! A client engine for exploring offset/limit paginated REST collections
//! whose record schema keeps evolving.
//!
//! ## Features
//!
//! - **Lossless records**: attributes the client does not know are kept,
//!   shown, and written back out unchanged
//! - **Lazy traversal**: walk a whole collection page by page, trusting only
//!   the server's `more` flag
//! - **Interactive sessions**: navigate, search, load everything, export,
//!   with a single fixed backoff when the server answers 429
//! - **Statistics**: call counts, latency and category distributions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewise::{EnvelopeDecoder, HttpClient, HttpClientConfig, HttpTransport, Paginator};
//! use pagewise::{AuthConfig, TraversalConfig};
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pagewise::Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.pagerduty.com")
//!         .build();
//!     let client = HttpClient::with_auth(config, AuthConfig::token("..."))?;
//!     let paginator = Paginator::new(
//!         Arc::new(HttpTransport::new(client, "/users")),
//!         Arc::new(EnvelopeDecoder::new()),
//!     );
//!
//!     let mut pages = paginator.traverse(TraversalConfig::new(0, 100));
//!     while let Some(page) = pages.next().await {
//!         for user in page?.items() {
//!             println!("{} {:?}", user.id(), user.name());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                 Session (command state machine)               │
//! │  navigate · search · load all · stats · export · lookup       │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬──────────────┬────┴───────┬────────────┬───────────┐
//! │ Paginator│  Transport   │  Decoder   │   Stats    │  Export   │
//! ├──────────┼──────────────┼────────────┼────────────┼───────────┤
//! │ Lazy     │ HTTP         │ Envelope   │ Calls      │ CSV       │
//! │ Paced    │ In-memory    │ Records    │ Latency    │ JSON      │
//! │ Cancel   │ Throttle     │ Unknown    │ Categories │           │
//! └──────────┴──────────────┴────────────┴────────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Record model with unknown-field preservation
pub mod record;

/// Page model
pub mod page;

/// Authentication header handling
pub mod auth;

/// HTTP client with optional throttling
pub mod http;

/// Transport adapters (HTTP, in-memory)
pub mod transport;

/// Response envelope decoding
pub mod decode;

/// Lazy offset/limit traversal
pub mod pagination;

/// Keyed append-only storage
pub mod repository;

/// Call and category statistics
pub mod stats;

/// CSV and JSON export
pub mod export;

/// Interactive session state machine
pub mod session;

/// Transaction ledger with daily limits
pub mod ledger;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use config::ExplorerConfig;
pub use decode::{EnvelopeConfig, EnvelopeDecoder, ResponseDecoder};
pub use http::{HttpClient, HttpClientConfig};
pub use page::Page;
pub use pagination::{Paginator, TraversalConfig};
pub use record::Record;
pub use session::{Command, Outcome, Session, SessionConfig};
pub use transport::{HttpTransport, InMemoryTransport, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
