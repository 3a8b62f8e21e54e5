//! Repository module
//!
//! A minimal storage capability with two core operations, `append` and
//! `query_by_key`, used for the accumulated record corpus of a session and
//! for the transaction ledger.
//!
//! `InMemoryRepository` keeps items in an ordered `Vec`. A persistent
//! implementation only has to satisfy the same trait; neither the session nor
//! the traversal depends on where items live.

mod memory;
mod types;

pub use memory::InMemoryRepository;
pub use types::{Keyed, Repository};
