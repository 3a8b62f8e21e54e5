//! Record model
//!
//! A decoded remote entity that separates the fields this client knows about
//! from the ones it does not, preserving the latter losslessly.
//!
//! # Overview
//!
//! - `Record` - immutable entity with typed known fields and an ordered
//!   residual map of unrecognized fields
//! - `decode` / `encode` - translation between the wire object and `Record`
//!
//! Decoding works on a generic `serde_json::Value` tree rather than straight
//! into a struct so that every key not matched by the field table can be
//! captured with its original value.

mod codec;
mod types;

pub use codec::{decode, decode_object, encode, is_known_field, KNOWN_FIELDS};
pub use types::Record;
