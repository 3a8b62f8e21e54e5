//! Page model
//!
//! An immutable, validated window of a remote collection together with the
//! pagination metadata the server reported for it.

mod types;

pub use types::Page;

#[cfg(test)]
mod tests;
