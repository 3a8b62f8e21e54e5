//! Ledger module
//!
//! A small transaction service over the same `Repository` capability the
//! session uses for its record corpus.
//!
//! # Rules
//!
//! - A single transaction may not exceed 10 000.00.
//! - Per account and per kind, the amounts booked on one UTC calendar day
//!   may not exceed 50 000.00. "Today" comes from an injectable `Clock`.
//! - History is returned newest first; the balance is credits minus debits.
//!   `Account` bundles that history with its debit and credit totals.

mod money;
mod service;
mod types;

pub use money::Money;
pub use service::{TransactionService, DAILY_LIMIT, MAX_TRANSACTION_AMOUNT};
pub use types::{Account, Clock, ManualClock, SystemClock, Transaction, TransactionKind};

#[cfg(test)]
mod tests;
