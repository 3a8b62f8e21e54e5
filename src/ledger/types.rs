//! Ledger types

use super::money::Money;
use crate::error::{Error, Result};
use crate::repository::Keyed;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Debit,
    Credit,
}

/// One booked transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    account_id: String,
    amount: Money,
    description: String,
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction with a fresh id
    ///
    /// The amount must be positive and the description non-blank.
    pub fn new(
        account_id: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let description = description.into();
        if !amount.is_positive() {
            return Err(Error::validation("Amount must be positive"));
        }
        if description.trim().is_empty() {
            return Err(Error::validation("Description cannot be blank"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.into(),
            amount,
            description,
            timestamp,
            kind,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }
}

impl Keyed for Transaction {
    fn key(&self) -> &str {
        &self.account_id
    }
}

/// Snapshot of one account and its booked transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: String,
    customer_id: String,
    balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        balance: Money,
        transactions: Vec<Transaction>,
    ) -> Result<Self> {
        let id = id.into();
        let customer_id = customer_id.into();
        if id.trim().is_empty() {
            return Err(Error::validation("Account ID cannot be blank"));
        }
        if customer_id.trim().is_empty() {
            return Err(Error::validation("Customer ID cannot be blank"));
        }
        Ok(Self {
            id,
            customer_id,
            balance,
            transactions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of all debit amounts
    pub fn total_debits(&self) -> Money {
        self.total_of(TransactionKind::Debit)
    }

    /// Sum of all credit amounts
    pub fn total_credits(&self) -> Money {
        self.total_of(TransactionKind::Credit)
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
