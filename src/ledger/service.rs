//! Transaction service

use super::money::Money;
use super::types::{Account, Clock, SystemClock, Transaction, TransactionKind};
use crate::error::{Error, Result};
use crate::repository::Repository;
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest amount accepted for a single transaction
pub const MAX_TRANSACTION_AMOUNT: Money = Money::from_major(10_000);

/// Largest total per account, per kind, per UTC calendar day
pub const DAILY_LIMIT: Money = Money::from_major(50_000);

/// Validates, books and reports transactions
pub struct TransactionService<R> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: Repository<Transaction>> TransactionService<R> {
    /// Service using the system clock
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate, check the daily limit, then book the transaction
    pub fn process(
        &mut self,
        account_id: &str,
        amount: Money,
        description: &str,
        kind: TransactionKind,
    ) -> Result<Transaction> {
        validate(account_id, amount, description)?;

        let now = self.clock.now();
        let booked = self
            .repository
            .query_by_key(account_id)
            .map_err(|_| Error::repository("Failed to check daily limits"))?;
        let today = now.date_naive();
        let daily_total: Money = booked
            .iter()
            .filter(|t| t.kind() == kind && t.timestamp().date_naive() == today)
            .map(Transaction::amount)
            .sum();

        if daily_total + amount > DAILY_LIMIT {
            warn!(account_id, %daily_total, %amount, "Daily limit exceeded");
            return Err(Error::validation(format!(
                "Daily limit exceeded. Current: {daily_total}, Attempted: {amount}, Limit: {DAILY_LIMIT}"
            )));
        }

        let transaction = Transaction::new(account_id, amount, description, kind, now)?;
        self.repository
            .append(transaction.clone())
            .map_err(|e| Error::repository(format!("Transaction processing failed: {e}")))?;

        debug!(account_id, id = transaction.id(), %amount, "Booked transaction");
        Ok(transaction)
    }

    /// Transactions of an account, newest first
    pub fn history(&self, account_id: &str) -> Result<Vec<Transaction>> {
        if account_id.trim().is_empty() {
            return Err(Error::validation("Account ID cannot be blank"));
        }
        let mut transactions = self
            .repository
            .query_by_key(account_id)
            .map_err(|_| Error::repository("Failed to retrieve transaction history"))?;
        transactions.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(transactions)
    }

    /// Credits minus debits
    pub fn balance(&self, account_id: &str) -> Result<Money> {
        Ok(balance_of(&self.history(account_id)?))
    }

    /// Account view over the booked history, balance derived from it
    pub fn account(&self, account_id: &str, customer_id: &str) -> Result<Account> {
        let history = self.history(account_id)?;
        Account::new(account_id, customer_id, balance_of(&history), history)
    }

    /// `Account <id>: Balance=<balance>, Transactions=<count>`
    pub fn summary(&self, account_id: &str) -> Result<String> {
        let history = self.history(account_id)?;
        Ok(format!(
            "Account {account_id}: Balance={}, Transactions={}",
            balance_of(&history),
            history.len()
        ))
    }
}

fn validate(account_id: &str, amount: Money, description: &str) -> Result<()> {
    if account_id.trim().is_empty() {
        return Err(Error::validation("Account ID cannot be blank"));
    }
    if !amount.is_positive() {
        return Err(Error::validation("Amount must be positive"));
    }
    if amount > MAX_TRANSACTION_AMOUNT {
        return Err(Error::validation(format!(
            "Amount exceeds maximum limit of {MAX_TRANSACTION_AMOUNT}"
        )));
    }
    if description.trim().is_empty() {
        return Err(Error::validation("Description cannot be blank"));
    }
    Ok(())
}

fn balance_of(transactions: &[Transaction]) -> Money {
    transactions.iter().fold(Money::ZERO, |acc, t| match t.kind() {
        TransactionKind::Credit => acc + t.amount(),
        TransactionKind::Debit => acc - t.amount(),
    })
}
