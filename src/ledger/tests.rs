//! Tests for the ledger module

use super::*;
use crate::error::{Error, Result};
use crate::repository::{InMemoryRepository, Repository};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use test_case::test_case;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn service_at(
    now: DateTime<Utc>,
) -> (
    TransactionService<InMemoryRepository<Transaction>>,
    Arc<ManualClock>,
) {
    let clock = Arc::new(ManualClock::new(now));
    let service = TransactionService::with_clock(InMemoryRepository::new(), clock.clone());
    (service, clock)
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

/// Repository whose every operation fails
struct BrokenRepository;

impl Repository<Transaction> for BrokenRepository {
    fn append(&mut self, _item: Transaction) -> Result<()> {
        Err(Error::repository("disk full"))
    }

    fn query_by_key(&self, _key: &str) -> Result<Vec<Transaction>> {
        Err(Error::repository("connection lost"))
    }

    fn scan(&self) -> Result<Vec<Transaction>> {
        Err(Error::repository("connection lost"))
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn len(&self) -> usize {
        0
    }
}

// ============================================================================
// Money Tests
// ============================================================================

#[test_case("750", 75_000 ; "whole")]
#[test_case("750.5", 75_050 ; "one decimal")]
#[test_case("750.00", 75_000 ; "two decimals")]
#[test_case(" 0.01 ", 1 ; "trimmed")]
#[test_case("-3.25", -325 ; "negative")]
fn test_money_parse(input: &str, cents: i64) {
    assert_eq!(money(input).minor_units(), cents);
}

#[test_case("" ; "empty")]
#[test_case("1.234" ; "too many decimals")]
#[test_case("abc" ; "not a number")]
#[test_case(".50" ; "missing whole part")]
#[test_case("1.-5" ; "sign in fraction")]
fn test_money_parse_rejects(input: &str) {
    assert!(input.parse::<Money>().is_err());
}

#[test]
fn test_money_display_and_arithmetic() {
    assert_eq!(Money::from_major(10_000).to_string(), "10000.00");
    assert_eq!(Money::from_minor(-325).to_string(), "-3.25");
    assert_eq!(Money::from_minor(5).to_string(), "0.05");
    assert_eq!(money("1.50") + money("2.75"), money("4.25"));
    assert_eq!(money("1.50") - money("2.75"), money("-1.25"));
    let total: Money = [money("1"), money("2"), money("3.5")].into_iter().sum();
    assert_eq!(total, money("6.50"));
}

// ============================================================================
// Transaction Tests
// ============================================================================

#[test]
fn test_transaction_new() {
    let t = Transaction::new(
        "acc-123",
        money("100.00"),
        "Test transaction",
        TransactionKind::Credit,
        at(2025, 8, 14, 9, 0),
    )
    .unwrap();

    assert!(!t.id().is_empty());
    assert_eq!(t.account_id(), "acc-123");
    assert!(t.is_credit());
    assert!(!t.is_debit());
}

#[test]
fn test_transaction_rejects_bad_input() {
    let now = at(2025, 8, 14, 9, 0);
    assert!(Transaction::new("a", money("-100"), "x", TransactionKind::Debit, now).is_err());
    assert!(Transaction::new("a", money("100"), "  ", TransactionKind::Credit, now).is_err());
}

#[test]
fn test_transaction_ids_are_unique() {
    let now = at(2025, 8, 14, 9, 0);
    let a = Transaction::new("a", money("1"), "x", TransactionKind::Credit, now).unwrap();
    let b = Transaction::new("a", money("1"), "x", TransactionKind::Credit, now).unwrap();
    assert_ne!(a.id(), b.id());
}

// ============================================================================
// Service Validation Tests
// ============================================================================

#[test_case("", "100", "Coffee", "Account ID cannot be blank" ; "blank account")]
#[test_case("acc", "0", "Coffee", "Amount must be positive" ; "zero amount")]
#[test_case("acc", "-5", "Coffee", "Amount must be positive" ; "negative amount")]
#[test_case("acc", "10000.01", "Coffee", "Amount exceeds maximum limit of 10000.00" ; "over max")]
#[test_case("acc", "100", " ", "Description cannot be blank" ; "blank description")]
fn test_process_validation(account: &str, amount: &str, description: &str, message: &str) {
    let (mut service, _) = service_at(at(2025, 8, 14, 9, 0));
    let err = service
        .process(account, money(amount), description, TransactionKind::Debit)
        .unwrap_err();

    assert!(err.to_string().contains(message), "{err}");
    assert!(service.repository().is_empty());
}

#[test]
fn test_process_accepts_max_amount() {
    let (mut service, _) = service_at(at(2025, 8, 14, 9, 0));
    let t = service
        .process("acc", MAX_TRANSACTION_AMOUNT, "Big", TransactionKind::Credit)
        .unwrap();
    assert_eq!(t.amount(), MAX_TRANSACTION_AMOUNT);
    assert_eq!(t.timestamp(), at(2025, 8, 14, 9, 0));
}

// ============================================================================
// Daily Limit Tests
// ============================================================================

#[test]
fn test_daily_limit_is_enforced() {
    let (mut service, _) = service_at(at(2025, 8, 14, 9, 0));
    for _ in 0..5 {
        service
            .process("acc", money("10000"), "Wire", TransactionKind::Debit)
            .unwrap();
    }

    let err = service
        .process("acc", money("0.01"), "One more", TransactionKind::Debit)
        .unwrap_err();
    assert!(err.to_string().contains("Daily limit exceeded"));
    assert!(err.to_string().contains("Current: 50000.00"));
}

#[test]
fn test_daily_limit_is_per_kind_and_account() {
    let (mut service, _) = service_at(at(2025, 8, 14, 9, 0));
    for _ in 0..5 {
        service
            .process("acc", money("10000"), "Wire", TransactionKind::Debit)
            .unwrap();
    }

    assert!(service
        .process("acc", money("100"), "Refund", TransactionKind::Credit)
        .is_ok());
    assert!(service
        .process("other", money("100"), "Wire", TransactionKind::Debit)
        .is_ok());
}

// Daily totals use the real UTC calendar day of the clock, not a fixed date.
#[test]
fn test_daily_limit_resets_at_utc_midnight() {
    let (mut service, clock) = service_at(at(2025, 8, 14, 23, 0));
    for _ in 0..5 {
        service
            .process("acc", money("10000"), "Wire", TransactionKind::Debit)
            .unwrap();
    }
    assert!(service
        .process("acc", money("1"), "Late", TransactionKind::Debit)
        .is_err());

    clock.advance(Duration::hours(1));
    assert!(service
        .process("acc", money("1"), "Next day", TransactionKind::Debit)
        .is_ok());
}

#[test]
fn test_daily_limit_is_not_tied_to_a_fixed_date() {
    let (mut service, clock) = service_at(at(2025, 8, 14, 12, 0));
    for _ in 0..5 {
        service
            .process("acc", money("10000"), "Wire", TransactionKind::Debit)
            .unwrap();
    }

    // a year later the same calendar date text must not matter
    clock.set(at(2026, 3, 2, 12, 0));
    for _ in 0..5 {
        service
            .process("acc", money("10000"), "Wire", TransactionKind::Debit)
            .unwrap();
    }
    assert!(service
        .process("acc", money("1"), "Over", TransactionKind::Debit)
        .is_err());
}

// ============================================================================
// History / Balance / Summary Tests
// ============================================================================

#[test]
fn test_history_newest_first_and_balance() {
    let (mut service, clock) = service_at(at(2025, 8, 14, 9, 0));
    service
        .process("acc", money("500"), "Salary", TransactionKind::Credit)
        .unwrap();
    clock.advance(Duration::minutes(5));
    service
        .process("acc", money("120.50"), "Groceries", TransactionKind::Debit)
        .unwrap();
    clock.advance(Duration::minutes(5));
    service
        .process("acc", money("20"), "Cashback", TransactionKind::Credit)
        .unwrap();

    let history = service.history("acc").unwrap();
    let descriptions: Vec<&str> = history.iter().map(Transaction::description).collect();
    assert_eq!(descriptions, vec!["Cashback", "Groceries", "Salary"]);

    assert_eq!(service.balance("acc").unwrap(), money("399.50"));
    assert_eq!(
        service.summary("acc").unwrap(),
        "Account acc: Balance=399.50, Transactions=3"
    );
}

#[test]
fn test_history_of_unknown_account_is_empty() {
    let (service, _) = service_at(at(2025, 8, 14, 9, 0));
    assert!(service.history("nobody").unwrap().is_empty());
    assert_eq!(service.balance("nobody").unwrap(), Money::ZERO);
    assert_eq!(
        service.summary("nobody").unwrap(),
        "Account nobody: Balance=0.00, Transactions=0"
    );
}

#[test]
fn test_history_rejects_blank_account() {
    let (service, _) = service_at(at(2025, 8, 14, 9, 0));
    assert!(service.history(" ").is_err());
}

// ============================================================================
// Account Tests
// ============================================================================

fn booked(amount: &str, description: &str, kind: TransactionKind) -> Transaction {
    Transaction::new("acc-123", money(amount), description, kind, at(2025, 8, 14, 9, 0)).unwrap()
}

#[test]
fn test_account_totals_by_kind() {
    let account = Account::new(
        "acc-123",
        "cust-456",
        money("1000.00"),
        vec![
            booked("50.00", "Withdrawal", TransactionKind::Debit),
            booked("25.00", "Fee", TransactionKind::Debit),
            booked("200.00", "Deposit", TransactionKind::Credit),
            booked("50.00", "Interest", TransactionKind::Credit),
        ],
    )
    .unwrap();

    assert_eq!(account.id(), "acc-123");
    assert_eq!(account.customer_id(), "cust-456");
    assert_eq!(account.balance(), money("1000.00"));
    assert_eq!(account.transactions().len(), 4);
    assert_eq!(account.total_debits(), money("75.00"));
    assert_eq!(account.total_credits(), money("250.00"));
}

#[test]
fn test_account_without_transactions() {
    let account = Account::new("acc-123", "cust-456", money("1000.00"), Vec::new()).unwrap();
    assert!(account.transactions().is_empty());
    assert_eq!(account.total_debits(), Money::ZERO);
    assert_eq!(account.total_credits(), Money::ZERO);
}

#[test_case("", "cust" ; "blank account id")]
#[test_case("acc", "  " ; "blank customer id")]
fn test_account_rejects_blank_ids(id: &str, customer: &str) {
    assert!(Account::new(id, customer, Money::ZERO, Vec::new()).is_err());
}

#[test]
fn test_service_account_view() {
    let (mut service, clock) = service_at(at(2025, 8, 14, 9, 0));
    service
        .process("acc", money("500"), "Salary", TransactionKind::Credit)
        .unwrap();
    clock.advance(Duration::minutes(1));
    service
        .process("acc", money("120.50"), "Groceries", TransactionKind::Debit)
        .unwrap();

    let account = service.account("acc", "cust-1").unwrap();
    assert_eq!(account.balance(), money("379.50"));
    assert_eq!(account.total_credits(), money("500"));
    assert_eq!(account.total_debits(), money("120.50"));
    assert_eq!(account.transactions()[0].description(), "Groceries");
    assert_eq!(
        account.balance(),
        account.total_credits() - account.total_debits()
    );
}

#[test]
fn test_repository_failures_surface_as_errors() {
    let mut service = TransactionService::new(BrokenRepository);

    let err = service
        .process("acc", money("1"), "x", TransactionKind::Credit)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to check daily limits"));

    let err = service.history("acc").unwrap_err();
    assert!(err.to_string().contains("Failed to retrieve transaction history"));
    assert!(service.balance("acc").is_err());
}
