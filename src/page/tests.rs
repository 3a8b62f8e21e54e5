//! Tests for the page model

use super::*;
use crate::record::Record;
use test_case::test_case;

fn letters(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_construction_rejects_negative_limit() {
    let err = Page::<String>::new(-1, 0, false, None, vec![]).unwrap_err();
    assert!(matches!(err, crate::Error::Validation { .. }));
}

#[test]
fn test_construction_rejects_negative_offset() {
    let err = Page::<String>::new(10, -1, false, None, vec![]).unwrap_err();
    assert!(matches!(err, crate::Error::Validation { .. }));
}

#[test]
fn test_construction_rejects_negative_total() {
    assert!(Page::<String>::new(10, 0, false, Some(-5), vec![]).is_err());
}

#[test]
fn test_total_is_not_checked_against_items() {
    let page = Page::new(10, 0, false, Some(500), letters(&["a"])).unwrap();
    assert_eq!(page.total(), Some(500));
    assert_eq!(page.item_count(), 1);
}

#[test]
fn test_items_are_owned_by_the_page() {
    let mut source = letters(&["item1", "item2"]);
    let page = Page::new(10, 0, false, None, source.clone()).unwrap();
    source.push("item3".to_string());

    assert_eq!(page.item_count(), 2);
    assert_eq!(page.items(), letters(&["item1", "item2"]).as_slice());
}

#[test]
fn test_has_more_and_emptiness() {
    let empty = Page::<String>::new(10, 0, true, None, vec![]).unwrap();
    assert!(empty.has_more());
    assert!(empty.is_empty());
    assert_eq!(empty.item_count(), 0);

    let full = Page::new(10, 0, false, None, letters(&["a", "b", "c"])).unwrap();
    assert!(!full.has_more());
    assert!(!full.is_empty());
    assert_eq!(full.item_count(), 3);
}

#[test]
fn test_scenario_mid_collection_page() {
    let page = Page::<Record>::new(25, 50, true, Some(200), vec![]).unwrap();

    assert_eq!(page.next_offset(), 75);
    assert_eq!(page.previous_offset(), 25);
    assert_eq!(page.current_page_number().unwrap(), 3);
    assert_eq!(page.estimated_total_pages(), Some(8));
}

#[test]
fn test_scenario_zero_limit_page_number_is_division_by_zero() {
    let page = Page::<Record>::new(0, 0, false, Some(100), vec![]).unwrap();

    let err = page.current_page_number().unwrap_err();
    assert!(err.to_string().contains("division by zero"));
    assert_eq!(page.estimated_total_pages(), None);
}

#[test_case(25, 50, 25 ; "normal")]
#[test_case(25, 10, 0 ; "would go negative")]
#[test_case(25, 0, 0 ; "already at start")]
fn test_previous_offset(limit: i64, offset: i64, expected: u64) {
    let page = Page::new(limit, offset, false, None, letters(&["a"])).unwrap();
    assert_eq!(page.previous_offset(), expected);
}

#[test_case(25, Some(100), Some(4) ; "exact")]
#[test_case(25, Some(101), Some(5) ; "with remainder")]
#[test_case(25, Some(0), Some(0) ; "empty collection")]
#[test_case(25, None, None ; "unknown total")]
fn test_estimated_total_pages(limit: i64, total: Option<i64>, expected: Option<u64>) {
    let page = Page::new(limit, 0, true, total, letters(&["a"])).unwrap();
    assert_eq!(page.estimated_total_pages(), expected);
}

#[test]
fn test_is_first_page() {
    assert!(Page::new(10, 0, true, None, letters(&["a"])).unwrap().is_first_page());
    assert!(!Page::new(10, 10, true, None, letters(&["a"])).unwrap().is_first_page());
}

#[test]
fn test_pagination_summary() {
    let page = Page::new(10, 20, true, None, letters(&["a", "b"])).unwrap();
    assert_eq!(
        page.pagination_summary(),
        "offset=20, limit=10, count=2, more=true, total=unknown"
    );
}

#[test]
fn test_into_items() {
    let page = Page::new(10, 0, false, Some(2), letters(&["x", "y"])).unwrap();
    assert_eq!(page.into_items(), letters(&["x", "y"]));
}
