//! Tests for page-window arithmetic.

use staylist_core::PageRequest;

#[test]
fn defaults_to_first_page() {
    let page = PageRequest::parse(None).unwrap();
    assert_eq!(page.page(), 1);
    assert_eq!(page.offset(3), 0);
}

#[test]
fn rejects_non_integer_pages() {
    let err = PageRequest::parse(Some("abc")).unwrap_err();
    assert_eq!(err.errors["page"], vec!["A valid integer is required."]);
}

#[test]
fn rejects_non_positive_pages() {
    assert!(PageRequest::parse(Some("0")).is_err());
    assert!(PageRequest::parse(Some("-2")).is_err());
}

#[test]
fn window_slices_by_page() {
    let items = [1, 2, 3, 4, 5];
    let first = PageRequest::parse(Some("1")).unwrap();
    assert_eq!(first.window(&items, 3), &[1, 2, 3]);

    let second = PageRequest::parse(Some("2")).unwrap();
    assert_eq!(second.window(&items, 3), &[4, 5]);
}

#[test]
fn out_of_range_window_is_empty() {
    let items = [1, 2, 3, 4, 5];
    let far = PageRequest::parse(Some("100")).unwrap();
    assert!(far.window(&items, 3).is_empty());
}
