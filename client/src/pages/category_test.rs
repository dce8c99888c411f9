use super::*;

#[test]
fn heading_uses_loaded_name() {
    assert_eq!(category_heading(Some("Receipts"), 4), "Receipts");
    assert_eq!(category_heading(Some("  Travel "), 4), "Travel");
}

#[test]
fn heading_falls_back_to_numbered_placeholder() {
    assert_eq!(category_heading(None, 4), "Category #4");
    assert_eq!(category_heading(Some(""), 9), "Category #9");
}
