use super::*;

fn email(id: i64, is_read: bool) -> Email {
    serde_json::from_value(serde_json::json!({ "id": id, "subject": "s", "is_read": is_read })).unwrap()
}

#[test]
fn constructors_set_flags() {
    assert!(EmailsState::loading().loading);
    let loaded = EmailsState::loaded(vec![email(1, false)]);
    assert!(!loaded.loading);
    assert_eq!(loaded.items.len(), 1);
    let failed = EmailsState::failed("boom".to_owned());
    assert_eq!(failed.error.as_deref(), Some("boom"));
    assert!(failed.items.is_empty());
}

#[test]
fn unread_count_ignores_read_mail() {
    let state = EmailsState::loaded(vec![email(1, false), email(2, true), email(3, false)]);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(EmailsState::default().count_label(), "0 emails");
    assert_eq!(EmailsState::loaded(vec![email(1, true)]).count_label(), "1 email");
    assert_eq!(EmailsState::loaded(vec![email(1, true), email(2, true)]).count_label(), "2 emails");
}

#[test]
fn summary_label_mentions_unread_only_when_present() {
    assert_eq!(EmailsState::loaded(vec![email(1, true)]).summary_label(), "1 email");
    let mixed = EmailsState::loaded(vec![email(1, false), email(2, true), email(3, false)]);
    assert_eq!(mixed.summary_label(), "3 emails, 2 unread");
}
