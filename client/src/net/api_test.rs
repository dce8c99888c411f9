use super::*;

#[test]
fn category_path_formats_expected_path() {
    assert_eq!(category_path(12), "/emails/categories/12");
}

#[test]
fn category_emails_path_formats_expected_path() {
    assert_eq!(category_emails_path(4), "/emails/category/4");
}

#[test]
fn decode_reply_parses_success_body() {
    let reply = Reply::new(200, r#"[{"id":1,"name":"Work","description":"d","email_count":2,"created_at":"2024-01-01"}]"#);
    let cats: Vec<Category> = decode_reply(&reply).unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].name, "Work");
}

#[test]
fn decode_reply_maps_status_errors() {
    let reply = Reply::new(500, r#"{"detail":"Email categorization failed"}"#);
    let err = decode_reply::<ActionResponse>(&reply).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status { status: 500, body: r#"{"detail":"Email categorization failed"}"#.to_owned() }
    );
    assert_eq!(err.user_message("categorize emails"), "Failed to categorize emails (500): Email categorization failed");
}

#[test]
fn decode_reply_maps_bad_json() {
    let reply = Reply::new(200, "nope");
    assert!(matches!(decode_reply::<Vec<Email>>(&reply), Err(ApiError::Decode(_))));
}

#[test]
fn user_message_for_expired_session() {
    let err = ApiError::Status { status: 401, body: String::new() };
    assert_eq!(
        err.user_message("load categories"),
        "Failed to load categories: your session has expired. Please sign in again."
    );
}

#[test]
fn user_message_for_plain_text_and_empty_bodies() {
    let err = ApiError::Status { status: 404, body: "Category not found".to_owned() };
    assert_eq!(err.user_message("delete category"), "Failed to delete category (404): Category not found");
    let err = ApiError::Status { status: 502, body: "  ".to_owned() };
    assert_eq!(err.user_message("delete category"), "Failed to delete category (502).");
}

#[test]
fn user_message_for_network_failure() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("add account"), "Failed to add account: the server could not be reached.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    assert_eq!(futures::executor::block_on(list_categories()), Err(ApiError::Unavailable));
}
