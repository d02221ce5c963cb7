use super::*;
use serde_json::json;

#[test]
fn delete_failure_maps_status_classes() {
    assert_eq!(
        delete_failure(Entity::Book, ErrorKind::Forbidden),
        "You do not have permission to delete this book"
    );
    assert_eq!(delete_failure(Entity::ReadingList, ErrorKind::NotFound), "Reading list not found");
    assert_eq!(delete_failure(Entity::Book, ErrorKind::Network), NETWORK_ERROR);
    assert_eq!(
        delete_failure(Entity::ReadingList, ErrorKind::Server),
        "Failed to delete reading list. Please try again."
    );
}

#[test]
fn login_failure_prefers_detail_then_fields() {
    assert_eq!(login_failure(&ErrorPayload::detail("Invalid credentials")), "Invalid credentials");
    let fields = ErrorPayload::from_value(json!({ "password": ["This field may not be blank."] }));
    assert_eq!(login_failure(&fields), "Password: This field may not be blank.");
    assert_eq!(login_failure(&ErrorPayload::Unknown(json!(null))), LOGIN_GENERIC);
}

#[test]
fn registration_failures_lists_each_field() {
    let payload = ErrorPayload::from_value(json!({
        "username": ["A user with that username already exists."],
        "email": "Enter a valid email address.",
        "non_field_errors": ["Try again"]
    }));
    assert_eq!(
        registration_failures(&payload),
        vec![
            "Username: A user with that username already exists.".to_owned(),
            "Email: Enter a valid email address.".to_owned(),
            "Try again".to_owned(),
        ]
    );
}

#[test]
fn registration_failures_falls_back() {
    let payload = ErrorPayload::from_value(json!({ "bio": ["too long"] }));
    assert_eq!(registration_failures(&payload), vec![REGISTRATION_GENERIC.to_owned()]);
}

#[test]
fn found_books_pluralizes() {
    assert_eq!(found_books(1), "Found 1 book");
    assert_eq!(found_books(0), "Found 0 books");
}

#[test]
fn load_failure_wording() {
    assert_eq!(load_failure(Entity::Book, true), "Failed to load books. Please try again.");
    assert_eq!(load_failure(Entity::ReadingList, false), "Failed to load reading list");
}

#[test]
fn delete_prompt_quotes_the_name() {
    assert_eq!(
        delete_prompt("Dune"),
        "Are you sure you want to delete \"Dune\"? This action cannot be undone."
    );
}
