use super::*;
use crate::error::{ErrorKind, ErrorPayload};
use crate::transport::Method;
use crate::transport::test_helpers::FakeTransport;
use crate::types::Genre;
use serde_json::json;

fn book_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "authors": "Someone",
        "genre": "fiction",
        "publication_date": "2001-01-01",
        "created_by": 1
    })
}

#[tokio::test]
async fn profile_decodes_user() {
    let api = ApiClient::new(FakeTransport::new().reply(200, json!({ "id": 1, "username": "alice" })));
    let user = api.auth().profile().await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(api.transport().paths(), vec!["GET /auth/profile/"]);
}

#[tokio::test]
async fn login_posts_credentials() {
    let api = ApiClient::new(FakeTransport::new().reply(200, json!({ "message": "Login successful" })));
    let credentials = LoginCredentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    api.auth().login(&credentials).await.unwrap();

    let sent = api.transport().requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/auth/login/");
    assert_eq!(sent[0].body, Some(json!({ "email": "a@b.com", "password": "x" })));
}

#[tokio::test]
async fn rejected_request_normalizes_payload() {
    let api = ApiClient::new(FakeTransport::new().reply(400, json!({ "title": ["Title can't be empty"] })));
    let error = api.books().get(3).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(
        error.payload().and_then(|p| p.first_field_message("title")),
        Some("Title can't be empty")
    );
}

#[tokio::test]
async fn transport_failure_is_network_kind() {
    let api = ApiClient::new(FakeTransport::new().unreachable());
    let error = api.reading_lists().list().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn book_list_sends_query_and_accepts_pagination() {
    let api = ApiClient::new(
        FakeTransport::new().reply(200, json!({ "count": 2, "results": [book_json(1, "A"), book_json(2, "B")] })),
    );
    let query = BookQuery { search: Some("a".to_owned()), genre: Some(Genre::Fiction), ..BookQuery::default() };
    let books = api.books().list(&query).await.unwrap();
    assert_eq!(books.len(), 2);

    let sent = api.transport().requests();
    assert_eq!(sent[0].path, "/book/");
    assert_eq!(sent[0].query, query.to_pairs());
}

#[tokio::test]
async fn book_list_accepts_bare_array() {
    let api = ApiClient::new(FakeTransport::new().reply(200, json!([book_json(5, "Solo")])));
    let books = api.books().list(&BookQuery::default()).await.unwrap();
    assert_eq!(books[0].title, "Solo");
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let api = ApiClient::new(FakeTransport::new().reply_raw(200, "<html></html>"));
    let error = api.books().get(1).await.unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn delete_ignores_empty_body() {
    let api = ApiClient::new(FakeTransport::new().reply_raw(204, ""));
    api.books().delete(9).await.unwrap();
    assert_eq!(api.transport().paths(), vec!["DELETE /book/9/"]);
}

#[tokio::test]
async fn reading_list_membership_paths() {
    let item = json!({ "id": 41, "book": book_json(5, "Solo"), "order": 0, "notes": "later", "added_at": null });
    let api = ApiClient::new(FakeTransport::new().reply(201, item).reply_raw(204, ""));
    let added = api
        .reading_lists()
        .add_book(3, &AddBookInput { book_id: 5, notes: "later".to_owned() })
        .await
        .unwrap();
    assert_eq!(added.id, 41);
    api.reading_lists().remove_item(3, 41).await.unwrap();
    assert_eq!(
        api.transport().paths(),
        vec!["POST /reading-list/3/add-book/", "DELETE /reading-list/3/items/41/"]
    );
    assert_eq!(api.transport().requests()[0].body, Some(json!({ "book_id": 5, "notes": "later" })));
}

#[tokio::test]
async fn not_found_error_key_becomes_detail() {
    let api = ApiClient::new(FakeTransport::new().reply(404, json!({ "error": "Item not found" })));
    let error = api.reading_lists().remove_item(1, 2).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.payload(), Some(&ErrorPayload::detail("Item not found")));
}
