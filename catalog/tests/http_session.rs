//! End-to-end session lifecycle over real HTTP.
//!
//! Spins up an in-process axum server that mimics the catalog API's cookie
//! auth and drives [`HttpTransport`] + [`SessionContext`] against it.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::{Value, json};

use catalog::native::HttpTransport;
use catalog::{
    ApiClient, BookQuery, ClientConfig, ErrorKind, ErrorPayload, LoginCredentials, SessionContext, SessionState,
    SharedSession,
};

const TOKEN: &str = "token-alice";

type Tokens = Arc<Mutex<HashSet<String>>>;

fn authorized(tokens: &Tokens, jar: &CookieJar) -> bool {
    jar.get("access_token")
        .is_some_and(|cookie| tokens.lock().unwrap().contains(cookie.value()))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Authentication credentials were not provided." })))
        .into_response()
}

async fn login(State(tokens): State<Tokens>, jar: CookieJar, Json(body): Json<Value>) -> Response {
    if body["email"] == "alice@example.com" && body["password"] == "Secret#1" {
        tokens.lock().unwrap().insert(TOKEN.to_owned());
        let jar = jar.add(Cookie::build(("access_token", TOKEN)).path("/").http_only(true));
        (jar, Json(json!({ "message": "Login successful" }))).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid credentials" }))).into_response()
    }
}

async fn logout(State(tokens): State<Tokens>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get("access_token") {
        tokens.lock().unwrap().remove(cookie.value());
    }
    let jar = jar.remove(Cookie::build("access_token").path("/"));
    (jar, Json(json!({ "message": "Logged out" }))).into_response()
}

async fn profile(State(tokens): State<Tokens>, jar: CookieJar) -> Response {
    if !authorized(&tokens, &jar) {
        return unauthorized();
    }
    Json(json!({ "id": 1, "username": "alice", "email": "alice@example.com", "first_name": "Alice" })).into_response()
}

async fn books(State(tokens): State<Tokens>, jar: CookieJar) -> Response {
    if !authorized(&tokens, &jar) {
        return unauthorized();
    }
    Json(json!({
        "count": 1,
        "results": [{
            "id": 7,
            "title": "Dune",
            "authors": "Frank Herbert",
            "genre": "sci_fi",
            "publication_date": "1965-08-01",
            "created_by": 1
        }]
    }))
    .into_response()
}

async fn start_server() -> String {
    let tokens: Tokens = Arc::default();
    let app = Router::new()
        .route("/api/auth/login/", post(login))
        .route("/api/auth/logout/", post(logout))
        .route("/api/auth/profile/", get(profile))
        .route("/api/book/", get(books))
        .with_state(tokens);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn context(base_url: &str) -> SessionContext<HttpTransport, SharedSession> {
    let transport = HttpTransport::new(&ClientConfig::with_base_url(base_url)).unwrap();
    SessionContext::new(ApiClient::new(transport), SharedSession::default())
}

#[tokio::test]
async fn cookie_session_lifecycle() {
    let base_url = start_server().await;
    let ctx = context(&base_url);

    // No cookie yet.
    ctx.initialize().await;
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);
    let error = ctx.api().books().list(&BookQuery::default()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Unauthorized);

    let bad = LoginCredentials { email: "alice@example.com".to_owned(), password: "wrong".to_owned() };
    assert_eq!(ctx.login(&bad).await.unwrap_err(), ErrorPayload::detail("Invalid credentials"));
    assert!(!ctx.is_authenticated());

    let good = LoginCredentials { email: "alice@example.com".to_owned(), password: "Secret#1".to_owned() };
    ctx.login(&good).await.unwrap();
    let session = ctx.snapshot();
    assert_eq!(session.user().map(|user| user.username.as_str()), Some("alice"));
    assert!(!session.loading());

    let header = ctx.api().transport().cookie_header().unwrap();
    assert!(header.contains(TOKEN), "cookie header was {header}");

    let listed = ctx.api().books().list(&BookQuery::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Dune");

    let outcome = ctx.logout().await;
    assert!(outcome.server_acknowledged);
    assert_eq!(outcome.redirect_to, "/login");
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);

    // Server-side token is gone, so a fresh probe stays anonymous.
    ctx.initialize().await;
    assert!(!ctx.is_authenticated());
}

#[tokio::test]
async fn saved_cookie_restores_session() {
    let base_url = start_server().await;
    let first = context(&base_url);
    let good = LoginCredentials { email: "alice@example.com".to_owned(), password: "Secret#1".to_owned() };
    first.login(&good).await.unwrap();
    let header = first.api().transport().cookie_header().unwrap();

    let transport = HttpTransport::new(&ClientConfig::with_base_url(&base_url)).unwrap().with_cookie(&header);
    let second = SessionContext::new(ApiClient::new(transport), SharedSession::default());
    second.initialize().await;
    assert!(second.is_authenticated());
}

#[tokio::test]
async fn unreachable_server_still_logs_out_locally() {
    let ctx = context("http://127.0.0.1:9/api");
    ctx.initialize().await;
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);

    let outcome = ctx.logout().await;
    assert!(!outcome.server_acknowledged);
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);
}
