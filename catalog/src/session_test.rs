use super::*;
use crate::transport::test_helpers::FakeTransport;
use serde_json::json;

fn alice_json() -> serde_json::Value {
    json!({ "id": 1, "username": "alice", "email": "alice@example.com" })
}

fn context(transport: FakeTransport) -> SessionContext<FakeTransport, SharedSession> {
    SessionContext::new(ApiClient::new(transport), SharedSession::default())
}

fn credentials() -> LoginCredentials {
    LoginCredentials { email: "alice@example.com".to_owned(), password: "pw".to_owned() }
}

// =============================================================================
// INITIALIZE
// =============================================================================

#[test]
fn fresh_session_is_unknown_and_loading() {
    let session = Session::default();
    assert_eq!(session.state(), &SessionState::Unknown);
    assert!(session.loading());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn initialize_with_valid_cookie_authenticates() {
    let ctx = context(FakeTransport::new().reply(200, alice_json()));
    ctx.initialize().await;

    let session = ctx.snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("alice"));
    assert!(!session.loading());
    assert_eq!(session.probe_failure(), None);
}

#[tokio::test]
async fn initialize_without_cookie_is_anonymous() {
    let ctx = context(FakeTransport::new().reply(401, json!({ "detail": "Authentication credentials were not provided." })));
    ctx.initialize().await;

    let session = ctx.snapshot();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(session.probe_failure(), Some(ProbeFailure::NotAuthenticated));
    assert!(!session.loading());
}

#[tokio::test]
async fn initialize_when_unreachable_is_anonymous() {
    let ctx = context(FakeTransport::new().unreachable());
    ctx.initialize().await;

    let session = ctx.snapshot();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(session.probe_failure(), Some(ProbeFailure::Unreachable));
}

#[tokio::test]
async fn initialize_on_server_error_is_anonymous() {
    let ctx = context(FakeTransport::new().reply_raw(500, "boom"));
    ctx.initialize().await;
    assert_eq!(ctx.snapshot().probe_failure(), Some(ProbeFailure::Unexpected));
    assert!(!ctx.is_authenticated());
}

#[tokio::test]
async fn initialize_twice_converges() {
    let ctx = context(FakeTransport::new().reply(200, alice_json()).reply(200, alice_json()));
    ctx.initialize().await;
    let first = ctx.snapshot();
    ctx.initialize().await;
    assert_eq!(ctx.snapshot(), first);
}

// =============================================================================
// LOGIN / REGISTER
// =============================================================================

#[tokio::test]
async fn login_success_probes_profile() {
    let ctx = context(
        FakeTransport::new()
            .reply(200, json!({ "message": "Login successful" }))
            .reply(200, alice_json()),
    );
    ctx.login(&credentials()).await.unwrap();

    let session = ctx.snapshot();
    assert_eq!(session.user().map(|u| u.id), Some(1));
    assert!(!session.loading());
    assert_eq!(ctx.api().transport().paths(), vec!["POST /auth/login/", "GET /auth/profile/"]);
}

#[tokio::test]
async fn login_accepts_any_2xx_body() {
    let ctx = context(
        FakeTransport::new()
            .reply_raw(204, "")
            .reply(200, alice_json())
            .reply_raw(200, "<p>welcome</p>")
            .reply(200, alice_json()),
    );
    ctx.login(&credentials()).await.unwrap();
    assert!(ctx.snapshot().is_authenticated());
    assert!(!ctx.snapshot().loading());

    ctx.login(&credentials()).await.unwrap();
    assert_eq!(ctx.snapshot().user().map(|u| u.username.as_str()), Some("alice"));
    assert_eq!(
        ctx.api().transport().paths(),
        vec!["POST /auth/login/", "GET /auth/profile/", "POST /auth/login/", "GET /auth/profile/"]
    );
}

#[tokio::test]
async fn login_rejected_returns_detail_and_stays_anonymous() {
    let ctx = context(
        FakeTransport::new()
            .reply(401, json!({ "detail": "no" }))
            .reply(401, json!({ "error": "Invalid credentials" })),
    );
    ctx.initialize().await;

    let error = ctx.login(&credentials()).await.unwrap_err();
    assert_eq!(error, ErrorPayload::detail("Invalid credentials"));
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);
    assert!(!ctx.snapshot().loading());
}

#[tokio::test]
async fn login_unreachable_uses_fallback() {
    let ctx = context(FakeTransport::new().unreachable());
    let error = ctx.login(&credentials()).await.unwrap_err();
    assert_eq!(error, ErrorPayload::detail("Login failed"));
}

#[tokio::test]
async fn login_succeeds_even_if_profile_probe_fails() {
    let ctx = context(FakeTransport::new().reply(200, json!({})).reply_raw(500, ""));
    ctx.login(&credentials()).await.unwrap();
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn register_does_not_log_in() {
    let ctx = context(FakeTransport::new().reply(201, json!({ "message": "User created" })));
    let registration = Registration { username: "bob".to_owned(), ..Registration::default() };
    ctx.register(&registration).await.unwrap();

    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.api().transport().paths(), vec!["POST /auth/register/"]);
}

#[tokio::test]
async fn register_rejection_keeps_field_errors() {
    let ctx = context(FakeTransport::new().reply(400, json!({ "email": ["user with this email already exists."] })));
    let error = ctx.register(&Registration::default()).await.unwrap_err();
    assert_eq!(error.first_field_message("email"), Some("user with this email already exists."));
}

#[tokio::test]
async fn register_unrecognised_body_uses_fallback() {
    let ctx = context(FakeTransport::new().reply_raw(502, "<html>bad gateway</html>"));
    let error = ctx.register(&Registration::default()).await.unwrap_err();
    assert_eq!(error, ErrorPayload::detail("Registration failed"));
}

// =============================================================================
// LOGOUT
// =============================================================================

#[tokio::test]
async fn logout_clears_session_and_redirects() {
    let ctx = context(FakeTransport::new().reply(200, alice_json()).reply(200, json!({ "message": "Logged out" })));
    ctx.initialize().await;
    assert!(ctx.is_authenticated());

    let outcome = ctx.logout().await;
    assert!(outcome.server_acknowledged);
    assert_eq!(outcome.redirect_to, LOGIN_PATH);
    assert_eq!(ctx.snapshot().state(), &SessionState::Anonymous);
}

#[tokio::test]
async fn logout_clears_session_when_server_unreachable() {
    let ctx = context(FakeTransport::new().reply(200, alice_json()).unreachable());
    ctx.initialize().await;

    let outcome = ctx.logout().await;
    assert!(!outcome.server_acknowledged);
    assert_eq!(outcome.redirect_to, "/login");
    assert!(!ctx.is_authenticated());
    assert!(!ctx.snapshot().loading());
}

// =============================================================================
// PROFILE
// =============================================================================

#[tokio::test]
async fn update_profile_replaces_session_user() {
    let ctx = context(
        FakeTransport::new()
            .reply(200, alice_json())
            .reply(200, json!({ "id": 1, "username": "alice", "first_name": "Alice", "bio": "reads a lot" })),
    );
    ctx.initialize().await;

    let update = ProfileUpdate { first_name: "Alice".to_owned(), ..ProfileUpdate::default() };
    let user = ctx.update_profile(&update).await.unwrap();
    assert_eq!(user.first_name, "Alice");
    assert_eq!(ctx.snapshot().user().map(User::display_name), Some("Alice".to_owned()));
}

#[tokio::test]
async fn update_profile_failure_leaves_session_untouched() {
    let ctx = context(FakeTransport::new().reply(200, alice_json()).reply(400, json!({ "username": ["taken"] })));
    ctx.initialize().await;
    let before = ctx.snapshot();

    let error = ctx.update_profile(&ProfileUpdate::default()).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn constructors_are_settled() {
    assert!(!Session::anonymous().loading());
    let user: User = serde_json::from_value(alice_json()).unwrap();
    assert!(Session::authenticated(user).is_authenticated());
}
