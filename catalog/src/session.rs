//! Client-side session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the client's belief about who is logged in for the
//! lifetime of the page. It is owned by exactly one [`SessionContext`] and
//! injected into views; views read snapshots and never write it.
//!
//! STATE MACHINE
//! =============
//! ```text
//!   Unknown ──initialize──▶ Anonymous ──login──▶ Authenticated
//!      │                        ▲                     │
//!      └──────initialize────────┼─────────────────────┤
//!                               └───────logout────────┘
//! ```
//! Logout always lands in `Anonymous`, whatever the server says. There is no
//! refresh transition and no guard against overlapping calls: the last
//! completed operation wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::ApiClient;
use crate::error::{ApiError, ErrorKind, ErrorPayload};
use crate::transport::Transport;
use crate::types::{LoginCredentials, ProfileUpdate, Registration, User};

/// Route the UI must navigate to after logout.
pub const LOGIN_PATH: &str = "/login";

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTRATION_FALLBACK: &str = "Registration failed";

/// Who the client believes is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup: the profile probe has not finished.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(User),
}

/// Why the startup probe ended anonymous. Recorded for diagnostics only; the
/// resulting state is `Anonymous` in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The server answered 401/403: no usable credential.
    NotAuthenticated,
    /// No response at all.
    Unreachable,
    /// Any other failure (5xx, bad body, ...).
    Unexpected,
}

impl ProbeFailure {
    fn classify(error: &ApiError) -> Self {
        match error.kind() {
            ErrorKind::Unauthorized | ErrorKind::Forbidden => Self::NotAuthenticated,
            ErrorKind::Network => Self::Unreachable,
            _ => Self::Unexpected,
        }
    }
}

/// Session snapshot: state plus the loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    loading: bool,
    probe_failure: Option<ProbeFailure>,
}

impl Default for Session {
    fn default() -> Self {
        Self { state: SessionState::Unknown, loading: true, probe_failure: None }
    }
}

impl Session {
    /// A settled anonymous session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { state: SessionState::Anonymous, loading: false, probe_failure: None }
    }

    /// A settled authenticated session.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { state: SessionState::Authenticated(user), loading: false, probe_failure: None }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// True while an auth operation is in flight (and at startup).
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn probe_failure(&self) -> Option<ProbeFailure> {
        self.probe_failure
    }

    fn begin(&mut self) {
        self.loading = true;
    }

    fn finish(&mut self) {
        self.loading = false;
    }

    fn authenticate(&mut self, user: User) {
        self.state = SessionState::Authenticated(user);
        self.probe_failure = None;
    }

    fn clear(&mut self, failure: Option<ProbeFailure>) {
        self.state = SessionState::Anonymous;
        self.probe_failure = failure;
    }

    /// Profile edits only apply to a live session.
    fn replace_user(&mut self, user: User) {
        if self.is_authenticated() {
            self.state = SessionState::Authenticated(user);
        }
    }
}

/// Single-writer storage for the session value.
///
/// The browser implements this over a reactive signal so writes re-render
/// dependents; tests and the CLI use [`SharedSession`].
pub trait SessionStore {
    fn snapshot(&self) -> Session;
    fn update(&self, apply: impl FnOnce(&mut Session));
}

/// In-memory [`SessionStore`] for single-threaded callers.
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Rc<RefCell<Session>>);

impl SessionStore for SharedSession {
    fn snapshot(&self) -> Session {
        self.0.borrow().clone()
    }

    fn update(&self, apply: impl FnOnce(&mut Session)) {
        apply(&mut self.0.borrow_mut());
    }
}

/// Result of [`SessionContext::logout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// Whether the server confirmed invalidation. Informational only.
    pub server_acknowledged: bool,
    /// Where the UI must navigate next.
    pub redirect_to: &'static str,
}

/// Owns the session and performs every transition on it.
#[derive(Clone, Debug)]
pub struct SessionContext<T, S> {
    api: ApiClient<T>,
    store: S,
}

impl<T: Transport, S: SessionStore> SessionContext<T, S> {
    #[must_use]
    pub fn new(api: ApiClient<T>, store: S) -> Self {
        Self { api, store }
    }

    /// The API client, for views that do their own CRUD calls.
    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.snapshot().is_authenticated()
    }

    /// Restore the session from the ambient credential.
    ///
    /// Best effort: any failure settles `Anonymous`. The failure class is kept
    /// on the session for diagnostics but never changes the outcome.
    pub async fn initialize(&self) {
        self.store.update(Session::begin);
        match self.api.auth().profile().await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "session restored");
                self.store.update(|session| {
                    session.authenticate(user);
                    session.finish();
                });
            }
            Err(error) => {
                let failure = ProbeFailure::classify(&error);
                tracing::info!(?failure, error = %error, "no active session");
                self.store.update(|session| {
                    session.clear(Some(failure));
                    session.finish();
                });
            }
        }
    }

    /// Log in, then re-run the profile probe to populate the session.
    ///
    /// # Errors
    ///
    /// Returns the server's normalized error payload, or `Detail("Login
    /// failed")` when there is no recognisable payload.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ErrorPayload> {
        self.store.update(Session::begin);
        let outcome = match self.api.auth().login(credentials).await {
            Ok(()) => {
                self.initialize().await;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = %error, "login failed");
                Err(error.into_payload(LOGIN_FALLBACK))
            }
        };
        self.store.update(Session::finish);
        outcome
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns the server's normalized error payload, or
    /// `Detail("Registration failed")`.
    pub async fn register(&self, registration: &Registration) -> Result<(), ErrorPayload> {
        self.store.update(Session::begin);
        let outcome = self.api.auth().register(registration).await.map_err(|error| {
            tracing::warn!(error = %error, "registration failed");
            error.into_payload(REGISTRATION_FALLBACK)
        });
        self.store.update(Session::finish);
        outcome
    }

    /// Invalidate server-side if possible, then clear locally regardless.
    pub async fn logout(&self) -> LogoutOutcome {
        self.store.update(Session::begin);
        let server_acknowledged = match self.api.auth().logout().await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(error = %error, "logout request failed; clearing local session anyway");
                false
            }
        };
        self.store.update(|session| {
            session.clear(None);
            session.finish();
        });
        LogoutOutcome { server_acknowledged, redirect_to: LOGIN_PATH }
    }

    /// Save profile edits and mirror the server's copy into the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] so the profile form can show field errors.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let user = self.api.auth().update_profile(update).await?;
        self.store.update(|session| session.replace_user(user.clone()));
        Ok(user)
    }
}
