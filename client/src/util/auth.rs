//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page apply identical redirect rules, both
//! derived from the catalog session snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use catalog::Session;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionSignal;

/// Landing route after login, and for authenticated visits to `/login`.
pub const AFTER_LOGIN_PATH: &str = "/books";

/// Redirect once the probe has settled and nobody is logged in.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.loading() && !session.is_authenticated()
}

/// Login/register pages bounce already-authenticated visitors.
pub fn should_redirect_authed(session: &Session) -> bool {
    !session.loading() && session.is_authenticated()
}

/// Redirect to `/login` whenever the session settles unauthenticated.
pub fn install_unauth_redirect<F>(session: SessionSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(catalog::LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Send authenticated visitors on to the book list.
pub fn install_authed_redirect<F>(session: SessionSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_authed) {
            navigate(AFTER_LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
