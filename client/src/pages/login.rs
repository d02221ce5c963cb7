//! Login page: email + password against the cookie session.
//!
//! DESIGN
//! ======
//! Client-side checks run first so empty submissions never reach the server.
//! Server rejections surface twice: one notice line and inline field errors.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use catalog::{ErrorPayload, LoginCredentials, validation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::field_error::{FieldError, FormError};
use crate::state::notice::use_notices;
use crate::state::session::use_session;
use crate::util::auth::{AFTER_LOGIN_PATH, install_authed_redirect};
use crate::util::messages::{REGISTERED, WELCOME_BACK, login_failure};
use crate::util::nav::Navigator;

/// `?registered=1` is appended by the registration page on success.
fn just_registered(flag: Option<&str>) -> bool {
    matches!(flag, Some("1" | "true"))
}

/// Emails are matched case-sensitively server side, so only trim.
fn credentials(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials { email: email.trim().to_owned(), password: password.to_owned() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    install_authed_redirect(*session.store(), use_navigate());

    let query = use_query_map();
    if just_registered(query.read_untracked().get("registered").as_deref()) {
        notices.success(REGISTERED);
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ErrorPayload>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = credentials(&email.get_untracked(), &password.get_untracked());
        if let Err(payload) = validation::validate_login(&credentials) {
            errors.set(Some(payload));
            return;
        }
        errors.set(None);
        busy.set(true);
        let session = session.clone();
        spawn_local(async move {
            match session.login(&credentials).await {
                Ok(()) => {
                    notices.success(WELCOME_BACK);
                    nav.go(AFTER_LOGIN_PATH);
                }
                Err(payload) => {
                    notices.error(login_failure(&payload));
                    errors.set(Some(payload));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <p class="auth-card__subtitle">
                    "Or " <a href="/register">"create a new account"</a>
                </p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Email address"</span>
                        <input
                            class="input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field="password"/>
                    </label>
                    <FormError errors=errors/>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
