//! Account registration page.
//!
//! Registration never logs the user in: success sends them to the login
//! page, which shows the confirmation notice.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use catalog::{ErrorPayload, Registration, validation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::{FieldError, FormError};
use crate::state::notice::use_notices;
use crate::state::session::use_session;
use crate::util::auth::install_authed_redirect;
use crate::util::messages::registration_failures;
use crate::util::nav::Navigator;

const AFTER_REGISTER_PATH: &str = "/login?registered=1";

/// Trim identity fields; passwords are sent exactly as typed.
fn normalized(form: &Registration) -> Registration {
    Registration {
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        ..form.clone()
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    install_authed_redirect(*session.store(), use_navigate());

    let form = RwSignal::new(Registration::default());
    let errors = RwSignal::new(None::<ErrorPayload>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = form.with_untracked(normalized);
        if let Err(payload) = validation::validate_registration(&registration) {
            errors.set(Some(payload));
            return;
        }
        errors.set(None);
        busy.set(true);
        let session = session.clone();
        spawn_local(async move {
            match session.register(&registration).await {
                Ok(()) => nav.go(AFTER_REGISTER_PATH),
                Err(payload) => {
                    for line in registration_failures(&payload) {
                        notices.error(line);
                    }
                    errors.set(Some(payload));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">
                    "Or " <a href="/login">"sign in to your existing account"</a>
                </p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="field-row">
                        <label class="field">
                            <span class="field__label">"First name"</span>
                            <input
                                class="input"
                                type="text"
                                autocomplete="given-name"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="first_name"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Last name"</span>
                            <input
                                class="input"
                                type="text"
                                autocomplete="family-name"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="last_name"/>
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            class="input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="username"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Email address"</span>
                        <input
                            class="input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="password"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Confirm password"</span>
                        <input
                            class="input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password_confirm.clone())
                            on:input=move |ev| form.update(|f| f.password_confirm = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="password_confirm"/>
                    </label>
                    <FormError errors=errors/>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
