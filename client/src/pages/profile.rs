//! Profile view and inline edit for the signed-in user.
//!
//! The session holds the authoritative user; a successful save replaces it
//! so the navigation bar picks up a new display name immediately.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use catalog::{ApiError, ErrorPayload, ProfileUpdate, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::field_error::FieldError;
use crate::components::protected::RequireAuth;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::session::use_session;
use crate::util::format::format_optional_date;

const UPDATE_FAILED: &str = "Failed to update profile. Please try again.";

/// Notice text for a failed save: the avatar error, else the server's
/// detail, else a generic line.
fn update_failure(error: &ApiError) -> String {
    error
        .payload()
        .and_then(|payload| {
            payload
                .first_field_message("profile_picture")
                .or_else(|| payload.detail_message())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| UPDATE_FAILED.to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Profile/>
        </RequireAuth>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let store = *session.store();
    let editing = RwSignal::new(false);
    let form = RwSignal::new(ProfileUpdate::default());
    let errors = RwSignal::new(None::<ErrorPayload>);
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let current = move || store.with(|s| s.user().cloned());

    let start_edit = move |_| {
        if let Some(user) = store.with(|s| s.user().map(ProfileUpdate::from_user)) {
            form.set(user);
        }
        errors.set(None);
        message.set(None);
        editing.set(true);
        notices.info("Edit mode enabled");
    };

    let cancel_edit = move |_| {
        editing.set(false);
        errors.set(None);
        message.set(None);
        notices.info("Changes cancelled");
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let update = form.get_untracked();
        let session = session.clone();
        let notice = notices.pending("Updating profile...");
        spawn_local(async move {
            match session.update_profile(&update).await {
                Ok(_) => {
                    notices.resolve(notice, NoticeKind::Success, "Profile updated successfully!");
                    errors.set(None);
                    message.set(None);
                    editing.set(false);
                }
                Err(error) => {
                    let text = update_failure(&error);
                    notices.resolve(notice, NoticeKind::Error, text.clone());
                    message.set(Some(text));
                    errors.set(error.payload().cloned());
                }
            }
            busy.set(false);
        });
    };

    let read_only = move |user: User| {
        view! {
            <dl class="profile__facts">
                <dt>"Username"</dt>
                <dd>{user.username.clone()}</dd>
                <dt>"First name"</dt>
                <dd>{user.first_name.clone()}</dd>
                <dt>"Last name"</dt>
                <dd>{user.last_name.clone()}</dd>
                <dt>"Bio"</dt>
                <dd>{user.bio.clone().filter(|bio| !bio.is_empty()).unwrap_or_else(|| "No bio yet.".to_owned())}</dd>
                <dt>"Member since"</dt>
                <dd>{format_optional_date(user.created_at.as_deref())}</dd>
            </dl>
        }
    };

    view! {
        <section class="page page--narrow profile">
            {move || {
                current()
                    .map(|user| {
                        view! {
                            <header class="profile__header">
                                {user.profile_picture.clone().map(|src| view! { <img class="avatar avatar--large" src=src alt=""/> })}
                                <div>
                                    <h1>{user.display_name()}</h1>
                                    <p class="muted">{user.email.clone()}</p>
                                </div>
                                <Show when=move || !editing.get()>
                                    <button class="btn" on:click=start_edit>"Edit Profile"</button>
                                </Show>
                            </header>
                        }
                    })
            }}
            {move || message.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
            <Show
                when=move || editing.get()
                fallback=move || current().map(read_only)
            >
                <form class="form" on:submit=on_submit.clone()>
                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="username"/>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span class="field__label">"First name"</span>
                            <input
                                class="input"
                                type="text"
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
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                            <FieldError errors=errors field="last_name"/>
                        </label>
                    </div>
                    <label class="field">
                        <span class="field__label">"Bio"</span>
                        <textarea
                            class="textarea"
                            rows="4"
                            prop:value=move || form.with(|f| f.bio.clone())
                            on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                        ></textarea>
                        <FieldError errors=errors field="bio"/>
                    </label>
                    <div class="form__actions">
                        <button class="btn" type="button" on:click=cancel_edit>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
