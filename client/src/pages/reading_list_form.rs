//! Create and edit form for reading lists.

use catalog::ErrorPayload;
use catalog::validation::ReadingListDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::field_error::{FieldError, FormError};
use crate::components::protected::RequireAuth;
use crate::pages::book_form::FormMode;
use crate::state::notice::use_notices;
use crate::state::session::use_session;
use crate::util::messages::{Entity, load_failure};
use crate::util::nav::Navigator;
use crate::util::route::use_route_id;

const LISTS_PATH: &str = "/reading-lists";

fn heading(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Create Reading List",
        FormMode::Edit => "Edit Reading List",
    }
}

fn outcome(mode: FormMode, ok: bool) -> &'static str {
    match (mode, ok) {
        (FormMode::Create, true) => "Reading list created successfully!",
        (FormMode::Edit, true) => "Reading list updated successfully!",
        (FormMode::Create, false) => "Failed to create reading list",
        (FormMode::Edit, false) => "Failed to update reading list",
    }
}

#[component]
pub fn ReadingListFormPage(mode: FormMode) -> impl IntoView {
    view! {
        <RequireAuth>
            <ReadingListForm mode=mode/>
        </RequireAuth>
    }
}

#[component]
fn ReadingListForm(mode: FormMode) -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    let route_id = use_route_id();
    let draft = RwSignal::new(ReadingListDraft::default());
    let errors = RwSignal::new(None::<ErrorPayload>);
    let busy = RwSignal::new(false);
    let loading = RwSignal::new(mode == FormMode::Edit);

    if mode == FormMode::Edit {
        let api = session.api().clone();
        Effect::new(move || {
            let Some(id) = route_id.get() else {
                notices.error(load_failure(Entity::ReadingList, false));
                nav.go(LISTS_PATH);
                return;
            };
            let api = api.clone();
            loading.set(true);
            spawn_local(async move {
                match api.reading_lists().get(id).await {
                    Ok(list) => draft.set(ReadingListDraft::from_list(&list)),
                    Err(_) => {
                        notices.error(load_failure(Entity::ReadingList, false));
                        nav.go(LISTS_PATH);
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match draft.with_untracked(ReadingListDraft::to_input) {
            Ok(input) => input,
            Err(payload) => {
                errors.set(Some(payload));
                return;
            }
        };
        let target = match mode {
            FormMode::Create => None,
            FormMode::Edit => match route_id.get_untracked() {
                Some(id) => Some(id),
                None => return,
            },
        };
        errors.set(None);
        busy.set(true);
        let api = session.api().clone();
        spawn_local(async move {
            let result = match target {
                Some(id) => api.reading_lists().update(id, &input).await,
                None => api.reading_lists().create(&input).await,
            };
            match result {
                Ok(()) => {
                    notices.success(outcome(mode, true));
                    nav.go(LISTS_PATH);
                }
                Err(error) => {
                    notices.error(outcome(mode, false));
                    errors.set(Some(error.into_payload(outcome(mode, false))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page page--narrow">
            <h1>{heading(mode)}</h1>
            <Show when=move || loading.get()>
                <p class="muted">"Loading reading list..."</p>
            </Show>
            <form class="form" hidden=move || loading.get() on:submit=on_submit novalidate>
                <label class="field">
                    <span class="field__label">"Name *"</span>
                    <input
                        class="input"
                        type="text"
                        placeholder="e.g. Summer Reading"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="textarea"
                        rows="3"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="description"/>
                </label>
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.is_public)
                        on:change=move |ev| draft.update(|d| d.is_public = event_target_checked(&ev))
                    />
                    <span>"Make this list public"</span>
                </label>
                <FormError errors=errors/>
                <div class="form__actions">
                    <a class="btn" href=LISTS_PATH>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || match (mode, busy.get()) {
                            (_, true) => "Saving...",
                            (FormMode::Create, false) => "Create List",
                            (FormMode::Edit, false) => "Update List",
                        }}
                    </button>
                </div>
            </form>
        </section>
    }
}
