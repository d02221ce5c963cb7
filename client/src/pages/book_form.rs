//! Create and edit form for catalog books.
//!
//! DESIGN
//! ======
//! The form edits a [`BookDraft`] (raw text) and converts it to a
//! [`catalog::BookInput`] on submit. Local conversion errors and server
//! validation errors share the same `ErrorPayload` slot so both render
//! through `FieldError`.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use catalog::validation::BookDraft;
use catalog::{ErrorPayload, Genre};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::field_error::{FieldError, FormError};
use crate::components::protected::RequireAuth;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::session::use_session;
use crate::util::messages::{Entity, load_failure};
use crate::util::nav::Navigator;
use crate::util::route::use_route_id;

const BOOKS_PATH: &str = "/books";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    fn heading(self) -> &'static str {
        match self {
            Self::Create => "Add New Book",
            Self::Edit => "Edit Book",
        }
    }

    fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Create, false) => "Create Book",
            (Self::Create, true) => "Creating...",
            (Self::Edit, false) => "Update Book",
            (Self::Edit, true) => "Updating...",
        }
    }

    fn pending(self) -> &'static str {
        match self {
            Self::Create => "Creating book...",
            Self::Edit => "Updating book...",
        }
    }

    fn succeeded(self) -> &'static str {
        match self {
            Self::Create => "Book created successfully!",
            Self::Edit => "Book updated successfully!",
        }
    }

    fn failed(self) -> &'static str {
        match self {
            Self::Create => "Failed to create book",
            Self::Edit => "Failed to update book",
        }
    }
}

#[component]
pub fn BookFormPage(mode: FormMode) -> impl IntoView {
    view! {
        <RequireAuth>
            <BookForm mode=mode/>
        </RequireAuth>
    }
}

#[component]
fn BookForm(mode: FormMode) -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    let route_id = use_route_id();
    let draft = RwSignal::new(BookDraft::default());
    let errors = RwSignal::new(None::<ErrorPayload>);
    let busy = RwSignal::new(false);
    let loading = RwSignal::new(mode == FormMode::Edit);

    if mode == FormMode::Edit {
        let api = session.api().clone();
        Effect::new(move || {
            let Some(id) = route_id.get() else {
                notices.error(load_failure(Entity::Book, false));
                nav.go(BOOKS_PATH);
                return;
            };
            let api = api.clone();
            loading.set(true);
            spawn_local(async move {
                match api.books().get(id).await {
                    Ok(book) => draft.set(BookDraft::from_book(&book)),
                    Err(_) => {
                        notices.error(load_failure(Entity::Book, false));
                        nav.go(BOOKS_PATH);
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
        let input = match draft.with_untracked(BookDraft::to_input) {
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
        let notice = notices.pending(mode.pending());
        spawn_local(async move {
            let result = match target {
                Some(id) => api.books().update(id, &input).await,
                None => api.books().create(&input).await,
            };
            match result {
                Ok(()) => {
                    notices.resolve(notice, NoticeKind::Success, mode.succeeded());
                    nav.go(BOOKS_PATH);
                }
                Err(error) => {
                    notices.resolve(notice, NoticeKind::Error, mode.failed());
                    errors.set(Some(error.into_payload(mode.failed())));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page page--narrow">
            <h1>{mode.heading()}</h1>
            <Show when=move || loading.get()>
                <p class="muted">"Loading book..."</p>
            </Show>
            <form class="form" hidden=move || loading.get() on:submit=on_submit novalidate>
                <label class="field">
                    <span class="field__label">"Title *"</span>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="title"/>
                </label>
                <label class="field">
                    <span class="field__label">"Authors *"</span>
                    <input
                        class="input"
                        type="text"
                        placeholder="Separate multiple authors with commas"
                        prop:value=move || draft.with(|d| d.authors.clone())
                        on:input=move |ev| draft.update(|d| d.authors = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="authors"/>
                </label>
                <label class="field">
                    <span class="field__label">"Genre *"</span>
                    <select
                        class="select"
                        prop:value=move || draft.with(|d| d.genre.clone())
                        on:change=move |ev| draft.update(|d| d.genre = event_target_value(&ev))
                    >
                        <option value="">"Select a genre"</option>
                        {Genre::ALL
                            .into_iter()
                            .map(|genre| view! { <option value=genre.as_str()>{genre.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldError errors=errors field="genre"/>
                </label>
                <label class="field">
                    <span class="field__label">"Publication Date *"</span>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || draft.with(|d| d.publication_date.clone())
                        on:input=move |ev| draft.update(|d| d.publication_date = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="publication_date"/>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span class="field__label">"ISBN"</span>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft.with(|d| d.isbn.clone())
                            on:input=move |ev| draft.update(|d| d.isbn = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="isbn"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Pages"</span>
                        <input
                            class="input"
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.pages.clone())
                            on:input=move |ev| draft.update(|d| d.pages = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="pages"/>
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="textarea"
                        rows="4"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="description"/>
                </label>
                <FormError errors=errors/>
                <div class="form__actions">
                    <a class="btn" href=BOOKS_PATH>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || mode.submit_label(busy.get())}
                    </button>
                </div>
            </form>
        </section>
    }
}
