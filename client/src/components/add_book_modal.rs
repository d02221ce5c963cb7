//! Modal for adding catalog books to a reading list.
//!
//! DESIGN
//! ======
//! Searches the catalog as the user types and keeps per-book notes locally
//! until a book is added. Books already on the list are shown disabled
//! rather than hidden so search results stay predictable.

use std::collections::HashMap;

use catalog::{AddBookInput, Book, BookQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::notice::use_notices;
use crate::state::remote::Remote;
use crate::state::session::use_session;
use crate::util::messages::{Entity, load_failure};

const ADD_FAILED: &str = "Failed to add book to list";

#[component]
pub fn AddBookModal(
    list_id: i64,
    /// Book ids already on the list.
    existing: Signal<Vec<i64>>,
    on_close: Callback<()>,
    on_added: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let search = RwSignal::new(String::new());
    let books = RwSignal::new(Remote::<Vec<Book>>::Loading);
    let notes = RwSignal::new(HashMap::<i64, String>::new());
    let adding = RwSignal::new(None::<i64>);

    let api = session.api().clone();
    Effect::new(move || {
        let query = BookQuery { search: Some(search.get()), ..BookQuery::default() };
        let api = api.clone();
        books.set(Remote::Loading);
        spawn_local(async move {
            let result = api.books().list(&query).await;
            if result.is_err() {
                notices.error(load_failure(Entity::Book, true));
            }
            books.set(Remote::from_result(result, &load_failure(Entity::Book, true)));
        });
    });

    let add = move |book_id: i64| {
        if adding.get_untracked().is_some() {
            return;
        }
        adding.set(Some(book_id));
        let input = AddBookInput {
            book_id,
            notes: notes.with_untracked(|notes| notes.get(&book_id).cloned().unwrap_or_default()),
        };
        let api = session.api().clone();
        spawn_local(async move {
            match api.reading_lists().add_book(list_id, &input).await {
                Ok(_) => {
                    notices.success("Book added to list successfully!");
                    on_added.run(());
                }
                Err(error) => {
                    let message = error.payload().map_or_else(|| ADD_FAILED.to_owned(), |p| p.summary(ADD_FAILED));
                    notices.error(message);
                }
            }
            adding.set(None);
        });
    };

    let row = move |book: Book| {
        let id = book.id;
        let on_list = move || existing.with(|ids| ids.contains(&id));
        let add = add.clone();
        view! {
            <li class="add-book__row">
                <div class="add-book__info">
                    <span class="add-book__title">{book.title.clone()}</span>
                    <span class="add-book__authors">{book.author_names().join(", ")}</span>
                    <span class="genre-badge">{book.genre.label()}</span>
                </div>
                <textarea
                    class="add-book__notes"
                    rows="2"
                    placeholder="Add notes (optional)..."
                    prop:value=move || notes.with(|notes| notes.get(&id).cloned().unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        notes.update(|notes| {
                            notes.insert(id, value);
                        });
                    }
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || on_list() || adding.get() == Some(id)
                    on:click=move |_| add(id)
                >
                    {move || {
                        if on_list() {
                            "On this list"
                        } else if adding.get() == Some(id) {
                            "Adding..."
                        } else {
                            "Add to List"
                        }
                    }}
                </button>
            </li>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--wide"
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class="dialog__header">
                    <h2 class="dialog__title">"Add Book to Reading List"</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>"✕"</button>
                </header>
                <input
                    class="input"
                    type="search"
                    placeholder="Search books..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                {move || match books.get() {
                    Remote::Loading => view! { <p class="muted">"Loading books..."</p> }.into_any(),
                    Remote::Failed(message) => view! { <p class="muted">{message}</p> }.into_any(),
                    Remote::Ready(found) if found.is_empty() => {
                        view! { <p class="muted">"No books found."</p> }.into_any()
                    }
                    Remote::Ready(found) => {
                        view! { <ul class="add-book__list">{found.into_iter().map(&row).collect_view()}</ul> }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
