//! Catalog browser: search, genre filter, ordering, and owner deletes.
//!
//! DESIGN
//! ======
//! One effect re-fetches whenever the committed query or the reload counter
//! changes. Responses are tagged with a generation number so a slow reply
//! to an older query never overwrites a newer one.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use catalog::{Book, BookOrdering, BookQuery, Genre};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::book_card::BookCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::RequireAuth;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::remote::Remote;
use crate::state::session::use_session;
use crate::util::messages::{Entity, delete_failure, delete_prompt, found_books, load_failure};

/// Notice shown after a filtered load; unfiltered loads stay quiet.
fn found_notice(query: &BookQuery, count: usize) -> Option<String> {
    query.is_filtered().then(|| found_books(count))
}

/// `<select>` value for a genre filter; empty means all genres.
fn genre_value(genre: Option<Genre>) -> &'static str {
    genre.map_or("", Genre::as_str)
}

#[component]
pub fn BooksPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <BookList/>
        </RequireAuth>
    }
}

#[component]
fn BookList() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let store = *session.store();

    let search_input = RwSignal::new(String::new());
    let query = RwSignal::new(BookQuery::default());
    let reload = RwSignal::new(0_u32);
    let books = RwSignal::new(Remote::<Vec<Book>>::Loading);
    let generation = StoredValue::new(0_u64);
    let pending_delete = RwSignal::new(None::<(i64, String)>);

    let api = session.api().clone();
    Effect::new(move || {
        let query = query.get();
        reload.track();
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        let api = api.clone();
        books.set(Remote::Loading);
        spawn_local(async move {
            let result = api.books().list(&query).await;
            if generation.get_value() != ticket {
                return;
            }
            match &result {
                Ok(found) => {
                    if let Some(text) = found_notice(&query, found.len()) {
                        notices.success(text);
                    }
                }
                Err(_) => notices.error(load_failure(Entity::Book, true)),
            }
            books.set(Remote::from_result(result, &load_failure(Entity::Book, true)));
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_input.get_untracked().trim().to_owned();
        query.update(|q| q.search = (!term.is_empty()).then_some(term));
    };

    let confirm_delete = {
        let session = session.clone();
        move |()| {
            let Some((id, _title)) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = session.api().clone();
            let notice = notices.pending("Deleting book...");
            spawn_local(async move {
                match api.books().delete(id).await {
                    Ok(()) => {
                        notices.resolve(notice, NoticeKind::Success, "Book deleted successfully");
                        reload.update(|n| *n += 1);
                    }
                    Err(error) => {
                        notices.resolve(notice, NoticeKind::Error, delete_failure(Entity::Book, error.kind()));
                    }
                }
            });
        }
    };

    let card = move |book: Book| {
        let can_manage = store.with(|s| book.is_owned_by(s.user()));
        let on_delete = Callback::new(move |target: (i64, String)| pending_delete.set(Some(target)));
        view! { <BookCard book=book can_manage=can_manage on_delete=on_delete/> }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Books"</h1>
                <a class="btn btn--primary" href="/books/create">"Add Book"</a>
            </header>
            <div class="filters">
                <form class="filters__search" on:submit=on_search>
                    <input
                        class="input"
                        type="search"
                        placeholder="Search books, authors, ISBN..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if value.trim().is_empty() {
                                query.update(|q| q.search = None);
                            }
                            search_input.set(value);
                        }
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <select
                    class="select"
                    prop:value=move || genre_value(query.with(|q| q.genre))
                    on:change=move |ev| {
                        let genre = Genre::from_wire(&event_target_value(&ev));
                        query.update(|q| q.genre = genre);
                    }
                >
                    <option value="">"All Genres"</option>
                    {Genre::ALL
                        .into_iter()
                        .map(|genre| view! { <option value=genre.as_str()>{genre.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="select"
                    prop:value=move || query.with(|q| q.ordering.as_param())
                    on:change=move |ev| {
                        let ordering = BookOrdering::from_param(&event_target_value(&ev)).unwrap_or_default();
                        query.update(|q| q.ordering = ordering);
                    }
                >
                    {BookOrdering::ALL
                        .into_iter()
                        .map(|ordering| view! { <option value=ordering.as_param()>{ordering.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || match books.get() {
                Remote::Loading => view! { <p class="muted">"Loading books..."</p> }.into_any(),
                Remote::Failed(message) => {
                    view! {
                        <div class="empty-state">
                            <p>{message}</p>
                            <button class="btn" on:click=move |_| reload.update(|n| *n += 1)>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(found) if found.is_empty() => {
                    view! {
                        <div class="empty-state">
                            <p>"No books found."</p>
                            <a class="btn btn--primary" href="/books/create">"Add the first book"</a>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(found) => {
                    view! { <div class="book-grid">{found.into_iter().map(card).collect_view()}</div> }.into_any()
                }
            }}
            {move || {
                pending_delete
                    .get()
                    .map(|(_, title)| {
                        view! {
                            <ConfirmDialog
                                title="Delete Book"
                                message=delete_prompt(&title)
                                on_confirm=Callback::new(confirm_delete.clone())
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
