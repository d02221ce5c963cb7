//! Single-book page with owner-only edit and delete.

use catalog::Book;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::RequireAuth;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::remote::Remote;
use crate::state::session::use_session;
use crate::util::format::{format_date, format_optional_date, page_count};
use crate::util::messages::{Entity, delete_failure, delete_prompt, deleted, load_failure};
use crate::util::nav::Navigator;
use crate::util::route::use_route_id;

const BOOKS_PATH: &str = "/books";

#[component]
pub fn BookDetailPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <BookDetail/>
        </RequireAuth>
    }
}

#[component]
fn BookDetail() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    let store = *session.store();
    let route_id = use_route_id();
    let book = RwSignal::new(Remote::<Book>::Loading);
    let confirming = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let api = session.api().clone();
    Effect::new(move || {
        let Some(id) = route_id.get() else {
            notices.error(load_failure(Entity::Book, false));
            nav.go(BOOKS_PATH);
            return;
        };
        let api = api.clone();
        book.set(Remote::Loading);
        spawn_local(async move {
            let result = api.books().get(id).await;
            if result.is_err() {
                notices.error(load_failure(Entity::Book, false));
                nav.go(BOOKS_PATH);
            }
            book.set(Remote::from_result(result, &load_failure(Entity::Book, false)));
        });
    });

    let confirm_delete = {
        let session = session.clone();
        move |()| {
            confirming.set(false);
            let Some((id, title)) = book.with_untracked(|b| b.ready().map(|b| (b.id, b.title.clone()))) else {
                return;
            };
            deleting.set(true);
            let api = session.api().clone();
            let notice = notices.pending("Deleting book...");
            spawn_local(async move {
                match api.books().delete(id).await {
                    Ok(()) => {
                        notices.resolve(notice, NoticeKind::Success, deleted(&title));
                        nav.go(BOOKS_PATH);
                    }
                    Err(error) => {
                        notices.resolve(notice, NoticeKind::Error, delete_failure(Entity::Book, error.kind()));
                    }
                }
                deleting.set(false);
            });
        }
    };

    let details = move |book: Book| {
        let can_edit = store.with(|s| book.is_owned_by(s.user()));
        let edit_href = format!("/books/{}/edit", book.id);
        view! {
            <article class="book-detail">
                {book.cover_image.clone().map(|src| view! { <img class="book-detail__cover" src=src alt=book.title.clone()/> })}
                <div class="book-detail__body">
                    <header class="book-detail__header">
                        <h1>{book.title.clone()}</h1>
                        <Show when=move || can_edit>
                            <div class="book-detail__actions">
                                <a class="btn" href=edit_href.clone()>"Edit"</a>
                                <button
                                    class="btn btn--danger"
                                    disabled=move || deleting.get()
                                    on:click=move |_| confirming.set(true)
                                >
                                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                </button>
                            </div>
                        </Show>
                    </header>
                    <dl class="book-detail__facts">
                        <dt>"Author"</dt>
                        <dd>{book.author_names().join(", ")}</dd>
                        <dt>"Genre"</dt>
                        <dd>{book.genre.label()}</dd>
                        <dt>"Publication Date"</dt>
                        <dd>{format_date(&book.publication_date)}</dd>
                        <dt>"ISBN"</dt>
                        <dd>{book.isbn.clone().unwrap_or_else(|| "Not available".to_owned())}</dd>
                        {page_count(book.pages).map(|pages| view! { <dt>"Pages"</dt><dd>{pages}</dd> })}
                    </dl>
                    {(!book.description.is_empty())
                        .then(|| {
                            view! {
                                <section class="book-detail__description">
                                    <h2>"Description"</h2>
                                    <p>{book.description.clone()}</p>
                                </section>
                            }
                        })}
                    <footer class="book-detail__footer muted">
                        "Added on " {format_optional_date(book.created_at.as_deref())}
                        {book.created_by_username.clone().map(|name| view! { " by " {name} })}
                    </footer>
                </div>
            </article>
        }
    };

    view! {
        <section class="page page--narrow">
            <a class="back-link" href=BOOKS_PATH>"← Back to Books"</a>
            {move || match book.get() {
                Remote::Loading => view! { <p class="muted">"Loading book details..."</p> }.into_any(),
                Remote::Failed(_) => {
                    view! {
                        <div class="empty-state">
                            <h2>"Book not found"</h2>
                            <a href=BOOKS_PATH>"Back to Books"</a>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(found) => details(found).into_any(),
            }}
            {move || {
                confirming
                    .get()
                    .then(|| {
                        let title = book.with_untracked(|b| b.ready().map(|b| b.title.clone())).unwrap_or_default();
                        view! {
                            <ConfirmDialog
                                title="Delete Book"
                                message=delete_prompt(&title)
                                on_confirm=Callback::new(confirm_delete.clone())
                                on_cancel=Callback::new(move |()| confirming.set(false))
                            />
                        }
                    })
            }}
        </section>
    }
}
