//! One reading list: its books, per-item notes, and membership edits.

#[cfg(test)]
#[path = "reading_list_detail_test.rs"]
mod reading_list_detail_test;

use catalog::{ReadingList, ReadingListItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::add_book_modal::AddBookModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::RequireAuth;
use crate::pages::reading_lists::visibility_label;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::remote::Remote;
use crate::state::session::use_session;
use crate::util::format::{book_count, format_optional_date};
use crate::util::messages::{Entity, load_failure};
use crate::util::nav::Navigator;
use crate::util::route::use_route_id;

const LISTS_PATH: &str = "/reading-lists";

/// Ids of the books already on `list`, for the add-book picker.
fn book_ids(list: &ReadingList) -> Vec<i64> {
    list.items.iter().map(|item| item.book.id).collect()
}

/// Items in display order.
fn ordered_items(list: &ReadingList) -> Vec<ReadingListItem> {
    let mut items = list.items.clone();
    items.sort_by_key(|item| item.order);
    items
}

#[component]
pub fn ReadingListDetailPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ReadingListDetail/>
        </RequireAuth>
    }
}

#[component]
fn ReadingListDetail() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let nav = Navigator::install();
    let route_id = use_route_id();
    let list = RwSignal::new(Remote::<ReadingList>::Loading);
    let reload = RwSignal::new(0_u32);
    let pending_remove = RwSignal::new(None::<(i64, String)>);
    let adding = RwSignal::new(false);

    let api = session.api().clone();
    Effect::new(move || {
        reload.track();
        let Some(id) = route_id.get() else {
            notices.error(load_failure(Entity::ReadingList, false));
            nav.go(LISTS_PATH);
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.reading_lists().get(id).await;
            if result.is_err() {
                notices.error(load_failure(Entity::ReadingList, false));
                nav.go(LISTS_PATH);
            }
            list.set(Remote::from_result(result, &load_failure(Entity::ReadingList, false)));
        });
    });

    let confirm_remove = {
        let session = session.clone();
        move |()| {
            let Some((item_id, _title)) = pending_remove.get_untracked() else {
                return;
            };
            pending_remove.set(None);
            let Some(list_id) = route_id.get_untracked() else {
                return;
            };
            let api = session.api().clone();
            spawn_local(async move {
                match api.reading_lists().remove_item(list_id, item_id).await {
                    Ok(()) => {
                        notices.success("Book removed from list");
                        reload.update(|n| *n += 1);
                    }
                    Err(_) => notices.error("Failed to remove book"),
                }
            });
        }
    };

    let existing = Signal::derive(move || list.with(|list| list.ready().map(book_ids).unwrap_or_default()));

    let item_card = move |item: ReadingListItem| {
        let book = item.book;
        let target = (item.id, book.title.clone());
        let book_href = format!("/books/{}", book.id);
        let has_notes = !item.notes.trim().is_empty();
        view! {
            <article class="list-item">
                {book.cover_image.clone().map(|src| view! { <img class="list-item__cover" src=src alt=book.title.clone()/> })}
                <div class="list-item__body">
                    <header class="list-item__header">
                        <h3>{book.title.clone()}</h3>
                        <button
                            class="btn btn--icon btn--danger"
                            aria-label="Remove from list"
                            on:click=move |_| pending_remove.set(Some(target.clone()))
                        >
                            "✕"
                        </button>
                    </header>
                    <p class="muted">"by " {book.author_names().join(", ")}</p>
                    <span class="genre-badge">{book.genre.label()}</span>
                    <Show when=move || has_notes>
                        <p class="list-item__notes"><strong>"Notes: "</strong>{item.notes.clone()}</p>
                    </Show>
                    <footer class="list-item__footer">
                        <span class="muted">"Added " {format_optional_date(item.added_at.as_deref())}</span>
                        <a href=book_href>"View Details"</a>
                    </footer>
                </div>
            </article>
        }
    };

    let details = move |found: ReadingList| {
        let edit_href = format!("/reading-lists/{}/edit", found.id);
        let items = ordered_items(&found);
        view! {
            <header class="page__header">
                <div>
                    <h1>{found.name.clone()}</h1>
                    {(!found.description.is_empty()).then(|| view! { <p class="lead">{found.description.clone()}</p> })}
                    <p class="muted">
                        <span>{book_count(found.items.len())}</span>
                        " · "
                        <span>{visibility_label(found.is_public)}</span>
                        " · "
                        <span>"Created " {format_optional_date(found.created_at.as_deref())}</span>
                    </p>
                </div>
                <div class="page__actions">
                    <a class="btn" href=edit_href>"Edit"</a>
                    <button class="btn btn--primary" on:click=move |_| adding.set(true)>"Add Book"</button>
                </div>
            </header>
            {if items.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No books in this list yet"</p>
                        <button class="btn btn--primary" on:click=move |_| adding.set(true)>
                            "Add your first book"
                        </button>
                    </div>
                }
                    .into_any()
            } else {
                view! { <div class="list-grid">{items.into_iter().map(item_card).collect_view()}</div> }.into_any()
            }}
        }
    };

    view! {
        <section class="page">
            <a class="back-link" href=LISTS_PATH>"← Back to Lists"</a>
            {move || match list.get() {
                Remote::Loading => view! { <p class="muted">"Loading reading list..."</p> }.into_any(),
                Remote::Failed(_) => {
                    view! {
                        <div class="empty-state">
                            <p>"Reading list not found"</p>
                            <a class="btn btn--primary" href=LISTS_PATH>"Back to Lists"</a>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(found) => details(found).into_any(),
            }}
            {move || {
                pending_remove
                    .get()
                    .map(|(_, title)| {
                        view! {
                            <ConfirmDialog
                                title="Remove Book"
                                message=format!("Remove \"{title}\" from this list?")
                                confirm_label="Remove"
                                on_confirm=Callback::new(confirm_remove.clone())
                                on_cancel=Callback::new(move |()| pending_remove.set(None))
                            />
                        }
                    })
            }}
            {move || {
                let list_id = route_id.get()?;
                adding
                    .get()
                    .then(|| {
                        view! {
                            <AddBookModal
                                list_id=list_id
                                existing=existing
                                on_close=Callback::new(move |()| adding.set(false))
                                on_added=Callback::new(move |()| {
                                    adding.set(false);
                                    reload.update(|n| *n += 1);
                                })
                            />
                        }
                    })
            }}
        </section>
    }
}
