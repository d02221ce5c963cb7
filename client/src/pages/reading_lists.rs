//! The current user's reading lists.

#[cfg(test)]
#[path = "reading_lists_test.rs"]
mod reading_lists_test;

use catalog::ReadingList;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::RequireAuth;
use crate::state::notice::{NoticeKind, use_notices};
use crate::state::remote::Remote;
use crate::state::session::use_session;
use crate::util::format::{book_count, excerpt};
use crate::util::messages::{Entity, delete_failure, delete_prompt, deleted, load_failure};

const DESCRIPTION_CHARS: usize = 120;

pub(super) fn visibility_label(is_public: bool) -> &'static str {
    if is_public { "Public" } else { "Private" }
}

#[component]
pub fn ReadingListsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ReadingLists/>
        </RequireAuth>
    }
}

#[component]
fn ReadingLists() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let lists = RwSignal::new(Remote::<Vec<ReadingList>>::Loading);
    let reload = RwSignal::new(0_u32);
    let pending_delete = RwSignal::new(None::<(i64, String)>);

    let api = session.api().clone();
    Effect::new(move || {
        reload.track();
        let api = api.clone();
        lists.set(Remote::Loading);
        spawn_local(async move {
            let result = api.reading_lists().list().await;
            if result.is_err() {
                notices.error(load_failure(Entity::ReadingList, true));
            }
            lists.set(Remote::from_result(result, &load_failure(Entity::ReadingList, true)));
        });
    });

    let confirm_delete = {
        let session = session.clone();
        move |()| {
            let Some((id, name)) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = session.api().clone();
            let notice = notices.pending("Deleting reading list...");
            spawn_local(async move {
                match api.reading_lists().delete(id).await {
                    Ok(()) => {
                        notices.resolve(notice, NoticeKind::Success, deleted(&name));
                        lists.update(|lists| {
                            if let Remote::Ready(lists) = lists {
                                lists.retain(|list| list.id != id);
                            }
                        });
                    }
                    Err(error) => {
                        notices.resolve(notice, NoticeKind::Error, delete_failure(Entity::ReadingList, error.kind()));
                    }
                }
            });
        }
    };

    let card = move |list: ReadingList| {
        let href = format!("/reading-lists/{}", list.id);
        let edit_href = format!("/reading-lists/{}/edit", list.id);
        let target = (list.id, list.name.clone());
        view! {
            <article class="list-card">
                <header class="list-card__header">
                    <a class="list-card__title" href=href>{list.name.clone()}</a>
                    <span class="badge">{visibility_label(list.is_public)}</span>
                </header>
                <p class="list-card__description">{excerpt(&list.description, DESCRIPTION_CHARS)}</p>
                <footer class="list-card__footer">
                    <span class="muted">{book_count(list.book_count())}</span>
                    <div class="list-card__actions">
                        <a class="btn" href=edit_href>"Edit"</a>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| pending_delete.set(Some(target.clone()))
                        >
                            "Delete"
                        </button>
                    </div>
                </footer>
            </article>
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"My Reading Lists"</h1>
                <a class="btn btn--primary" href="/reading-lists/create">"Create List"</a>
            </header>
            {move || match lists.get() {
                Remote::Loading => view! { <p class="muted">"Loading reading lists..."</p> }.into_any(),
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
                            <p>"You have no reading lists yet."</p>
                            <a class="btn btn--primary" href="/reading-lists/create">"Create your first list"</a>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(found) => {
                    view! { <div class="list-grid">{found.into_iter().map(card).collect_view()}</div> }.into_any()
                }
            }}
            {move || {
                pending_delete
                    .get()
                    .map(|(_, name)| {
                        view! {
                            <ConfirmDialog
                                title="Delete Reading List"
                                message=delete_prompt(&name)
                                on_confirm=Callback::new(confirm_delete.clone())
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
