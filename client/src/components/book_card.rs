//! Card for one book in the catalog grid.

use catalog::Book;
use leptos::prelude::*;

use crate::util::format::{excerpt, format_date};

const DESCRIPTION_CHARS: usize = 140;

/// A book summary linking to its detail page. Owners also get edit/delete.
#[component]
pub fn BookCard(
    book: Book,
    #[prop(optional)] can_manage: bool,
    #[prop(optional)] on_delete: Option<Callback<(i64, String)>>,
) -> impl IntoView {
    let href = format!("/books/{}", book.id);
    let edit_href = format!("/books/{}/edit", book.id);
    let authors = book.author_names().join(", ");
    let published = format_date(&book.publication_date);
    let description = excerpt(&book.description, DESCRIPTION_CHARS);
    let has_description = !description.is_empty();
    let delete_target = (book.id, book.title.clone());
    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(delete_target.clone());
        }
    };

    view! {
        <article class="book-card">
            {book.cover_image.clone().map(|src| view! { <img class="book-card__cover" src=src alt=""/> })}
            <div class="book-card__body">
                <a class="book-card__title" href=href>{book.title.clone()}</a>
                <p class="book-card__authors">{authors}</p>
                <p class="book-card__meta">
                    <span class="genre-badge">{book.genre.label()}</span>
                    <span>{published}</span>
                </p>
                <Show when=move || has_description>
                    <p class="book-card__description">{description.clone()}</p>
                </Show>
                {book
                    .created_by_username
                    .clone()
                    .map(|name| view! { <p class="book-card__owner">"Added by " {name}</p> })}
            </div>
            <Show when=move || can_manage>
                <div class="book-card__actions">
                    <a class="btn" href=edit_href.clone()>"Edit"</a>
                    <button class="btn btn--danger" on:click=on_delete_click.clone()>"Delete"</button>
                </div>
            </Show>
        </article>
    }
}
