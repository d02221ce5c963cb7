//! Top navigation with session-aware links and logout.

use catalog::{Session, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::notice::use_notices;
use crate::state::session::use_session;
use crate::util::nav::Navigator;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let store = *session.store();
    let notices = use_notices();
    let nav = Navigator::install();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        spawn_local(async move {
            let outcome = session.logout().await;
            busy.set(false);
            if !outcome.server_acknowledged {
                notices.info("Signed out locally; the server could not be reached.");
            }
            nav.go(outcome.redirect_to);
        });
    };

    let display_name = move || store.with(|s| s.user().map(User::display_name).unwrap_or_default());
    let avatar = move || store.with(|s| s.user().and_then(|user| user.profile_picture.clone()));

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Shelfmark"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || store.with(Session::is_authenticated)
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">"Sign In"</a>
                        <a class="nav-bar__link nav-bar__link--primary" href="/register">"Sign Up"</a>
                    }
                }
            >
                <a class="nav-bar__link" href="/books">"Books"</a>
                <a class="nav-bar__link" href="/reading-lists">"Reading Lists"</a>
                <a class="nav-bar__user" href="/profile">
                    {move || avatar().map(|src| view! { <img class="nav-bar__avatar" src=src alt=""/> })}
                    <span>{display_name}</span>
                </a>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() disabled=move || busy.get()>
                    {move || if busy.get() { "Signing out..." } else { "Logout" }}
                </button>
            </Show>
        </nav>
    }
}

