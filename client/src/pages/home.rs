//! Public landing page.

use catalog::Session;
use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = *use_session().store();
    let authed = move || session.with(Session::is_authenticated);

    view! {
        <section class="page hero">
            <h1 class="hero__title">"Your personal book catalog"</h1>
            <p class="hero__lead">
                "Organize your books, create reading lists, and discover new favorites all in one place."
            </p>
            <div class="hero__actions">
                <Show
                    when=authed
                    fallback=|| {
                        view! {
                            <a class="btn btn--primary" href="/register">"Get Started"</a>
                            <a class="btn" href="/login">"Sign In"</a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/books">"Browse Books"</a>
                    <a class="btn" href="/reading-lists">"My Lists"</a>
                </Show>
            </div>
        </section>
        <section class="page features">
            <div class="feature">
                <h2>"Manage Books"</h2>
                <p>"Add, organize, and browse through your collection of books."</p>
            </div>
            <div class="feature">
                <h2>"Reading Lists"</h2>
                <p>"Create personalized reading lists and track your reading journey."</p>
            </div>
        </section>
    }
}
