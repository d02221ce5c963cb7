//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, notice_tray::NoticeTray};
use crate::pages::{
    book_detail::BookDetailPage,
    book_form::{BookFormPage, FormMode},
    books::BooksPage,
    home::HomePage,
    login::LoginPage,
    profile::ProfilePage,
    reading_list_detail::ReadingListDetailPage,
    reading_list_form::ReadingListFormPage,
    reading_lists::ReadingListsPage,
    register::RegisterPage,
};
use crate::state::{notice::Notices, session::provide_session};

/// Root application component.
///
/// Provides the session and notice contexts, starts the one-time session
/// probe, and sets up client-side routing. Unknown paths go home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Notices::provide();
    let session = provide_session();

    spawn_local(async move {
        session.initialize().await;
    });

    view! {
        <Title text="Shelfmark"/>

        <Router>
            <NavBar/>
            <NoticeTray/>
            <main class="main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("books") view=BooksPage/>
                    <Route
                        path=(StaticSegment("books"), StaticSegment("create"))
                        view=|| view! { <BookFormPage mode=FormMode::Create/> }
                    />
                    <Route path=(StaticSegment("books"), ParamSegment("id")) view=BookDetailPage/>
                    <Route
                        path=(StaticSegment("books"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <BookFormPage mode=FormMode::Edit/> }
                    />
                    <Route path=StaticSegment("reading-lists") view=ReadingListsPage/>
                    <Route
                        path=(StaticSegment("reading-lists"), StaticSegment("create"))
                        view=|| view! { <ReadingListFormPage mode=FormMode::Create/> }
                    />
                    <Route
                        path=(StaticSegment("reading-lists"), ParamSegment("id"))
                        view=ReadingListDetailPage
                    />
                    <Route
                        path=(StaticSegment("reading-lists"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <ReadingListFormPage mode=FormMode::Edit/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
