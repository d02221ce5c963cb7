//! Route guard for authenticated pages.
//!
//! Renders children only for an authenticated session, a placeholder while
//! the startup probe is pending, and otherwise redirects to `/login`.

use catalog::{Session, SessionState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = *use_session().store();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(Session::is_authenticated)
            fallback=move || {
                let pending = session.with(|s| s.loading() || matches!(s.state(), SessionState::Unknown));
                view! {
                    <div class="page page--placeholder">
                        <p>{if pending { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
