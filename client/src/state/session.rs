//! Reactive session store for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AppSession`] at startup and provides it via context.
//! Pages and components read the session reactively through
//! [`SessionSignal::get`] and trigger transitions through the catalog
//! `SessionContext` operations; nothing else writes the signal.

use catalog::{ApiClient, Session, SessionContext, SessionStore};
use leptos::prelude::*;

use crate::net::browser::BrowserTransport;

/// `RwSignal<Session>` behind the catalog [`SessionStore`] seam.
#[derive(Clone, Copy, Debug)]
pub struct SessionSignal(RwSignal<Session>);

impl Default for SessionSignal {
    fn default() -> Self {
        Self(RwSignal::new(Session::default()))
    }
}

impl SessionSignal {
    /// Tracked read: re-runs the calling effect/view on change.
    pub fn get(&self) -> Session {
        self.0.get()
    }

    /// Tracked borrow without cloning the whole session.
    pub fn with<R>(&self, read: impl FnOnce(&Session) -> R) -> R {
        self.0.with(read)
    }
}

impl SessionStore for SessionSignal {
    fn snapshot(&self) -> Session {
        self.0.get_untracked()
    }

    fn update(&self, apply: impl FnOnce(&mut Session)) {
        self.0.update(apply);
    }
}

/// The session context as wired in the browser.
pub type AppSession = SessionContext<BrowserTransport, SessionSignal>;

/// Create the page-lifetime session and provide it to descendants.
pub fn provide_session() -> AppSession {
    let session = SessionContext::new(ApiClient::new(BrowserTransport::default()), SessionSignal::default());
    provide_context(session.clone());
    session
}

/// The session provided by [`provide_session`].
pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}
