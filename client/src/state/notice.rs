//! Transient user notices (the toast tray).
//!
//! DESIGN
//! ======
//! Notices are plain data in a context signal; `NoticeTray` renders them.
//! A pending notice ("Deleting book...") is later resolved in place to a
//! success or error so the user sees one line per action.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// Oldest notices are dropped past this many.
pub const MAX_VISIBLE: usize = 4;
/// Settled notices disappear after this long.
pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Pending,
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending => "notice--pending",
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Replace kind and text of an existing notice. Returns false if it was
    /// already dismissed.
    pub fn resolve(&mut self, id: u64, kind: NoticeKind, text: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|notice| notice.id == id) {
            Some(notice) => {
                notice.kind = kind;
                notice.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }
}

/// Handle for pushing notices from pages and components.
#[derive(Clone, Copy, Debug)]
pub struct Notices(RwSignal<NoticeState>);

impl Notices {
    pub fn provide() -> Self {
        let notices = Self(RwSignal::new(NoticeState::default()));
        provide_context(notices);
        notices
    }

    pub fn items(&self) -> Vec<Notice> {
        self.0.with(|state| state.items.clone())
    }

    pub fn success(&self, text: impl Into<String>) {
        self.settled(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.settled(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.settled(NoticeKind::Info, text.into());
    }

    /// Show an in-flight notice that stays until resolved.
    pub fn pending(&self, text: impl Into<String>) -> u64 {
        let text = text.into();
        let mut id = 0;
        self.0.update(|state| id = state.push(NoticeKind::Pending, text));
        id
    }

    /// Settle a pending notice; falls back to a fresh notice if it is gone.
    pub fn resolve(&self, id: u64, kind: NoticeKind, text: impl Into<String>) {
        let text = text.into();
        let mut found = false;
        self.0.update(|state| found = state.resolve(id, kind, text.clone()));
        if found {
            self.schedule_dismiss(id);
        } else {
            self.settled(kind, text);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|state| state.dismiss(id));
    }

    fn settled(&self, kind: NoticeKind, text: String) {
        let mut id = 0;
        self.0.update(|state| id = state.push(kind, text));
        self.schedule_dismiss(id);
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables, clippy::unused_self))]
    fn schedule_dismiss(&self, id: u64) {
        #[cfg(feature = "csr")]
        {
            let notices = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                notices.dismiss(id);
            });
        }
    }
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}
