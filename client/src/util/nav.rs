//! Signal-driven navigation.
//!
//! Event handlers and spawned tasks set a target path; one effect per page
//! hands it to the router. Handlers then only capture a `Copy` signal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, Debug)]
pub struct Navigator(RwSignal<Option<String>>);

impl Navigator {
    /// Must be called inside a component under `<Router>`.
    pub fn install() -> Self {
        let target = RwSignal::new(None::<String>);
        let navigate = use_navigate();
        Effect::new(move || {
            let Some(path) = target.get() else {
                return;
            };
            target.set(None);
            navigate(&path, NavigateOptions::default());
        });
        Self(target)
    }

    pub fn go(&self, path: impl Into<String>) {
        self.0.set(Some(path.into()));
    }
}
