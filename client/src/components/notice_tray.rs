//! Fixed-position stack of notices.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, use_notices};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = use_notices();

    // Keyed on kind too, so a resolved pending notice re-renders.
    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || notices.items()
                key=|notice| (notice.id, notice.kind as u8)
                children=move |notice: Notice| {
                    let id = notice.id;
                    let dismissible = notice.kind != NoticeKind::Pending;
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier())>
                            <span class="notice__text">{notice.text}</span>
                            <Show when=move || dismissible>
                                <button
                                    class="notice__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
