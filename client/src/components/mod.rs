//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, notices, dialogs, cards) and
//! read session and notice state from Leptos context providers.

pub mod add_book_modal;
pub mod book_card;
pub mod confirm_dialog;
pub mod field_error;
pub mod nav_bar;
pub mod notice_tray;
pub mod protected;
