//! Application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` wraps the catalog session state machine in a reactive store;
//! `notice` holds transient user feedback. Per-page data (lists, details,
//! form drafts) stays local to the page that loads it.

pub mod notice;
pub mod remote;
pub mod session;
