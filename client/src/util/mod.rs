//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (redirect rules, wording, formatting) kept out of components
//! so they can be unit-tested without a browser.

pub mod auth;
pub mod format;
pub mod messages;
pub mod nav;
pub mod route;
