//! User-facing wording for API outcomes.
//!
//! Views never show raw server payloads in notices; they pick a message here
//! from the error kind or the normalized payload.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use catalog::error::humanize_field;
use catalog::{ErrorKind, ErrorPayload};

pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const LOGIN_GENERIC: &str = "Login failed. Please check your credentials.";
pub const REGISTRATION_GENERIC: &str = "Registration failed. Please check your information.";
pub const REGISTERED: &str = "Registration successful! Please sign in.";
pub const WELCOME_BACK: &str = "Welcome back!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Book,
    ReadingList,
}

impl Entity {
    fn noun(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::ReadingList => "reading list",
        }
    }
}

/// Message for a failed delete, by error class.
pub fn delete_failure(entity: Entity, kind: ErrorKind) -> String {
    match (kind, entity) {
        (ErrorKind::Forbidden, Entity::Book) => "You do not have permission to delete this book".to_owned(),
        (ErrorKind::Forbidden, Entity::ReadingList) => "You do not have permission to delete this list".to_owned(),
        (ErrorKind::NotFound, Entity::Book) => "Book not found".to_owned(),
        (ErrorKind::NotFound, Entity::ReadingList) => "Reading list not found".to_owned(),
        (ErrorKind::Network, _) => NETWORK_ERROR.to_owned(),
        (_, entity) => format!("Failed to delete {}. Please try again.", entity.noun()),
    }
}

/// Message for a failed detail/list load.
pub fn load_failure(entity: Entity, plural: bool) -> String {
    match (entity, plural) {
        (Entity::Book, true) => "Failed to load books. Please try again.".to_owned(),
        (Entity::Book, false) => "Failed to load book details".to_owned(),
        (Entity::ReadingList, true) => "Failed to load reading lists. Please try again.".to_owned(),
        (Entity::ReadingList, false) => "Failed to load reading list".to_owned(),
    }
}

/// One notice line for a failed login: detail, else the email or password
/// message, else a generic line.
pub fn login_failure(payload: &ErrorPayload) -> String {
    if let Some(detail) = payload.detail_message() {
        return detail.to_owned();
    }
    for field in ["email", "password"] {
        if let Some(message) = payload.first_field_message(field) {
            return format!("{}: {message}", humanize_field(field));
        }
    }
    if let Some(message) = payload.non_field_messages().first() {
        return message.clone();
    }
    LOGIN_GENERIC.to_owned()
}

/// Notice lines for a failed registration, one per relevant field plus every
/// non-field message.
pub fn registration_failures(payload: &ErrorPayload) -> Vec<String> {
    if let Some(detail) = payload.detail_message() {
        return vec![detail.to_owned()];
    }
    let mut lines: Vec<String> = ["username", "email", "password"]
        .into_iter()
        .filter_map(|field| {
            payload
                .first_field_message(field)
                .map(|message| format!("{}: {message}", humanize_field(field)))
        })
        .collect();
    lines.extend(payload.non_field_messages().iter().cloned());
    if lines.is_empty() {
        lines.push(REGISTRATION_GENERIC.to_owned());
    }
    lines
}

/// "Found 1 book" / "Found 3 books".
pub fn found_books(count: usize) -> String {
    let noun = if count == 1 { "book" } else { "books" };
    format!("Found {count} {noun}")
}

pub fn deleted(name: &str) -> String {
    format!("\"{name}\" has been deleted successfully!")
}

/// Body of the delete confirmation dialog.
pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"? This action cannot be undone.")
}
