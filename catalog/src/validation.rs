//! Client-side form checks.
//!
//! Failures are reported as [`ErrorPayload::FieldErrors`], the same shape the
//! server uses, so a form renders local and remote validation identically.
//! These checks only catch what would obviously be rejected; the server stays
//! the authority.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::error::ErrorPayload;
use crate::types::{Book, BookInput, Genre, LoginCredentials, ReadingList, ReadingListInput, Registration};

pub const REQUIRED: &str = "This field is required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const GENRE_REQUIRED: &str = "Select a genre";
pub const INVALID_PAGES: &str = "Enter a whole number of pages.";
pub const INVALID_ISBN: &str = "ISBN must be 10 or 13 digits";
pub const INVALID_DATE: &str = "Enter a date as YYYY-MM-DD.";

#[derive(Default)]
struct Collector(BTreeMap<String, Vec<String>>);

impl Collector {
    fn push(&mut self, field: &str, message: &str) {
        self.0.entry(field.to_owned()).or_default().push(message.to_owned());
    }

    fn require(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, REQUIRED);
            return false;
        }
        true
    }

    fn finish<T>(self, value: T) -> Result<T, ErrorPayload> {
        if self.0.is_empty() { Ok(value) } else { Err(ErrorPayload::FieldErrors(self.0)) }
    }
}

/// Both fields must be present.
///
/// # Errors
///
/// Returns field errors for each blank field.
pub fn validate_login(credentials: &LoginCredentials) -> Result<(), ErrorPayload> {
    let mut errors = Collector::default();
    errors.require("email", &credentials.email);
    errors.require("password", &credentials.password);
    errors.finish(())
}

/// Required fields present and the two passwords equal.
///
/// # Errors
///
/// Returns field errors; a mismatch is reported on `password_confirm`.
pub fn validate_registration(registration: &Registration) -> Result<(), ErrorPayload> {
    let mut errors = Collector::default();
    errors.require("username", &registration.username);
    errors.require("email", &registration.email);
    let has_password = errors.require("password", &registration.password);
    if has_password && registration.password != registration.password_confirm {
        errors.push("password_confirm", PASSWORD_MISMATCH);
    }
    errors.finish(())
}

// =============================================================================
// BOOK FORM
// =============================================================================

/// Raw text of the book form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub authors: String,
    /// Genre wire name, or empty when nothing is selected.
    pub genre: String,
    pub publication_date: String,
    pub description: String,
    pub isbn: String,
    pub pages: String,
}

impl BookDraft {
    /// Seed the edit form from an existing book.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.authors.clone(),
            genre: book.genre.as_str().to_owned(),
            publication_date: book.publication_date.clone(),
            description: book.description.clone(),
            isbn: book.isbn.clone().unwrap_or_default(),
            pages: book.pages.map(|pages| pages.to_string()).unwrap_or_default(),
        }
    }

    /// Convert to the write payload. Blank `pages` and `isbn` become `null`.
    ///
    /// # Errors
    ///
    /// Returns field errors for missing required fields, an unselected genre,
    /// a non-numeric page count, a malformed date, or an ISBN of the wrong
    /// length.
    pub fn to_input(&self) -> Result<BookInput, ErrorPayload> {
        let mut errors = Collector::default();
        errors.require("title", &self.title);
        errors.require("authors", &self.authors);

        let genre = Genre::from_wire(self.genre.trim());
        if genre.is_none() {
            errors.push("genre", GENRE_REQUIRED);
        }

        let date = self.publication_date.trim();
        if errors.require("publication_date", date) && !is_iso_date(date) {
            errors.push("publication_date", INVALID_DATE);
        }

        let pages = match self.pages.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(pages) => Some(pages),
                Err(_) => {
                    errors.push("pages", INVALID_PAGES);
                    None
                }
            },
        };

        let isbn = match self.isbn.trim() {
            "" => None,
            raw => {
                if !matches!(raw.chars().count(), 10 | 13) {
                    errors.push("isbn", INVALID_ISBN);
                }
                Some(raw.to_owned())
            }
        };

        let Some(genre) = genre else {
            return Err(ErrorPayload::FieldErrors(errors.0));
        };
        errors.finish(BookInput {
            title: self.title.trim().to_owned(),
            authors: self.authors.trim().to_owned(),
            genre,
            publication_date: date.to_owned(),
            description: self.description.clone(),
            isbn,
            pages,
        })
    }
}

/// `YYYY-MM-DD` shape check; calendar validity is left to the server.
fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

// =============================================================================
// READING LIST FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingListDraft {
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

impl ReadingListDraft {
    #[must_use]
    pub fn from_list(list: &ReadingList) -> Self {
        Self { name: list.name.clone(), description: list.description.clone(), is_public: list.is_public }
    }

    /// # Errors
    ///
    /// Returns a field error when the name is blank.
    pub fn to_input(&self) -> Result<ReadingListInput, ErrorPayload> {
        let mut errors = Collector::default();
        errors.require("name", &self.name);
        errors.finish(ReadingListInput {
            name: self.name.trim().to_owned(),
            description: self.description.clone(),
            is_public: self.is_public,
        })
    }
}
