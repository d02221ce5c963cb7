//! Wire DTOs for the catalog REST API.
//!
//! DESIGN
//! ======
//! Read models mirror the server's serializer output and are lenient about
//! optional/nullable fields so a partially populated record never fails a
//! whole list decode. Write payloads carry only the fields the server accepts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// The authenticated user as returned by `GET /auth/profile/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Absolute or server-relative URL of the uploaded avatar.
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Full name when the user filled one in, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// Body of `POST /auth/login/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `PUT /auth/profile/`. Email is read-only server side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl ProfileUpdate {
    /// Seed an edit form from the current profile.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// BOOKS
// =============================================================================

/// Closed set of catalog genres.
///
/// Unknown wire values decode to [`Genre::Other`] so a server-side addition
/// degrades to a label rather than a failed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    Romance,
    SciFi,
    Fantasy,
    Biography,
    History,
    SelfHelp,
    Other,
}

impl Genre {
    /// Every genre in display order.
    pub const ALL: [Self; 10] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Mystery,
        Self::Romance,
        Self::SciFi,
        Self::Fantasy,
        Self::Biography,
        Self::History,
        Self::SelfHelp,
        Self::Other,
    ];

    /// Wire name (e.g. `"sci_fi"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non_fiction",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::SciFi => "sci_fi",
            Self::Fantasy => "fantasy",
            Self::Biography => "biography",
            Self::History => "history",
            Self::SelfHelp => "self_help",
            Self::Other => "other",
        }
    }

    /// Human-readable label (e.g. `"Science Fiction"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::SciFi => "Science Fiction",
            Self::Fantasy => "Fantasy",
            Self::Biography => "Biography",
            Self::History => "History",
            Self::SelfHelp => "Self Help",
            Self::Other => "Other",
        }
    }

    /// Strict parse of a wire name; `None` for anything unrecognised.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == raw)
    }
}

impl From<String> for Genre {
    fn from(raw: String) -> Self {
        Self::from_wire(&raw).unwrap_or(Self::Other)
    }
}

impl From<Genre> for &'static str {
    fn from(genre: Genre) -> Self {
        genre.as_str()
    }
}

/// A catalog book as returned by `GET /book/` and `GET /book/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Comma-separated author names as entered.
    pub authors: String,
    /// Server-split author names, when provided.
    #[serde(default)]
    pub authors_list: Vec<String>,
    pub genre: Genre,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub publication_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    /// ID of the user who added the book.
    pub created_by: i64,
    #[serde(default)]
    pub created_by_username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Book {
    /// Author names, preferring the server's split list.
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        if !self.authors_list.is_empty() {
            return self.authors_list.clone();
        }
        self.authors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Only the creator may edit or delete a book.
    #[must_use]
    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|user| user.id == self.created_by)
    }
}

/// Body of `POST /book/` and `PUT /book/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub authors: String,
    pub genre: Genre,
    pub publication_date: String,
    pub description: String,
    /// `None` serializes as `null`; an empty ISBN must not reach the server.
    pub isbn: Option<String>,
    pub pages: Option<u32>,
}

/// Sort key accepted by the `ordering` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookOrdering {
    #[default]
    NewestFirst,
    OldestFirst,
    TitleAsc,
    TitleDesc,
    PublishedAsc,
    PublishedDesc,
}

impl BookOrdering {
    pub const ALL: [Self; 6] = [
        Self::NewestFirst,
        Self::OldestFirst,
        Self::TitleAsc,
        Self::TitleDesc,
        Self::PublishedAsc,
        Self::PublishedDesc,
    ];

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::NewestFirst => "-created_at",
            Self::OldestFirst => "created_at",
            Self::TitleAsc => "title",
            Self::TitleDesc => "-title",
            Self::PublishedAsc => "publication_date",
            Self::PublishedDesc => "-publication_date",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest First",
            Self::OldestFirst => "Oldest First",
            Self::TitleAsc => "Title A-Z",
            Self::TitleDesc => "Title Z-A",
            Self::PublishedAsc => "Publication Date (Old-New)",
            Self::PublishedDesc => "Publication Date (New-Old)",
        }
    }

    #[must_use]
    pub fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ordering| ordering.as_param() == raw)
    }
}

/// Filters for `GET /book/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub search: Option<String>,
    pub genre: Option<Genre>,
    pub ordering: BookOrdering,
}

impl BookQuery {
    /// Query-string pairs; blank search terms are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        if let Some(genre) = self.genre {
            pairs.push(("genre".to_owned(), genre.as_str().to_owned()));
        }
        pairs.push(("ordering".to_owned(), self.ordering.as_param().to_owned()));
        pairs
    }

    /// Whether the user narrowed the list (drives the "Found N books" notice).
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.genre.is_some() || self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

// =============================================================================
// READING LISTS
// =============================================================================

/// A reading list with its ordered items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default)]
    pub items: Vec<ReadingListItem>,
    #[serde(default)]
    pub items_count: Option<usize>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ReadingList {
    /// Server count when present, otherwise the embedded item count.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.items_count.unwrap_or(self.items.len())
    }
}

/// A book entry inside a reading list, with list-specific notes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListItem {
    pub id: i64,
    pub book: Book,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub added_at: Option<String>,
}

/// Body of `POST /reading-list/` and `PUT /reading-list/{id}/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListInput {
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

/// Body of `POST /reading-list/{id}/add-book/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookInput {
    pub book_id: i64,
    pub notes: String,
}

// =============================================================================
// LIST ENVELOPES
// =============================================================================

/// List endpoints answer either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Page { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Page { results } | Self::Bare(results) => results,
        }
    }
}
