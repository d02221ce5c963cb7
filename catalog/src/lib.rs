//! Shelfmark catalog core.
//!
//! Target-agnostic pieces shared by the browser client and the CLI: wire
//! types, error normalization, endpoint paths, the [`Transport`] seam, the
//! grouped [`ApiClient`], and the session state machine.
//!
//! The crate compiles for `wasm32-unknown-unknown` with default features.
//! The `native` feature adds [`native::HttpTransport`] on `reqwest`.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod session;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::{ApiClient, AuthApi, BooksApi, ReadingListsApi};
pub use config::{ClientConfig, ConfigError, Timeouts};
pub use error::{ApiError, ErrorKind, ErrorPayload};
pub use session::{
    LOGIN_PATH, LogoutOutcome, ProbeFailure, Session, SessionContext, SessionState, SessionStore, SharedSession,
};
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
pub use types::{
    AddBookInput, Book, BookInput, BookOrdering, BookQuery, Genre, LoginCredentials, ProfileUpdate,
    ReadingList, ReadingListInput, ReadingListItem, Registration, User,
};
