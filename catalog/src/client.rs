//! Grouped REST client for auth, books, and reading lists.
//!
//! DESIGN
//! ======
//! `ApiClient` owns a [`Transport`] and exposes three borrowed endpoint groups
//! (`auth()`, `books()`, `reading_lists()`). Every operation funnels through
//! `execute`, which is the single place non-2xx responses become
//! [`ApiError::Response`] with a normalized payload.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;

use crate::endpoints;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::types::{
    AddBookInput, Book, BookInput, BookQuery, Listing, LoginCredentials, ProfileUpdate, ReadingList,
    ReadingListInput, ReadingListItem, Registration, User,
};

/// REST client over a pluggable transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authentication and profile endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi { client: self }
    }

    /// Book CRUD endpoints.
    #[must_use]
    pub fn books(&self) -> BooksApi<'_, T> {
        BooksApi { client: self }
    }

    /// Reading-list CRUD and membership endpoints.
    #[must_use]
    pub fn reading_lists(&self) -> ReadingListsApi<'_, T> {
        ReadingListsApi { client: self }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let response = self.transport.send(request).await.map_err(|error| {
            tracing::debug!(method, %path, error = %error, "transport failure");
            ApiError::from(error)
        })?;
        if response.is_success() {
            return Ok(response);
        }
        tracing::debug!(method, %path, status = response.status, "request rejected");
        Err(ApiError::from_response(response.status, &response.body))
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        decode(&response.body)
    }

    async fn fetch_list<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<R>, ApiError> {
        let listing: Listing<R> = self.fetch(request).await?;
        Ok(listing.into_vec())
    }

    /// Execute and discard the body (logout, deletes).
    async fn fire(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

pub struct AuthApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> AuthApi<'_, T> {
    /// `POST /auth/login/`. The server sets the session cookies; any 2xx is
    /// success and the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on rejected credentials or transport failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        let request = ApiRequest::post(endpoints::LOGIN).with_json(credentials)?;
        self.client.fire(request).await
    }

    /// `POST /auth/register/`. Does not start a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with field errors on validation failure.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let request = ApiRequest::post(endpoints::REGISTER).with_json(registration)?;
        self.client.fire(request).await
    }

    /// `POST /auth/logout/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects or cannot be reached.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.fire(ApiRequest::post(endpoints::LOGOUT)).await
    }

    /// `GET /auth/profile/`: the current user for the ambient credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (401/403) when no session is active.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client.fetch(ApiRequest::get(endpoints::PROFILE)).await
    }

    /// `PUT /auth/profile/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with field errors on validation failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let request = ApiRequest::put(endpoints::PROFILE).with_json(update)?;
        self.client.fetch(request).await
    }

    /// `POST /auth/token/refresh/`. Not used by the session lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the refresh cookie is missing or invalid.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        self.client.fire(ApiRequest::post(endpoints::TOKEN_REFRESH)).await
    }
}

// =============================================================================
// BOOKS
// =============================================================================

pub struct BooksApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> BooksApi<'_, T> {
    /// `GET /book/` with search/genre/ordering filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn list(&self, query: &BookQuery) -> Result<Vec<Book>, ApiError> {
        let request = ApiRequest::get(endpoints::BOOKS).with_query(query.to_pairs());
        self.client.fetch_list(request).await
    }

    /// `GET /book/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (404 when missing).
    pub async fn get(&self, id: i64) -> Result<Book, ApiError> {
        self.client.fetch(ApiRequest::get(endpoints::book(id))).await
    }

    /// `POST /book/`. The server echoes the writable fields only.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with field errors on validation failure.
    pub async fn create(&self, input: &BookInput) -> Result<(), ApiError> {
        let request = ApiRequest::post(endpoints::BOOKS).with_json(input)?;
        self.client.fire(request).await
    }

    /// `PUT /book/{id}/`. Only the creator may update.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (403 for non-owners).
    pub async fn update(&self, id: i64, input: &BookInput) -> Result<(), ApiError> {
        let request = ApiRequest::put(endpoints::book(id)).with_json(input)?;
        self.client.fire(request).await
    }

    /// `DELETE /book/{id}/`. Only the creator may delete.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (403 for non-owners, 404 when missing).
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.fire(ApiRequest::delete(endpoints::book(id))).await
    }
}

// =============================================================================
// READING LISTS
// =============================================================================

pub struct ReadingListsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ReadingListsApi<'_, T> {
    /// `GET /reading-list/`: the current user's lists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn list(&self) -> Result<Vec<ReadingList>, ApiError> {
        self.client.fetch_list(ApiRequest::get(endpoints::READING_LISTS)).await
    }

    /// `GET /reading-list/{id}/` with nested items.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (404 when missing or not owned).
    pub async fn get(&self, id: i64) -> Result<ReadingList, ApiError> {
        self.client.fetch(ApiRequest::get(endpoints::reading_list(id))).await
    }

    /// `POST /reading-list/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with field errors on validation failure.
    pub async fn create(&self, input: &ReadingListInput) -> Result<(), ApiError> {
        let request = ApiRequest::post(endpoints::READING_LISTS).with_json(input)?;
        self.client.fire(request).await
    }

    /// `PUT /reading-list/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn update(&self, id: i64, input: &ReadingListInput) -> Result<(), ApiError> {
        let request = ApiRequest::put(endpoints::reading_list(id)).with_json(input)?;
        self.client.fire(request).await
    }

    /// `DELETE /reading-list/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.fire(ApiRequest::delete(endpoints::reading_list(id))).await
    }

    /// `POST /reading-list/{id}/add-book/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (400 when the book is already on the list).
    pub async fn add_book(&self, list_id: i64, input: &AddBookInput) -> Result<ReadingListItem, ApiError> {
        let request = ApiRequest::post(endpoints::reading_list_add_book(list_id)).with_json(input)?;
        self.client.fetch(request).await
    }

    /// `DELETE /reading-list/{id}/items/{item_id}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] (404 when the item is gone).
    pub async fn remove_item(&self, list_id: i64, item_id: i64) -> Result<(), ApiError> {
        self.client
            .fire(ApiRequest::delete(endpoints::reading_list_item(list_id, item_id)))
            .await
    }
}
