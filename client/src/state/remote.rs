//! Load state for data fetched by a page.
//!
//! Every list and detail view re-fetches on mount and keeps the result in a
//! `RwSignal<Remote<T>>`; there is no shared cache.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use catalog::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    /// Map an API result, using `failure` as the user-facing message.
    pub fn from_result(result: Result<T, ApiError>, failure: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => {
                log_failure(&error);
                Self::Failed(failure.to_owned())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn log_failure(error: &ApiError) {
    #[cfg(feature = "csr")]
    log::warn!("load failed: {error}");
}
