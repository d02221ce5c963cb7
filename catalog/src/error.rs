//! Error taxonomy for the API-client boundary.
//!
//! DESIGN
//! ======
//! The server answers failures in several ad-hoc JSON shapes. They are
//! normalized exactly once, in [`ErrorPayload::from_value`], into a closed
//! set of variants so views match on an enum instead of probing fields.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Callers pick a user-facing message from
//! [`ApiError::kind`] or surface per-field messages from the payload.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::transport::TransportError;

/// Key the server uses for errors not tied to one field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Normalized body of a failed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorPayload {
    /// `{ "detail": "..." }` or `{ "error": "..." }`.
    Detail(String),
    /// `{ "non_field_errors": ["..."] }` with no other keys.
    NonFieldErrors(Vec<String>),
    /// `{ "<field>": "..." | ["..."], ... }`. May include `non_field_errors`
    /// alongside real fields.
    FieldErrors(BTreeMap<String, Vec<String>>),
    /// Anything else: empty body, HTML, nested objects, non-object JSON.
    Unknown(Value),
}

impl ErrorPayload {
    /// Convenience constructor for a plain message.
    #[must_use]
    pub fn detail(message: impl Into<String>) -> Self {
        Self::Detail(message.into())
    }

    /// Parse a raw response body. Non-JSON bodies are kept as a string inside
    /// [`ErrorPayload::Unknown`]; an empty body becomes `Unknown(null)`.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Unknown(Value::Null);
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Unknown(Value::String(body.to_owned())),
        }
    }

    /// Classify a decoded JSON error body.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::Unknown(value);
        };

        if let Some(Value::String(detail)) = map.get("detail") {
            return Self::Detail(detail.clone());
        }
        if let Some(Value::String(error)) = map.get("error") {
            return Self::Detail(error.clone());
        }

        let mut fields = collect_field_messages(&map);
        if fields.is_empty() {
            Self::Unknown(Value::Object(map))
        } else if fields.len() == 1 && fields.contains_key(NON_FIELD_ERRORS) {
            Self::NonFieldErrors(fields.remove(NON_FIELD_ERRORS).unwrap_or_default())
        } else {
            Self::FieldErrors(fields)
        }
    }

    /// Build a single-field validation payload (client-side checks use the
    /// same shape as server validation).
    #[must_use]
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(name.to_owned(), vec![message.into()]);
        Self::FieldErrors(fields)
    }

    /// The detail message, if this is a [`ErrorPayload::Detail`].
    #[must_use]
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            Self::Detail(message) => Some(message),
            _ => None,
        }
    }

    /// All messages for one field.
    #[must_use]
    pub fn field_messages(&self, name: &str) -> &[String] {
        match self {
            Self::FieldErrors(fields) => fields.get(name).map_or(&[][..], Vec::as_slice),
            Self::NonFieldErrors(messages) if name == NON_FIELD_ERRORS => messages.as_slice(),
            _ => &[],
        }
    }

    /// First message for one field, which is what forms display inline.
    #[must_use]
    pub fn first_field_message(&self, name: &str) -> Option<&str> {
        self.field_messages(name).first().map(String::as_str)
    }

    /// Messages that are not tied to a form field.
    #[must_use]
    pub fn non_field_messages(&self) -> &[String] {
        self.field_messages(NON_FIELD_ERRORS)
    }

    /// True when the payload carries at least one field-specific message.
    #[must_use]
    pub fn has_field_errors(&self) -> bool {
        matches!(self, Self::FieldErrors(fields) if fields.keys().any(|key| key != NON_FIELD_ERRORS))
    }

    /// One-line message for a notice: detail, else the first non-field
    /// message, else `"<field>: <message>"` for the first field, else
    /// `fallback`.
    #[must_use]
    pub fn summary(&self, fallback: &str) -> String {
        match self {
            Self::Detail(message) => message.clone(),
            Self::NonFieldErrors(messages) => messages.first().cloned().unwrap_or_else(|| fallback.to_owned()),
            Self::FieldErrors(fields) => {
                if let Some(message) = self.non_field_messages().first() {
                    return message.clone();
                }
                fields
                    .iter()
                    .find_map(|(field, messages)| {
                        messages.first().map(|message| format!("{}: {message}", humanize_field(field)))
                    })
                    .unwrap_or_else(|| fallback.to_owned())
            }
            Self::Unknown(_) => fallback.to_owned(),
        }
    }

    /// Re-encode in the server's own shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Detail(message) => serde_json::json!({ "detail": message }),
            Self::NonFieldErrors(messages) => {
                let mut map = Map::new();
                map.insert(NON_FIELD_ERRORS.to_owned(), serde_json::json!(messages));
                Value::Object(map)
            }
            Self::FieldErrors(fields) => serde_json::json!(fields),
            Self::Unknown(value) => value.clone(),
        }
    }
}

/// Keys whose value yields no message strings (numbers, nested objects) are
/// skipped so they cannot hide the readable ones.
fn collect_field_messages(map: &Map<String, Value>) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    for (key, value) in map {
        let mut messages = Vec::new();
        collect_strings(value, &mut messages);
        if !messages.is_empty() {
            fields.insert(key.clone(), messages);
        }
    }
    fields
}

/// Strings at any depth of nested arrays, in order.
fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(message) => out.push(message.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        _ => {}
    }
}

/// `"password_confirm"` -> `"Password confirm"`.
#[must_use]
pub fn humanize_field(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// API ERROR
// =============================================================================

/// Coarse classification used to choose user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400/422 with field or non-field messages.
    Validation,
    /// 401: no or expired credential.
    Unauthorized,
    /// 403: authenticated but not allowed.
    Forbidden,
    /// 404.
    NotFound,
    /// 5xx.
    Server,
    /// The request never produced a response.
    Network,
    /// Anything else, including undecodable success bodies.
    Unknown,
}

/// Errors produced by [`crate::ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server responded {status}: {}", .payload.summary("request failed"))]
    Response { status: u16, payload: ErrorPayload },

    /// The transport could not complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Normalize a non-success response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Response { status, payload: ErrorPayload::from_body(body) }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Normalized server payload, when the server answered.
    #[must_use]
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Response { payload, .. } => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Response { status, .. } => match status {
                400 | 422 => ErrorKind::Validation,
                401 => ErrorKind::Unauthorized,
                403 => ErrorKind::Forbidden,
                404 => ErrorKind::NotFound,
                500..=599 => ErrorKind::Server,
                _ => ErrorKind::Unknown,
            },
            Self::Transport(_) => ErrorKind::Network,
            Self::Decode(_) | Self::Encode(_) => ErrorKind::Unknown,
        }
    }

    /// The server payload verbatim, or `Detail(fallback)` when it is absent
    /// or not one of the recognised shapes.
    #[must_use]
    pub fn into_payload(self, fallback: &str) -> ErrorPayload {
        match self {
            Self::Response { payload: ErrorPayload::Unknown(_), .. } => ErrorPayload::detail(fallback),
            Self::Response { payload, .. } => payload,
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => ErrorPayload::detail(fallback),
        }
    }
}
