// pgmeta-client: Rust client for the platform pg-meta API
// Copyright 2026 Platform Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for platform API operations

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating request parameters, before anything is sent.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("Invalid project ref: {0}")]
    InvalidProjectRef(String),

    #[error("Invalid table id: {0}")]
    InvalidTableId(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid header value for {name}: {cause}")]
    InvalidHeaderValue { name: String, cause: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Transport level failures: the server could not be reached or the
/// response could not be read.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Error payload reported by the platform API.
///
/// The server always sends a human readable `message`; the remaining fields
/// are filled in when the server or the transport provides them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseError {
    /// Human readable error message
    pub message: String,
    /// HTTP status code of the failed response
    pub code: Option<u16>,
    /// Request id assigned by the platform, for support requests
    pub request_id: Option<String>,
    /// Seconds to wait before retrying, when the server rate limited the call
    pub retry_after: Option<u64>,
}

impl ResponseError {
    pub fn new(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            code,
            request_id: None,
            retry_after: None,
        }
    }

    /// Builds the error from a failed response body.
    ///
    /// The body is expected to be JSON carrying at least `message` (some
    /// endpoints use `error` instead). Anything else is taken verbatim as the
    /// message, and an empty body falls back to the status reason.
    pub fn from_body(status: http::StatusCode, body: &str, request_id: Option<String>) -> Self {
        let code = Some(status.as_u16());
        let mut err = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                message: parsed
                    .message
                    .or_else(|| parsed.error.and_then(ErrorDetail::into_message))
                    .unwrap_or_else(|| fallback_message(status, "")),
                code,
                request_id: parsed.request_id,
                retry_after: parsed.retry_after,
            },
            Err(_) => Self::new(fallback_message(status, body), code),
        };
        if err.request_id.is_none() {
            err.request_id = request_id;
        }
        err
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Some(http::StatusCode::NOT_FOUND.as_u16())
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (status {code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ResponseError {}

fn fallback_message(status: http::StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()))
}

/// Wire format of platform API error bodies
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<ErrorDetail>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    retry_after: Option<u64>,
}

/// `error` is either the message itself or an object carrying one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Nested {
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorDetail {
    fn into_message(self) -> Option<String> {
        match self {
            ErrorDetail::Text(message) => Some(message),
            ErrorDetail::Nested { message } => message,
        }
    }
}

/// Top-level error type of this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Service error: {0}")]
    Service(ResponseError),
}

impl Error {
    /// The message shown to users when an operation fails.
    pub fn message(&self) -> String {
        match self {
            Error::Service(err) => err.message.clone(),
            Error::Validation(err) => err.to_string(),
            Error::Network(err) => err.to_string(),
        }
    }

    /// The server error payload, if the failure was reported by the server.
    pub fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Error::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Error::Service(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_response_error_from_json_body() {
        let err = ResponseError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"message":"cannot drop table users because other objects depend on it","requestId":"req-1"}"#,
            None,
        );
        assert_eq!(
            err.message,
            "cannot drop table users because other objects depend on it"
        );
        assert_eq!(err.code, Some(400));
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
        assert_eq!(err.retry_after, None);
    }

    #[test]
    fn test_response_error_uses_error_field() {
        let err = ResponseError::from_body(StatusCode::NOT_FOUND, r#"{"error":"Not found"}"#, None);
        assert_eq!(err.message, "Not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_response_error_plain_text_body() {
        let err = ResponseError::from_body(
            StatusCode::BAD_GATEWAY,
            "upstream unavailable\n",
            Some("hdr-req".to_string()),
        );
        assert_eq!(err.message, "upstream unavailable");
        assert_eq!(err.request_id.as_deref(), Some("hdr-req"));
    }

    #[test]
    fn test_response_error_empty_body() {
        let err = ResponseError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "", None);
        assert_eq!(err.message, "Internal Server Error");
        assert_eq!(err.code, Some(500));
    }

    #[test]
    fn test_response_error_retry_after() {
        let err = ResponseError::from_body(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"message":"rate limited","retryAfter":30}"#,
            None,
        );
        assert_eq!(err.retry_after, Some(30));
    }

    #[test]
    fn test_response_error_nested_error_object() {
        let err = ResponseError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"boom"}}"#,
            None,
        );
        assert_eq!(err.message, "boom");

        let err = ResponseError::from_body(StatusCode::BAD_GATEWAY, r#"{"error":{}}"#, None);
        assert_eq!(err.message, "Bad Gateway");
    }

    #[test]
    fn test_error_message() {
        let err = Error::from(ResponseError::new("table not found", Some(404)));
        assert_eq!(err.message(), "table not found");
        assert!(err.response_error().is_some());

        let err = Error::from(ValidationErr::InvalidProjectRef(
            "project ref cannot be empty".to_string(),
        ));
        assert_eq!(
            err.message(),
            "Invalid project ref: project ref cannot be empty"
        );
        assert!(err.response_error().is_none());
    }
}
