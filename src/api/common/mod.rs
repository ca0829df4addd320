//
//  testrail-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the TestRail Client
//!
//! This module provides the types shared by every layer of the API client:
//! the error taxonomy, the uniform result wrapper returned by facade
//! operations, and the pagination envelope.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`RequestResult`] - `{succeeded, value, error}` wrapper returned by every
//!   collection, mutation, delete and close operation
//! - [`JsonObject`] - Alias for a JSON object map, used for request bodies and
//!   caller-supplied custom fields
//! - Pagination types (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use testrail_cli::api::common::{ApiError, RequestResult};
//!
//! let result: RequestResult<Vec<u64>> =
//!     RequestResult::failure(ApiError::InvalidArgument("name must not be blank".into()));
//!
//! assert!(!result.is_success());
//! assert!(result.value().is_empty());
//! assert!(matches!(result.error(), Some(ApiError::InvalidArgument(_))));
//! ```

use thiserror::Error;

mod pagination;

pub use pagination::*;

/// A JSON object as produced by `serde_json`.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Unified error type for all TestRail API operations.
///
/// Every failure a facade operation can report is one of these variants.
/// The type is `Clone` so that results can be cached and shared; transport
/// faults are therefore captured as their rendered message rather than the
/// underlying `reqwest::Error`.
///
/// # Variants
///
/// | Variant | Raised | Network call made |
/// |---------|--------|-------------------|
/// | `InvalidArgument` | A required argument is blank or missing | No |
/// | `Precondition` | A domain check failed (e.g. unknown case ids) | Only auxiliary reads |
/// | `Http` | The server answered with a status other than 200 | Yes |
/// | `Transport` | The request could not be completed | Attempted |
/// | `Deserialization` | A response body did not match the expected shape | Yes |
/// | `Serialization` | A request body could not be encoded | No |
/// | `InvalidTimespan` | A duration string could not be parsed | No |
/// | `NotExecuted` | A default-constructed result was inspected | No |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A required argument was blank or missing. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A domain precondition did not hold, so the mutating call was skipped.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The server returned a status code other than 200.
    ///
    /// `body` holds the raw response body for debugging; use
    /// [`ApiError::server_message`] to extract TestRail's `error` field.
    #[error("API error ({status}): {body}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request could not be completed (connection refused, DNS failure,
    /// TLS error, body read failure...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body could not be parsed into the expected type.
    #[error("Failed to parse response: {message}")]
    Deserialization {
        /// Parser message.
        message: String,
        /// Raw body that failed to parse.
        body: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(String),

    /// A compact duration string such as `"1d 2h"` was malformed.
    #[error("Invalid timespan: {0}")]
    InvalidTimespan(String),

    /// The result was never produced by an executed request.
    #[error("No request was executed")]
    NotExecuted,
}

impl ApiError {
    /// Extracts the human readable message TestRail places in error bodies.
    ///
    /// TestRail reports failures as `{"error": "Field :title is a required field."}`.
    /// Returns `None` for non-HTTP errors or bodies that carry no such field.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Http { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|json| json.get("error").and_then(|m| m.as_str()).map(str::to_string)),
            _ => None,
        }
    }

    /// Returns `true` if the requested record does not exist.
    ///
    /// TestRail answers lookups of unknown ids with 400 and a message such as
    /// `Field :run_id is not a valid test run.`; a plain 404 counts as well.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Http { status: 404, .. } => true,
            Self::Http { status: 400, .. } => self
                .server_message()
                .is_some_and(|message| message.contains("is not a valid")),
            _ => false,
        }
    }

    /// Returns `true` if the error was raised before any network traffic.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::Serialization(_) | Self::InvalidTimespan(_)
        )
    }
}

/// Uniform outcome of a facade operation.
///
/// `RequestResult` carries a success flag, the produced value and, on failure,
/// the error that caused it. The value is only meaningful when
/// [`is_success`](Self::is_success) returns `true`; a failed result always
/// holds `T::default()`.
///
/// The two specializations used throughout the client are:
///
/// - `RequestResult<String>` - the raw body of a delete or close call
/// - `RequestResult<Option<u64>>` - the id of a created or updated record;
///   `Ok` with `None` means the write succeeded but the response did not
///   reveal an id
///
/// # Example
///
/// ```rust
/// use testrail_cli::api::common::RequestResult;
///
/// let created: RequestResult<Option<u64>> = RequestResult::success(Some(42));
/// assert!(created.is_success());
/// assert_eq!(created.into_result(), Ok(Some(42)));
///
/// let pending: RequestResult<String> = RequestResult::default();
/// assert!(!pending.is_success());
/// assert!(pending.error().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestResult<T> {
    succeeded: bool,
    value: T,
    error: Option<ApiError>,
}

impl<T> RequestResult<T> {
    /// Creates a successful result holding `value`.
    pub fn success(value: T) -> Self {
        Self {
            succeeded: true,
            value,
            error: None,
        }
    }

    /// Creates a failed result holding `T::default()` and `error`.
    pub fn failure(error: ApiError) -> Self
    where
        T: Default,
    {
        Self {
            succeeded: false,
            value: T::default(),
            error: Some(error),
        }
    }

    /// Returns `true` if the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    /// Borrows the value. Only meaningful when the result succeeded.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the result and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the failure detail, if any.
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Converts into a standard `Result` so callers can use `?`.
    ///
    /// A default-constructed (never executed) result converts to
    /// [`ApiError::NotExecuted`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.succeeded {
            Ok(self.value)
        } else {
            Err(self.error.unwrap_or(ApiError::NotExecuted))
        }
    }

    /// Maps the value of a successful result, propagating failures unchanged.
    pub fn map<U, F>(self, f: F) -> RequestResult<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.succeeded {
            RequestResult::success(f(self.value))
        } else {
            RequestResult {
                succeeded: false,
                value: U::default(),
                error: self.error,
            }
        }
    }

    /// Chains another fallible step after a successful result.
    pub fn and_then<U, F>(self, f: F) -> RequestResult<U>
    where
        U: Default,
        F: FnOnce(T) -> RequestResult<U>,
    {
        if self.succeeded {
            f(self.value)
        } else {
            RequestResult {
                succeeded: false,
                value: U::default(),
                error: self.error,
            }
        }
    }
}

impl<T: Default> From<Result<T, ApiError>> for RequestResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_executed() {
        let result: RequestResult<Option<u64>> = RequestResult::default();
        assert!(!result.is_success());
        assert_eq!(*result.value(), None);
        assert!(result.error().is_none());
        assert_eq!(result.into_result(), Err(ApiError::NotExecuted));
    }

    #[test]
    fn test_failure_holds_default_value() {
        let result: RequestResult<String> =
            RequestResult::failure(ApiError::Transport("connection refused".into()));
        assert!(!result.is_success());
        assert_eq!(result.value(), "");
        assert!(matches!(result.error(), Some(ApiError::Transport(_))));
    }

    #[test]
    fn test_map_propagates_failure() {
        let failed: RequestResult<String> = RequestResult::failure(ApiError::Http {
            status: 500,
            body: "boom".into(),
        });
        let mapped = failed.map(|body| body.len());
        assert!(!mapped.is_success());
        assert_eq!(*mapped.value(), 0);
        assert!(matches!(mapped.error(), Some(ApiError::Http { status: 500, .. })));

        let ok = RequestResult::success("abc".to_string()).map(|body| body.len());
        assert_eq!(ok.into_result(), Ok(3));
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"error":"Field :title is a required field."}"#.into(),
        };
        assert_eq!(
            err.server_message().as_deref(),
            Some("Field :title is a required field.")
        );

        let plain = ApiError::Http {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert!(plain.server_message().is_none());
    }

    #[test]
    fn test_is_not_found() {
        let missing = ApiError::Http {
            status: 400,
            body: r#"{"error":"Field :run_id is not a valid test run."}"#.into(),
        };
        let required = ApiError::Http {
            status: 400,
            body: r#"{"error":"Field :title is a required field."}"#.into(),
        };
        let gone = ApiError::Http {
            status: 404,
            body: String::new(),
        };
        let denied = ApiError::Http {
            status: 403,
            body: r#"{"error":"You are not allowed to view this project."}"#.into(),
        };

        assert!(missing.is_not_found());
        assert!(gone.is_not_found());
        assert!(!required.is_not_found());
        assert!(!denied.is_not_found());
        assert!(!ApiError::Transport("connection refused".into()).is_not_found());
    }

    #[test]
    fn test_is_local() {
        assert!(ApiError::InvalidArgument("name must not be blank".into()).is_local());
        assert!(ApiError::InvalidTimespan("3x".into()).is_local());
        assert!(!ApiError::Precondition("no cases".into()).is_local());
        assert!(!ApiError::Transport("timeout".into()).is_local());
    }

    #[test]
    fn test_from_result() {
        let ok: RequestResult<u64> = Ok(7).into();
        assert!(ok.is_success());
        let err: RequestResult<u64> = Err(ApiError::Precondition("nope".into())).into();
        assert!(!err.is_success());
        assert_eq!(*err.value(), 0);
    }
}
