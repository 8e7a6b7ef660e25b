// ABOUTME: Error taxonomy for activity API calls and credential persistence
// ABOUTME: ApiError (network/validation/not-found) and non-fatal PersistenceError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! # Unified Error Handling
//!
//! Two error families cover the whole core:
//!
//! - [`ApiError`] for Repository Contract failures. These surface to the user
//!   as a dismissible message and are never retried automatically; retry is
//!   only via explicit user re-invocation.
//! - [`PersistenceError`] for credential snapshot read/write failures. These
//!   are logged and suppressed by the session layer because the in-memory
//!   credential remains valid for the current process lifetime.
//!
//! The aggregation engine raises no errors by design; it is total over any
//! well-typed input.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for Repository Contract operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced at the activity API boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or server-side (5xx) error
    #[error("network failure talking to the activity API")]
    Network {
        /// Underlying HTTP client error
        #[from]
        source: reqwest::Error,
    },

    /// Malformed submission rejected by the server (4xx)
    #[error("activity API rejected the request ({status}): {message}")]
    Validation {
        /// HTTP status returned by the server
        status: u16,
        /// Server-provided rejection message, when readable
        message: String,
    },

    /// Detail lookup for a nonexistent resource
    #[error("{resource} not found")]
    NotFound {
        /// Description of the missing resource (e.g. `activity 42`)
        resource: String,
    },
}

impl ApiError {
    /// Validation error raised before any network call, for submissions that
    /// cannot be formed from the current session (e.g. no usable user id)
    #[must_use]
    pub fn invalid_submission(message: impl Into<String>) -> Self {
        Self::Validation {
            status: 400,
            message: message.into(),
        }
    }
}

/// Errors from the durable credential snapshot store.
///
/// Non-fatal by policy: the session layer logs these and continues with the
/// in-memory credential.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem access to the snapshot directory failed
    #[error("credential store I/O failed at {path}")]
    Io {
        /// Path that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A snapshot entry could not be serialized or deserialized
    #[error("credential store serialization failed for key '{key}'")]
    Serialization {
        /// Storage key whose value was malformed
        key: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
