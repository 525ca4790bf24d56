// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `PoolSync` library.
//!
//! Read-path failures (missing values, non-numeric state) are never surfaced
//! through these types; they degrade to `None` at the call site. The errors
//! here cover the write path and the underlying HTTP transport.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while writing a control value.
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Errors related to HTTP communication with the `PoolSync` API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the API failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Authentication was rejected by the API.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to writing a control value.
///
/// Write failures are always surfaced to the caller; this layer performs no
/// retries.
#[derive(Debug, Error)]
pub enum WriteError {
    /// No credential is available on the coordinator; the network call was
    /// not attempted.
    #[error("credential not available to set value")]
    CredentialUnavailable,

    /// The update call failed for a reason outside this crate's own error
    /// vocabulary.
    #[error("failed to set value: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    /// Wraps a foreign error as a write failure.
    ///
    /// Errors already in this crate's vocabulary should convert through
    /// their own `From` impls instead so they surface unwrapped.
    fn from(cause: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Write(WriteError::Failed(cause))
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
