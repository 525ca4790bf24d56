// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API client for the `PoolSync` service.
//!
//! Controls talk to the service through the [`ApiClient`] trait; the
//! [`HttpClient`] implementation covers the real HTTP API, and tests can
//! substitute their own.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::coordinator::Credential;
use crate::error::Error;

/// Response from a config patch.
#[derive(Debug, Clone)]
pub struct PatchResponse {
    /// The raw JSON response body.
    body: String,
}

impl PatchResponse {
    /// Creates a new patch response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Trait for clients that can push config updates to the `PoolSync` API.
///
/// The error type must convert into this crate's [`Error`]. Errors already
/// in the crate's vocabulary (such as
/// [`ProtocolError`](crate::error::ProtocolError)) pass through a control
/// write unwrapped; foreign error types can convert through the boxed-error
/// route, which wraps them as
/// [`WriteError::Failed`](crate::error::WriteError::Failed).
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// Error type produced by a failed patch.
    type Error: Into<Error>;

    /// Patches one config value on one device.
    ///
    /// # Arguments
    ///
    /// * `device_id` - Id of the device as assigned by the hub
    /// * `key_id` - Name of the config key to update
    /// * `value` - New value; the API accepts only integers
    /// * `credential` - Credential authorizing the write
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the request fails or is rejected.
    async fn patch(
        &self,
        device_id: &str,
        key_id: &str,
        value: i64,
        credential: &Credential,
    ) -> Result<PatchResponse, Self::Error>;
}
