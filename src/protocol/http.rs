// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the `PoolSync` API client.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::coordinator::Credential;
use crate::error::ProtocolError;
use crate::protocol::{ApiClient, PatchResponse};

/// Configuration for the `PoolSync` HTTP API.
///
/// # Examples
///
/// ```
/// use poolsync_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.42");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.42")
///     .with_port(8443)
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

/// HTTP client for the `PoolSync` API.
///
/// Stateless; each patch is an independent request against
/// `/api/device/{deviceId}/{keyId}`.
///
/// # Examples
///
/// ```no_run
/// use poolsync_lib::coordinator::Credential;
/// use poolsync_lib::protocol::{ApiClient, HttpClient};
///
/// # async fn example() -> poolsync_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.42")?;
/// let credential = Credential::new("hunter2");
/// client.patch("5", "chlorOutput", 42, &credential).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// Hosts without a scheme default to `http://`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(HttpConfig::DEFAULT_TIMEOUT)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a patch request.
    fn build_url(&self, device_id: &str, key_id: &str, credential: &Credential) -> String {
        format!(
            "{}/api/device/{}/{}?password={}",
            self.base_url,
            urlencoding::encode(device_id),
            urlencoding::encode(key_id),
            urlencoding::encode(credential.expose()),
        )
    }
}

impl ApiClient for HttpClient {
    type Error = ProtocolError;

    async fn patch(
        &self,
        device_id: &str,
        key_id: &str,
        value: i64,
        credential: &Credential,
    ) -> Result<PatchResponse, ProtocolError> {
        let url = self.build_url(device_id, key_id, credential);

        tracing::debug!(device_id, key_id, value, "Sending patch request");

        let response = self
            .client
            .patch(&url)
            .json(&json!({ "value": value }))
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received patch response");

        Ok(PatchResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_encodes_segments() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        let url = client.build_url("5", "chlorOutput", &Credential::new("p@ss word"));
        assert_eq!(
            url,
            "http://192.168.1.42/api/device/5/chlorOutput?password=p%40ss%20word"
        );
    }

    #[test]
    fn new_keeps_explicit_scheme() {
        let client = HttpClient::new("https://192.168.1.42").unwrap();
        assert_eq!(client.base_url(), "https://192.168.1.42");
    }

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_with_https() {
        let config = HttpConfig::new("192.168.1.42").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443);
        assert_eq!(config.base_url(), "https://192.168.1.42");
    }

    #[test]
    fn config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.42").with_port(8443).with_https();
        assert_eq!(config.port(), 8443);
        assert_eq!(config.base_url(), "https://192.168.1.42:8443");
    }

    #[test]
    fn config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.42").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.42:8080");
    }

    #[test]
    fn config_into_client() {
        let config = HttpConfig::new("192.168.1.42").with_timeout(Duration::from_secs(5));
        let client = config.into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.42");
    }
}
