// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the remote door-lock device.
//!
//! The device exposes three operations over plain, unauthenticated HTTP:
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | fetch snapshot | `GET /image` | JSON `{"image": "<base64 PNG>"}` |
//! | fetch lock state | `GET /lock-state` | bare `"lock"` or `"unlock"` |
//! | set lock state | `POST /toggle-lock` `{"state": ...}` | ignored |
//!
//! There are no retries, no backoff, and no timeout beyond whatever the
//! transport default is. Each call is an independent stateless request.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::types::{LockState, SnapshotImage};

/// Operations the remote door-lock device exposes.
///
/// This is the seam between the view-state store and the transport. The
/// production implementation is [`HttpClient`]; tests substitute scripted
/// fakes. All three operations share one failure policy: the caller catches
/// the error, keeps its previous state, and only records the failure.
pub trait LockDevice: Send + Sync {
    /// Fetches the current camera snapshot.
    fn fetch_image(&self) -> impl Future<Output = Result<SnapshotImage, TransportError>> + Send;

    /// Fetches the current lock state.
    fn fetch_lock_state(&self) -> impl Future<Output = Result<LockState, TransportError>> + Send;

    /// Commands the device into the given lock state.
    ///
    /// The response body is ignored beyond success or failure.
    fn set_lock_state(
        &self,
        next: LockState,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

// ============================================================================
// DeviceConfig - Connection parameters for the device
// ============================================================================

/// Configuration for the HTTP door-lock device.
///
/// # Examples
///
/// ```
/// use doorlock_lib::client::DeviceConfig;
/// use std::time::Duration;
///
/// let config = DeviceConfig::new("192.168.1.12");
/// assert_eq!(config.base_url(), "http://192.168.1.12:3000");
///
/// let config = DeviceConfig::new("192.168.1.12")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl DeviceConfig {
    /// Default device port.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a request timeout.
    ///
    /// When unset, requests run with the transport default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
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

    /// Returns the timeout if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let port_suffix = if self.port == 80 {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!("http://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        let base_url = self.base_url();

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

// ============================================================================
// HttpClient - Production device client
// ============================================================================

/// Body of the snapshot response.
#[derive(Debug, Deserialize)]
struct ImageResponse {
    image: SnapshotImage,
}

/// Body of the toggle request.
#[derive(Debug, Serialize)]
struct ToggleRequest {
    state: LockState,
}

/// HTTP client for a door-lock device at a fixed base address.
///
/// # Examples
///
/// ```no_run
/// use doorlock_lib::client::{HttpClient, LockDevice};
///
/// # async fn example() -> doorlock_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.12:3000")?;
/// let state = client.fetch_lock_state().await?;
/// println!("door is {state}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new client for the specified host.
    ///
    /// The host may be a bare `host[:port]` pair or a full `http://` URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        let host = host.into();
        let base_url = if host.starts_with("http://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder().build().map_err(TransportError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rejects non-success responses.
    fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            })
        }
    }
}

impl LockDevice for HttpClient {
    async fn fetch_image(&self) -> Result<SnapshotImage, TransportError> {
        let url = format!("{}/image", self.base_url);

        tracing::debug!(url = %url, "fetching snapshot image");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let response = Self::ensure_success(response)?;

        let body = response.text().await.map_err(TransportError::Http)?;
        let parsed: ImageResponse =
            serde_json::from_str(&body).map_err(TransportError::Decode)?;

        tracing::debug!(payload_len = parsed.image.as_base64().len(), "received snapshot");

        Ok(parsed.image)
    }

    async fn fetch_lock_state(&self) -> Result<LockState, TransportError> {
        let url = format!("{}/lock-state", self.base_url);

        tracing::debug!(url = %url, "fetching lock state");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let response = Self::ensure_success(response)?;

        let body = response.text().await.map_err(TransportError::Http)?;
        let token = body.trim();

        token
            .parse::<LockState>()
            .map_err(|_| TransportError::Body(token.to_string()))
    }

    async fn set_lock_state(&self, next: LockState) -> Result<(), TransportError> {
        let url = format!("{}/toggle-lock", self.base_url);

        tracing::debug!(url = %url, state = %next, "setting lock state");

        let response = self
            .client
            .post(&url)
            .json(&ToggleRequest { state: next })
            .send()
            .await
            .map_err(TransportError::Http)?;
        Self::ensure_success(response)?;

        Ok(())
    }
}
