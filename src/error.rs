// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the door-lock library.
//!
//! Transport failures (network, non-2xx status, body decode) are collapsed
//! into a single [`TransportError`] kind: the store treats every variant the
//! same way, logging it and keeping the previous state. [`ValueError`] covers
//! local validation of wire tokens.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the device.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors raised by the device client.
///
/// Network failure, a non-2xx response, and a malformed body are one error
/// kind by contract: callers never branch on the variant, they only record
/// the failure and retain the previous state.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("HTTP {code} - {reason}")]
    Status {
        /// The status code of the response.
        code: u16,
        /// The canonical reason phrase, or `"Unknown"`.
        reason: String,
    },

    /// JSON body decoding failed.
    #[error("JSON decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body was not in the expected format.
    #[error("unexpected response body: {0}")]
    Body(String),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid lock state token was provided.
    #[error("invalid lock state: {0}")]
    InvalidLockState(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = TransportError::Status {
            code: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502 - Bad Gateway");
    }

    #[test]
    fn body_error_display() {
        let err = TransportError::Body("latch".to_string());
        assert_eq!(err.to_string(), "unexpected response body: latch");
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidLockState("ajar".to_string());
        assert_eq!(err.to_string(), "invalid lock state: ajar");
    }

    #[test]
    fn error_from_transport_error() {
        let transport = TransportError::Body("?".to_string());
        let err: Error = transport.into();
        assert!(matches!(err, Error::Transport(TransportError::Body(_))));
    }

    #[test]
    fn error_from_value_error() {
        let value = ValueError::InvalidLockState("ajar".to_string());
        let err: Error = value.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidLockState(_))));
    }
}
