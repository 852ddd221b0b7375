// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot image payload type.

use std::fmt;

use serde::Deserialize;

/// A camera snapshot as returned by the device.
///
/// The payload is the base64-encoded PNG text exactly as it appeared on the
/// wire. It carries no metadata; its identity is "whatever the device
/// returned most recently", and it is replaced wholesale on every successful
/// fetch.
///
/// # Examples
///
/// ```
/// use doorlock_lib::types::SnapshotImage;
///
/// let image = SnapshotImage::new("iVBORw0KGgo=");
/// assert_eq!(image.as_base64(), "iVBORw0KGgo=");
/// assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SnapshotImage(String);

impl SnapshotImage {
    /// Creates a snapshot from a base64 payload.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    /// Returns the base64 payload.
    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// Returns the payload as a `data:` URI suitable for an image widget.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.0)
    }

    /// Consumes the snapshot, returning the raw payload.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Payloads run to hundreds of kilobytes; log the length, not the bytes.
impl fmt::Debug for SnapshotImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SnapshotImage")
            .field(&format_args!("{} base64 chars", self.0.len()))
            .finish()
    }
}
