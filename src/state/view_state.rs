// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The observable view state.

use crate::types::{LockState, SnapshotImage};

/// Everything a rendering surface needs to draw the screen.
///
/// The image and the lock state are fetched independently and fail
/// independently; neither blocks or corrupts the other. The loading flag is
/// scoped to image fetches only.
///
/// The default state is no image, a locked door, and no fetch in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Payload of the most recent successful snapshot fetch.
    pub(crate) image: Option<SnapshotImage>,
    /// Lock state as last confirmed by the device, or as last commanded.
    pub(crate) lock_state: LockState,
    /// True only while an image fetch is in flight.
    pub(crate) loading: bool,
}

impl ViewState {
    /// Returns the cached snapshot, if any fetch has ever succeeded.
    #[must_use]
    pub fn image(&self) -> Option<&SnapshotImage> {
        self.image.as_ref()
    }

    /// Returns the current lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock_state
    }

    /// Returns `true` while an image fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = ViewState::default();
        assert!(state.image().is_none());
        assert_eq!(state.lock_state(), LockState::Locked);
        assert!(!state.loading());
    }
}
