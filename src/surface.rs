// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation helpers for a rendering surface.
//!
//! The surface itself lives outside this crate; any widget toolkit that can
//! display an image, a text label, and two tappable controls can consume
//! these helpers. The surface observes [`ViewStore::watch`] and, per state,
//! renders the title, the image pane, a refresh control wired to
//! [`ViewStore::refresh_image`], and a toggle control wired to
//! [`ViewStore::toggle_lock`].
//!
//! [`ViewStore::watch`]: crate::state::ViewStore::watch
//! [`ViewStore::refresh_image`]: crate::state::ViewStore::refresh_image
//! [`ViewStore::toggle_lock`]: crate::state::ViewStore::toggle_lock

use crate::state::ViewState;
use crate::types::{LockState, SnapshotImage};

/// Screen title.
pub const TITLE: &str = "Smart Door Lock";

/// Text shown when no snapshot has ever been fetched.
pub const PLACEHOLDER_TEXT: &str = "No Image Available";

/// Label of the manual refresh control.
pub const REFRESH_LABEL: &str = "Refresh Image";

/// What the image area of the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePane<'a> {
    /// An image fetch is in flight; show a spinner.
    ///
    /// The spinner takes precedence over a cached snapshot.
    Spinner,
    /// Show the cached snapshot.
    Snapshot(&'a SnapshotImage),
    /// Nothing fetched yet; show [`PLACEHOLDER_TEXT`].
    Placeholder,
}

impl<'a> ImagePane<'a> {
    /// Selects the pane for the given view state.
    #[must_use]
    pub fn from_view(view: &'a ViewState) -> Self {
        if view.loading() {
            Self::Spinner
        } else {
            match view.image() {
                Some(image) => Self::Snapshot(image),
                None => Self::Placeholder,
            }
        }
    }
}

/// Label and color of the lock toggle control.
///
/// The two visual styles are mutually exclusive, one per lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    label: &'static str,
    color: &'static str,
}

impl ToggleControl {
    /// Returns the control style for the given lock state.
    #[must_use]
    pub const fn for_state(state: LockState) -> Self {
        match state {
            LockState::Locked => Self {
                label: "Locked (tap to unlock)",
                color: "#d9534f",
            },
            LockState::Unlocked => Self {
                label: "Unlocked (tap to lock)",
                color: "#5cb85c",
            },
        }
    }

    /// Returns the control label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the control background color as a hex triplet.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.color
    }
}
