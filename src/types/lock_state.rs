// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock state type for the door-lock device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The commanded state of the physical door lock.
///
/// The two values are mutually exclusive. On the wire the device uses the
/// literal tokens `"lock"` and `"unlock"`, both in the `GET /lock-state`
/// response body and in the `POST /toggle-lock` request body.
///
/// # Examples
///
/// ```
/// use doorlock_lib::types::LockState;
///
/// let locked = LockState::Locked;
/// assert_eq!(locked.as_str(), "lock");
/// assert_eq!(locked.toggled(), LockState::Unlocked);
/// assert_eq!("unlock".parse::<LockState>().unwrap(), LockState::Unlocked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LockState {
    /// The door is commanded locked.
    ///
    /// This is the default: the client assumes a locked door until the
    /// first state read says otherwise.
    #[default]
    #[serde(rename = "lock")]
    Locked,
    /// The door is commanded unlocked.
    #[serde(rename = "unlock")]
    Unlocked,
}

impl LockState {
    /// Returns the wire token for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "lock",
            Self::Unlocked => "unlock",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }

    /// Returns `true` if the door is commanded locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LockState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lock" => Ok(Self::Locked),
            "unlock" => Ok(Self::Unlocked),
            _ => Err(ValueError::InvalidLockState(s.to_string())),
        }
    }
}
