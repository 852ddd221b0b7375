// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types shared across the library.
//!
//! # Examples
//!
//! ```
//! use doorlock_lib::types::LockState;
//!
//! let state = LockState::Locked;
//! assert_eq!(state.as_str(), "lock");
//! assert_eq!(state.toggled(), LockState::Unlocked);
//! ```

mod lock_state;
mod snapshot;

pub use lock_state::LockState;
pub use snapshot::SnapshotImage;
