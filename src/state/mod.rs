// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View state management.
//!
//! [`ViewState`] holds the three observable fields (snapshot image, lock
//! state, loading flag). [`ViewStore`] owns the state together with a device
//! client and exposes the refresh and toggle operations; every mutation is
//! published on a watch channel so a rendering surface can follow along.
//!
//! # Examples
//!
//! ```no_run
//! use doorlock_lib::client::HttpClient;
//! use doorlock_lib::state::ViewStore;
//!
//! # async fn example() -> doorlock_lib::Result<()> {
//! let store = ViewStore::new(HttpClient::new("192.168.1.12:3000")?);
//! store.refresh_lock_state().await;
//! println!("door is {}", store.state().lock_state());
//! # Ok(())
//! # }
//! ```

mod store;
mod view_state;

pub use store::ViewStore;
pub use view_state::ViewState;
