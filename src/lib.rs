// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `doorlock_lib` - A Rust library to monitor and control a smart door lock.
//!
//! The device exposes a snapshot camera and a lock actuator over plain,
//! unauthenticated HTTP. This library wraps the device's three operations as
//! typed async calls and layers the client-side behavior a control surface
//! needs on top: an observable view-state store and a fixed-period poll
//! scheduler.
//!
//! # What it provides
//!
//! - **Device client**: fetch the camera snapshot, fetch the lock state,
//!   command a new lock state
//! - **View state**: cached snapshot, lock state, and loading flag behind a
//!   watch channel any surface can observe
//! - **Polling**: an immediate refresh plus one cycle every 10 seconds,
//!   torn down deterministically with the owning scope
//!
//! Device failures are logged and swallowed; the store keeps its previous
//! state and the surface simply shows stale data. There are no retries and
//! no authentication.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use doorlock_lib::client::HttpClient;
//! use doorlock_lib::poll::PollScheduler;
//! use doorlock_lib::state::ViewStore;
//! use doorlock_lib::surface::{ImagePane, ToggleControl};
//!
//! #[tokio::main]
//! async fn main() -> doorlock_lib::Result<()> {
//!     let client = HttpClient::new("192.168.1.12:3000")?;
//!     let store = Arc::new(ViewStore::new(client));
//!
//!     // Refresh on a fixed period while the surface is alive.
//!     let scheduler = PollScheduler::start(Arc::clone(&store));
//!
//!     // A surface observes the store and renders each state.
//!     let mut updates = store.watch();
//!     while updates.changed().await.is_ok() {
//!         let view = updates.borrow_and_update().clone();
//!         let _pane = ImagePane::from_view(&view);
//!         let _toggle = ToggleControl::for_state(view.lock_state());
//!         // ... draw ...
//!     }
//!
//!     scheduler.stop();
//!     Ok(())
//! }
//! ```
//!
//! ## Manual operations
//!
//! User taps map directly onto store operations:
//!
//! ```no_run
//! # use doorlock_lib::client::HttpClient;
//! # use doorlock_lib::state::ViewStore;
//! # async fn example() -> doorlock_lib::Result<()> {
//! # let store = ViewStore::new(HttpClient::new("192.168.1.12:3000")?);
//! store.refresh_image().await; // the refresh control
//! store.toggle_lock().await;   // the lock toggle
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod poll;
pub mod state;
pub mod surface;
pub mod types;

pub use client::{DeviceConfig, HttpClient, LockDevice};
pub use error::{Error, Result, TransportError, ValueError};
pub use poll::PollScheduler;
pub use state::{ViewState, ViewStore};
pub use surface::{ImagePane, ToggleControl};
pub use types::{LockState, SnapshotImage};
