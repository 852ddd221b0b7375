// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The view-state store.

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::client::LockDevice;
use crate::state::ViewState;

/// Owns the view state and the device client.
///
/// Every operation follows the same failure policy: a device failure is
/// logged and swallowed, and the affected field keeps its previous value.
/// The end user sees no error indicator, only stale data.
///
/// Overlapping operations are not coordinated; whichever response resolves
/// last wins on the store fields. All mutations happen between await points,
/// so the lock is never held across a suspension.
pub struct ViewStore<D> {
    client: D,
    state: RwLock<ViewState>,
    state_tx: watch::Sender<ViewState>,
}

impl<D: LockDevice> ViewStore<D> {
    /// Creates a store with the default view state.
    pub fn new(client: D) -> Self {
        let state = ViewState::default();
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            client,
            state: RwLock::new(state),
            state_tx,
        }
    }

    /// Returns the device client.
    pub fn client(&self) -> &D {
        &self.client
    }

    /// Returns a snapshot of the current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    /// Creates a watch receiver that observes every state mutation.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Mutates the state and notifies watchers.
    fn update(&self, mutate: impl FnOnce(&mut ViewState)) {
        let mut state = self.state.write();
        mutate(&mut state);
        let _ = self.state_tx.send(state.clone());
    }

    /// Refreshes the snapshot image.
    ///
    /// The loading flag is raised for the duration of the fetch and cleared
    /// on every exit path, so a failed fetch never leaves the spinner stuck.
    /// On failure the previously cached image is kept.
    pub async fn refresh_image(&self) {
        self.update(|state| state.loading = true);

        match self.client.fetch_image().await {
            Ok(image) => self.update(|state| {
                state.image = Some(image);
                state.loading = false;
            }),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch image");
                self.update(|state| state.loading = false);
            }
        }
    }

    /// Refreshes the lock state from the device.
    ///
    /// Does not touch the loading flag; that flag is scoped to image
    /// fetches. On failure the previous lock state is kept.
    pub async fn refresh_lock_state(&self) {
        match self.client.fetch_lock_state().await {
            Ok(lock_state) => self.update(|state| state.lock_state = lock_state),
            Err(err) => tracing::warn!(error = %err, "failed to fetch lock state"),
        }
    }

    /// Commands the device into the opposite of the current lock state.
    ///
    /// The local state is updated as soon as the write succeeds, without a
    /// confirming re-read. If the write fails, the local state is left at
    /// its prior value.
    pub async fn toggle_lock(&self) {
        let next = self.state.read().lock_state.toggled();

        match self.client.set_lock_state(next).await {
            Ok(()) => self.update(|state| state.lock_state = next),
            Err(err) => tracing::warn!(error = %err, "failed to toggle lock state"),
        }
    }
}
