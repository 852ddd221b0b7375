// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-period refresh scheduling.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::client::LockDevice;
use crate::state::ViewStore;

/// Drives periodic refresh cycles against a [`ViewStore`].
///
/// The scheduler has two states. It is *active* from [`PollScheduler::start`]
/// until [`PollScheduler::stop`] (or drop), and *idle* afterwards. While
/// active, one refresh cycle runs immediately and then once per period; a
/// cycle is the image refresh and the lock-state refresh issued as two
/// independent tasks, so neither waits for the other and a slow fetch never
/// delays the cadence.
///
/// Persistent fetch failures do not stop the scheduler; it keeps firing at
/// the fixed period until torn down. Teardown deterministically cancels the
/// ticker, so no further cycle is issued, while requests already in flight
/// run to completion.
///
/// Dropping the scheduler tears it down, which ties its lifetime to the
/// scope that created it — typically the lifetime of the rendering surface.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use doorlock_lib::client::HttpClient;
/// use doorlock_lib::poll::PollScheduler;
/// use doorlock_lib::state::ViewStore;
///
/// # async fn example() -> doorlock_lib::Result<()> {
/// let store = Arc::new(ViewStore::new(HttpClient::new("192.168.1.12:3000")?));
/// let scheduler = PollScheduler::start(Arc::clone(&store));
///
/// // ... surface is alive, store keeps refreshing ...
///
/// scheduler.stop();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PollScheduler {
    ticker: JoinHandle<()>,
}

impl PollScheduler {
    /// The default refresh period.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

    /// Starts polling at [`Self::DEFAULT_PERIOD`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<D>(store: Arc<ViewStore<D>>) -> Self
    where
        D: LockDevice + 'static,
    {
        Self::start_with_period(store, Self::DEFAULT_PERIOD)
    }

    /// Starts polling at a custom period.
    ///
    /// The first refresh cycle fires immediately, before the first period
    /// elapses. Must be called from within a Tokio runtime.
    pub fn start_with_period<D>(store: Arc<ViewStore<D>>, period: Duration) -> Self
    where
        D: LockDevice + 'static,
    {
        let ticker = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            loop {
                ticks.tick().await;

                tracing::debug!("poll cycle");

                let image_store = Arc::clone(&store);
                tokio::spawn(async move { image_store.refresh_image().await });

                let lock_store = Arc::clone(&store);
                tokio::spawn(async move { lock_store.refresh_lock_state().await });
            }
        });

        Self { ticker }
    }

    /// Returns `true` while the scheduler is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.ticker.is_finished()
    }

    /// Stops the scheduler.
    ///
    /// No refresh cycle is issued after this returns.
    pub fn stop(self) {
        self.ticker.abort();
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}
