//! Application state shared across all commands.
//!
//! A [`Workspace`] bundles the entity store, the roster, the notification
//! sink and the dashboard view state.  Cloning shares the underlying
//! storage, so command modules can each hold a handle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use campfire_core::{DashboardView, Presence, Roster};
use campfire_store::{EntityStore, Latency};

use crate::config::AppConfig;
use crate::notify::Notifier;

/// Lifecycle of the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// No load attempted yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The last committed load succeeded.
    Ready(DashboardView),
    /// The last committed load failed.  Persistent until an explicit
    /// reload; there is no automatic retry and no partial rendering.
    Failed(String),
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: AppConfig,
    pub store: EntityStore,
    /// Explicit presence input for the team view (no random status).
    pub roster: Roster,
    pub notifier: Notifier,

    dashboard: Arc<Mutex<DashboardState>>,
    load_generation: Arc<AtomicU64>,
}

impl Workspace {
    /// A workspace over the given store.
    pub fn with_store(config: AppConfig, store: EntityStore, roster: Roster) -> Self {
        Self {
            config,
            store,
            roster,
            notifier: Notifier::new(),
            dashboard: Arc::new(Mutex::new(DashboardState::Idle)),
            load_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A workspace over the bundled demo fixtures, with the signed-in user
    /// marked online.
    pub fn seeded(config: AppConfig) -> Self {
        let latency = if config.simulate_latency {
            Latency::simulated()
        } else {
            Latency::none()
        };
        let mut roster = Roster::new();
        roster.set(config.current_user.clone(), Presence::Online);
        Self::with_store(config, EntityStore::seeded(latency), roster)
    }

    /// Current dashboard view state.
    pub fn dashboard_state(&self) -> DashboardState {
        self.lock_dashboard().clone()
    }

    /// Start a new load: bump the generation counter and mark the view as
    /// loading.  The returned generation fences the eventual commit.
    pub(crate) fn begin_load(&self) -> u64 {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_dashboard() = DashboardState::Loading;
        generation
    }

    /// Commit a finished load.  A load that is no longer the newest is
    /// discarded, so a stale in-flight response can never overwrite newer
    /// state.  Returns whether the commit took effect.
    pub(crate) fn commit_load(&self, generation: u64, state: DashboardState) -> bool {
        if generation != self.load_generation.load(Ordering::SeqCst) {
            tracing::debug!(generation, "Discarding stale dashboard load");
            return false;
        }
        *self.lock_dashboard() = state;
        true
    }

    fn lock_dashboard(&self) -> std::sync::MutexGuard<'_, DashboardState> {
        self.dashboard.lock().unwrap_or_else(|e| e.into_inner())
    }
}
