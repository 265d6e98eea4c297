//! Dashboard load: concurrent fetch join, aggregation, request fencing.

use tracing::info;

use campfire_core::aggregate_with_limit;
use campfire_store::Repository;

use crate::state::{DashboardState, Workspace};

/// Load the dashboard.
///
/// The three collection fetches run concurrently; the first failure aborts
/// the whole join (no partial data is ever rendered).  On success the raw
/// records go through the aggregator.  Whatever the outcome, it is only
/// committed if this load is still the newest one.
pub async fn load_dashboard(ws: &Workspace) -> DashboardState {
    let generation = ws.begin_load();

    let state = match tokio::try_join!(
        ws.store.projects.get_all(),
        ws.store.messages.get_all(),
        ws.store.todos.get_all(),
    ) {
        Ok((projects, messages, todos)) => {
            let view = aggregate_with_limit(&projects, &messages, &todos, ws.config.feed_limit);
            info!(
                projects = view.projects.len(),
                activities = view.activity.len(),
                "Dashboard loaded"
            );
            DashboardState::Ready(view)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Dashboard load failed");
            ws.notifier.error("Failed to load dashboard data");
            DashboardState::Failed(e.to_string())
        }
    };

    ws.commit_load(generation, state);
    ws.dashboard_state()
}

/// The manual full-reload action offered by the failure view.
pub async fn reload_dashboard(ws: &Workspace) -> DashboardState {
    load_dashboard(ws).await
}
