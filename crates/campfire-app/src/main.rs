//! Demo binary: seeds the in-memory store and walks the derived views,
//! logging what the dashboard, team and assignments pages would render.
//!
//! All data lives in memory; the next start reseeds from the bundled
//! fixtures.

use tracing::info;
use tracing_subscriber::EnvFilter;

use campfire_app::commands::{assignments, dashboard, team};
use campfire_app::config::AppConfig;
use campfire_app::state::{DashboardState, Workspace};
use campfire_core::TodoFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,campfire_app=debug,campfire_store=debug")
        }))
        .init();

    info!("Starting Campfire v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();
    info!(?config, "Loaded configuration");

    let ws = Workspace::seeded(config);

    // Dashboard: enriched projects plus the merged activity feed.
    match dashboard::load_dashboard(&ws).await {
        DashboardState::Ready(view) => {
            for enriched in &view.projects {
                info!(
                    name = %enriched.project.name,
                    progress = enriched.progress_percent(),
                    messages = enriched.message_count,
                    todos = enriched.todos.len(),
                    "Project"
                );
            }
            for activity in &view.activity {
                info!(
                    kind = ?activity.kind,
                    project = %activity.project_name,
                    author = %activity.author,
                    title = %activity.title,
                    "Activity"
                );
            }
        }
        DashboardState::Failed(message) => anyhow::bail!("Dashboard load failed: {message}"),
        other => anyhow::bail!("Unexpected dashboard state: {other:?}"),
    }

    // Team roster.
    for stat in team::team_overview(&ws).await? {
        info!(
            name = %stat.name,
            projects = stat.project_count,
            active = stat.active_todos,
            completed = stat.completed_todos,
            presence = ?stat.presence,
            "Member"
        );
    }

    // The signed-in user's overdue assignments.
    let view = assignments::my_assignments(&ws, TodoFilter::Overdue).await?;
    info!(
        overdue = view.todos.len(),
        total = view.counts.all,
        "My assignments"
    );

    for notice in ws.notifier.drain() {
        info!(level = ?notice.level, message = %notice.message, "Notice");
    }

    Ok(())
}
