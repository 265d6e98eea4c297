//! Team roster view.

use campfire_core::{member_stats, MemberStat};
use campfire_store::{Repository, Result};

use crate::state::Workspace;

/// Derive the team roster: every distinct member across projects with their
/// project and todo counts, presence taken from the workspace roster.
///
/// Both fetches run concurrently; the first failure aborts the join and is
/// surfaced as an error notice.
pub async fn team_overview(ws: &Workspace) -> Result<Vec<MemberStat>> {
    match tokio::try_join!(ws.store.projects.get_all(), ws.store.todos.get_all()) {
        Ok((projects, todos)) => Ok(member_stats(&projects, &todos, &ws.roster)),
        Err(e) => {
            ws.notifier.error("Failed to load team data");
            Err(e)
        }
    }
}
