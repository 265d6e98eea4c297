//! "My Assignments" view: the signed-in user's todos, bucketed by due date.

use chrono::{DateTime, Utc};
use serde::Serialize;

use campfire_core::{filter_todos, FilterCounts, TodoFilter};
use campfire_store::{Project, Repository, Result, Todo};

use crate::state::Workspace;

/// Derived assignments view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentsView {
    /// The user's todos matching the active filter, in store order.
    pub todos: Vec<Todo>,
    /// Badge counts over the user's full todo set.
    pub counts: FilterCounts,
    /// Projects, for resolving names next to each todo.
    pub projects: Vec<Project>,
}

/// Load the signed-in user's assignments with `filter` applied.
pub async fn my_assignments(ws: &Workspace, filter: TodoFilter) -> Result<AssignmentsView> {
    my_assignments_at(ws, filter, Utc::now()).await
}

/// Like [`my_assignments`] with an explicit observation time.
pub async fn my_assignments_at(
    ws: &Workspace,
    filter: TodoFilter,
    now: DateTime<Utc>,
) -> Result<AssignmentsView> {
    let (todos, projects) =
        match tokio::try_join!(ws.store.todos.get_all(), ws.store.projects.get_all()) {
            Ok(loaded) => loaded,
            Err(e) => {
                ws.notifier.error("Failed to load assignments");
                return Err(e);
            }
        };

    let mine: Vec<Todo> = todos
        .into_iter()
        .filter(|t| t.assignee.eq_ignore_ascii_case(&ws.config.current_user))
        .collect();

    Ok(AssignmentsView {
        counts: FilterCounts::tally(&mine, now),
        todos: filter_todos(&mine, filter, now),
        projects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::todos::{create_todo, toggle_todo};
    use crate::config::AppConfig;
    use campfire_core::Roster;
    use campfire_store::{EntityStore, Latency};
    use chrono::Duration;
    use uuid::Uuid;

    fn workspace() -> Workspace {
        let config = AppConfig {
            simulate_latency: false,
            ..Default::default()
        };
        Workspace::with_store(config, EntityStore::empty(Latency::none()), Roster::new())
    }

    #[tokio::test]
    async fn test_only_own_todos_are_considered() {
        let ws = workspace();
        let project = Uuid::new_v4();
        create_todo(&ws, project, "mine".into(), "You".into(), None)
            .await
            .unwrap();
        // The original UI accepted either casing of the current user.
        create_todo(&ws, project, "mine too".into(), "you".into(), None)
            .await
            .unwrap();
        create_todo(&ws, project, "theirs".into(), "Ana".into(), None)
            .await
            .unwrap();

        let view = my_assignments(&ws, TodoFilter::All).await.unwrap();
        assert_eq!(view.counts.all, 2);
        assert!(view.todos.iter().all(|t| t.title.starts_with("mine")));
    }

    #[tokio::test]
    async fn test_overdue_bucket_and_counts() {
        let ws = workspace();
        let project = Uuid::new_v4();
        let now = Utc::now();

        create_todo(
            &ws,
            project,
            "late".into(),
            "You".into(),
            Some(now - Duration::days(2)),
        )
        .await
        .unwrap();
        create_todo(&ws, project, "today".into(), "You".into(), Some(now))
            .await
            .unwrap();
        let done = create_todo(&ws, project, "done".into(), "You".into(), None)
            .await
            .unwrap();
        toggle_todo(&ws, done.id).await.unwrap();

        let view = my_assignments_at(&ws, TodoFilter::Overdue, now).await.unwrap();
        assert_eq!(view.todos.len(), 1);
        assert_eq!(view.todos[0].title, "late");
        assert_eq!(view.counts.all, 3);
        assert_eq!(view.counts.active, 2);
        assert_eq!(view.counts.completed, 1);
        assert_eq!(view.counts.overdue, 1);
    }
}
