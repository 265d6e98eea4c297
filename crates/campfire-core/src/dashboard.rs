//! Dashboard aggregation: project enrichment and the merged activity feed.
//!
//! Everything here is a pure function over entity slices; fetching and
//! failure handling live in the application layer.  Collections are small,
//! so the nested scans below are deliberate (no index is built).

use chrono::{DateTime, Utc};
use serde::Serialize;

use campfire_store::{Message, Project, Todo};

/// Placeholder project name for dangling `project_id` references.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Feed length the dashboard shows by default.
pub const DEFAULT_FEED_LIMIT: usize = 10;

/// What produced an [`Activity`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Message,
    Todo,
}

/// One entry of the merged activity feed.  Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// `msg-<id>` or `todo-<id>`, unique within one aggregation.
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Resolved project name, or [`UNKNOWN_PROJECT`].
    pub project_name: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A project annotated with its todos and message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProject {
    #[serde(flatten)]
    pub project: Project,
    pub todos: Vec<Todo>,
    pub message_count: usize,
}

impl EnrichedProject {
    /// Completed share of the project's todos, rounded to whole percent.
    /// A project without todos reports 0.
    pub fn progress_percent(&self) -> u32 {
        if self.todos.is_empty() {
            return 0;
        }
        let completed = self.todos.iter().filter(|t| t.completed).count();
        ((completed as f64 / self.todos.len() as f64) * 100.0).round() as u32
    }
}

/// The derived dashboard view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub projects: Vec<EnrichedProject>,
    pub activity: Vec<Activity>,
}

/// Derive the dashboard view from the three raw collections, with the
/// default feed length.
pub fn aggregate(projects: &[Project], messages: &[Message], todos: &[Todo]) -> DashboardView {
    aggregate_with_limit(projects, messages, todos, DEFAULT_FEED_LIMIT)
}

/// Like [`aggregate`], truncating the activity feed to `feed_limit` entries.
pub fn aggregate_with_limit(
    projects: &[Project],
    messages: &[Message],
    todos: &[Todo],
    feed_limit: usize,
) -> DashboardView {
    let enriched: Vec<EnrichedProject> = projects
        .iter()
        .map(|project| EnrichedProject {
            project: project.clone(),
            todos: todos
                .iter()
                .filter(|t| t.project_id == project.id)
                .cloned()
                .collect(),
            message_count: messages
                .iter()
                .filter(|m| m.project_id == project.id)
                .count(),
        })
        .collect();

    let project_name = |id| {
        projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
    };

    let mut activity: Vec<Activity> = messages
        .iter()
        .map(|message| Activity {
            id: format!("msg-{}", message.id),
            kind: ActivityKind::Message,
            title: message.title.clone(),
            description: "New message posted".to_string(),
            project_name: project_name(message.project_id),
            author: message.author.clone(),
            created_at: message.created_at,
        })
        .collect();

    activity.extend(todos.iter().filter(|t| t.completed).map(|todo| Activity {
        id: format!("todo-{}", todo.id),
        kind: ActivityKind::Todo,
        title: todo.title.clone(),
        description: "Todo completed".to_string(),
        project_name: project_name(todo.project_id),
        author: todo.assignee.clone(),
        // Completed todos normally carry a completion timestamp; fall back
        // to creation time when a raw patch left it unset.
        created_at: todo.completed_at.unwrap_or(todo.created_at),
    }));

    // Stable sort: equal timestamps keep message entries ahead of todo
    // entries, each group in source order.
    activity.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    activity.truncate(feed_limit);

    DashboardView {
        projects: enriched,
        activity,
    }
}
