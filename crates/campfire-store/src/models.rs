//! Domain model structs held by the in-memory entity store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer over IPC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project grouping todos, messages and file attachments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Human-readable project name.
    pub name: String,
    /// Short description shown on project cards.
    pub description: String,
    /// Ordered list of member display names (not normalized user records).
    pub members: Vec<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update to the project record.
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A message posted on a project's board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// The project this message belongs to.
    pub project_id: Uuid,
    /// Message subject line.
    pub title: String,
    /// Message body.
    pub content: String,
    /// Display name of the author.
    pub author: String,
    /// When the message was posted.
    pub created_at: DateTime<Utc>,
    /// Threaded replies, oldest first.
    pub comments: Vec<Comment>,
}

/// A reply attached to a [`Message`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// Display name of the author.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Todo
// ---------------------------------------------------------------------------

/// A single to-do item assigned to a team member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique todo identifier.
    pub id: Uuid,
    /// The project this todo belongs to.
    pub project_id: Uuid,
    /// Optional list within the project.
    pub list_id: Option<Uuid>,
    /// Task title.
    pub title: String,
    /// Display name of the assignee.
    pub assignee: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Set when `completed` flips to true, cleared when it flips back.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// Metadata for a file attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The project this file belongs to.
    pub project_id: Uuid,
    /// Original file name.
    pub name: String,
    /// Where the file content can be fetched from.
    pub url: String,
    /// File size in bytes.
    pub size: u64,
    /// Content type, e.g. `application/pdf`.
    pub kind: String,
    /// Display name of the uploader.
    pub uploaded_by: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serializes_camel_case() {
        let todo = Todo {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            list_id: None,
            title: "ship it".to_string(),
            assignee: "You".to_string(),
            completed: false,
            completed_at: None,
            due_date: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("projectId").is_some());
        assert!(json.get("dueDate").is_some());
        assert!(json.get("project_id").is_none());

        let back: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(back, todo);
    }
}
