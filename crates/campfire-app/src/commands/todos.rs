//! Todo commands.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use campfire_store::{NewTodo, Repository, Result, Todo};

use crate::state::Workspace;

pub async fn create_todo(
    ws: &Workspace,
    project_id: Uuid,
    title: String,
    assignee: String,
    due_date: Option<DateTime<Utc>>,
) -> Result<Todo> {
    let draft = NewTodo {
        project_id,
        list_id: None,
        title,
        assignee,
        due_date,
    };
    let todo = ws.store.todos.create(draft).await?;
    info!(todo_id = %todo.id, project_id = %project_id, "Todo created");
    ws.notifier.success("Todo created");
    Ok(todo)
}

/// Flip a todo's completion state.
pub async fn toggle_todo(ws: &Workspace, id: Uuid) -> Result<Todo> {
    match ws.store.todos.toggle_complete(id).await {
        Ok(todo) => {
            ws.notifier.success(if todo.completed {
                "Todo completed!"
            } else {
                "Todo reopened"
            });
            Ok(todo)
        }
        Err(e) => {
            ws.notifier.error("Failed to update todo");
            Err(e)
        }
    }
}

pub async fn delete_todo(ws: &Workspace, id: Uuid) -> Result<Todo> {
    match ws.store.todos.delete(id).await {
        Ok(todo) => {
            ws.notifier.success("Todo deleted");
            Ok(todo)
        }
        Err(e) => {
            ws.notifier.error("Todo not found");
            Err(e)
        }
    }
}
