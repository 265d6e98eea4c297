//! Message commands.

use tracing::info;
use uuid::Uuid;

use campfire_store::{Message, NewComment, NewMessage, Repository, Result};

use crate::state::Workspace;

/// Post a message authored by the signed-in user.
pub async fn post_message(
    ws: &Workspace,
    project_id: Uuid,
    title: String,
    content: String,
) -> Result<Message> {
    let draft = NewMessage {
        project_id,
        title,
        content,
        author: ws.config.current_user.clone(),
    };
    let message = ws.store.messages.create(draft).await?;
    info!(message_id = %message.id, project_id = %project_id, "Message posted");
    ws.notifier.success("Message posted");
    Ok(message)
}

/// Reply to a message as the signed-in user.
pub async fn add_comment(ws: &Workspace, message_id: Uuid, text: String) -> Result<Message> {
    let draft = NewComment {
        author: ws.config.current_user.clone(),
        text,
    };
    match ws.store.messages.add_comment(message_id, draft).await {
        Ok(message) => {
            ws.notifier.success("Comment added");
            Ok(message)
        }
        Err(e) => {
            ws.notifier.error("Message not found");
            Err(e)
        }
    }
}

pub async fn delete_message(ws: &Workspace, id: Uuid) -> Result<Message> {
    match ws.store.messages.delete(id).await {
        Ok(message) => {
            ws.notifier.success("Message deleted");
            Ok(message)
        }
        Err(e) => {
            ws.notifier.error("Message not found");
            Err(e)
        }
    }
}
