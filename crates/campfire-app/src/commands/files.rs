//! File attachment commands.

use tracing::info;
use uuid::Uuid;

use campfire_store::{File, NewFile, Repository, Result};

use crate::state::Workspace;

/// Attach a file to a project, uploaded by the signed-in user.
pub async fn attach_file(
    ws: &Workspace,
    project_id: Uuid,
    name: String,
    url: String,
    size: u64,
    kind: String,
) -> Result<File> {
    let draft = NewFile {
        project_id,
        name,
        url,
        size,
        kind,
        uploaded_by: ws.config.current_user.clone(),
    };
    let file = ws.store.files.create(draft).await?;
    info!(file_id = %file.id, project_id = %project_id, size = file.size, "File attached");
    ws.notifier.success(format!("Uploaded \"{}\"", file.name));
    Ok(file)
}

pub async fn remove_file(ws: &Workspace, id: Uuid) -> Result<File> {
    match ws.store.files.delete(id).await {
        Ok(file) => {
            ws.notifier.success(format!("Removed \"{}\"", file.name));
            Ok(file)
        }
        Err(e) => {
            ws.notifier.error("File not found");
            Err(e)
        }
    }
}
