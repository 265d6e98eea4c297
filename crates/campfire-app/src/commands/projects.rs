//! Project commands.

use tracing::info;
use uuid::Uuid;

use campfire_store::{NewProject, Project, ProjectPatch, Repository, Result};

use crate::state::Workspace;

pub async fn create_project(
    ws: &Workspace,
    name: String,
    description: String,
    members: Vec<String>,
) -> Result<Project> {
    let draft = NewProject {
        name,
        description,
        members,
    };
    let project = ws.store.projects.create(draft).await?;
    info!(project_id = %project.id, "Project created");
    ws.notifier.success(format!("Project \"{}\" created", project.name));
    Ok(project)
}

pub async fn rename_project(ws: &Workspace, id: Uuid, name: String) -> Result<Project> {
    let patch = ProjectPatch {
        name: Some(name),
        ..Default::default()
    };
    match ws.store.projects.update(id, patch).await {
        Ok(project) => {
            ws.notifier.success("Project updated");
            Ok(project)
        }
        Err(e) => {
            ws.notifier.error("Project not found");
            Err(e)
        }
    }
}

/// Delete a project.  Its messages, todos and files are left in place with
/// their `project_id` dangling; derived views render them under
/// "Unknown Project".
pub async fn delete_project(ws: &Workspace, id: Uuid) -> Result<Project> {
    match ws.store.projects.delete(id).await {
        Ok(project) => {
            info!(project_id = %project.id, "Project deleted");
            ws.notifier.success(format!("Project \"{}\" deleted", project.name));
            Ok(project)
        }
        Err(e) => {
            ws.notifier.error("Project not found");
            Err(e)
        }
    }
}
