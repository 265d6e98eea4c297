//! CRUD operations for [`Project`] records.

use chrono::Utc;
use uuid::Uuid;

use crate::collection::{Latency, MemoryCollection, Record, DELAY_GET, DELAY_LIST_SLOW, DELAY_MUTATE, DELAY_CREATE};
use crate::error::Result;
use crate::models::Project;
use crate::repository::Repository;

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Caller-supplied fields for creating a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub members: Vec<String>,
}

/// Shallow-merge patch: present fields override, absent fields persist.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<String>>,
}

/// In-memory collection of projects, newest first.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    items: MemoryCollection<Project>,
    latency: Latency,
}

impl ProjectStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub(crate) fn with_seed(seed: Vec<Project>, latency: Latency) -> Self {
        Self {
            items: MemoryCollection::new(seed),
            latency,
        }
    }
}

impl Repository for ProjectStore {
    type Entity = Project;
    type Draft = NewProject;
    type Patch = ProjectPatch;

    async fn get_all(&self) -> Result<Vec<Project>> {
        self.latency.wait(DELAY_LIST_SLOW).await;
        Ok(self.items.all())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Project> {
        self.latency.wait(DELAY_GET).await;
        self.items.find(id)
    }

    async fn create(&self, draft: NewProject) -> Result<Project> {
        self.latency.wait(DELAY_CREATE).await;
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            members: draft.members,
            created_at: now,
            updated_at: now,
        };
        self.items.insert_front(project.clone());
        tracing::debug!(project_id = %project.id, name = %project.name, "Created project");
        Ok(project)
    }

    /// Projects are the only entity whose `updated_at` refreshes on update.
    async fn update(&self, id: Uuid, patch: ProjectPatch) -> Result<Project> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.modify(id, |project| {
            if let Some(name) = patch.name {
                project.name = name;
            }
            if let Some(description) = patch.description {
                project.description = description;
            }
            if let Some(members) = patch.members {
                project.members = members;
            }
            project.updated_at = Utc::now();
        })
    }

    /// No cascade: messages, todos and files keep their `project_id` and are
    /// orphaned by this call.
    async fn delete(&self, id: Uuid) -> Result<Project> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.remove(id)
    }
}
