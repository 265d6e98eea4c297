//! CRUD operations for [`File`] metadata records.

use chrono::Utc;
use uuid::Uuid;

use crate::collection::{Latency, MemoryCollection, Record, DELAY_GET, DELAY_LIST, DELAY_LIST_SLOW, DELAY_MUTATE, DELAY_UPLOAD};
use crate::error::Result;
use crate::models::File;
use crate::repository::{ProjectScoped, Repository};

impl Record for File {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Caller-supplied fields for attaching a file to a project.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub project_id: Uuid,
    pub name: String,
    pub url: String,
    pub size: u64,
    pub kind: String,
    pub uploaded_by: String,
}

/// Shallow-merge patch: present fields override, absent fields persist.
#[derive(Debug, Clone, Default)]
pub struct FilePatch {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// In-memory collection of file attachments, newest first.
#[derive(Debug, Clone)]
pub struct FileStore {
    items: MemoryCollection<File>,
    latency: Latency,
}

impl FileStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub(crate) fn with_seed(seed: Vec<File>, latency: Latency) -> Self {
        Self {
            items: MemoryCollection::new(seed),
            latency,
        }
    }
}

impl Repository for FileStore {
    type Entity = File;
    type Draft = NewFile;
    type Patch = FilePatch;

    async fn get_all(&self) -> Result<Vec<File>> {
        self.latency.wait(DELAY_LIST_SLOW).await;
        Ok(self.items.all())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<File> {
        self.latency.wait(DELAY_GET).await;
        self.items.find(id)
    }

    /// The longest delay of the store, standing in for an upload.
    async fn create(&self, draft: NewFile) -> Result<File> {
        self.latency.wait(DELAY_UPLOAD).await;
        let file = File {
            id: Uuid::new_v4(),
            project_id: draft.project_id,
            name: draft.name,
            url: draft.url,
            size: draft.size,
            kind: draft.kind,
            uploaded_by: draft.uploaded_by,
            uploaded_at: Utc::now(),
        };
        self.items.insert_front(file.clone());
        tracing::debug!(file_id = %file.id, size = file.size, "Stored file attachment");
        Ok(file)
    }

    async fn update(&self, id: Uuid, patch: FilePatch) -> Result<File> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.modify(id, |file| {
            if let Some(name) = patch.name {
                file.name = name;
            }
            if let Some(url) = patch.url {
                file.url = url;
            }
        })
    }

    async fn delete(&self, id: Uuid) -> Result<File> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.remove(id)
    }
}

impl ProjectScoped for FileStore {
    async fn get_by_project_id(&self, project_id: Uuid) -> Result<Vec<File>> {
        self.latency.wait(DELAY_LIST).await;
        Ok(self.items.matching(|f| f.project_id == project_id))
    }
}
