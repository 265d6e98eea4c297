//! CRUD operations for [`Message`] records, plus comment threading.

use chrono::Utc;
use uuid::Uuid;

use crate::collection::{Latency, MemoryCollection, Record, DELAY_GET, DELAY_LIST, DELAY_MUTATE, DELAY_CREATE};
use crate::error::Result;
use crate::models::{Comment, Message};
use crate::repository::{ProjectScoped, Repository};

impl Record for Message {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Caller-supplied fields for posting a message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub project_id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Caller-supplied fields for a comment; id and timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author: String,
    pub text: String,
}

/// Shallow-merge patch: present fields override, absent fields persist.
#[derive(Debug, Clone, Default)]
pub struct MessagePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// In-memory collection of messages, newest first.
#[derive(Debug, Clone)]
pub struct MessageStore {
    items: MemoryCollection<Message>,
    latency: Latency,
}

impl MessageStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub(crate) fn with_seed(seed: Vec<Message>, latency: Latency) -> Self {
        Self {
            items: MemoryCollection::new(seed),
            latency,
        }
    }

    /// Append a comment to a message's thread and return the whole message.
    pub async fn add_comment(&self, message_id: Uuid, draft: NewComment) -> Result<Message> {
        self.latency.wait(DELAY_MUTATE).await;
        let comment = Comment {
            id: Uuid::new_v4(),
            author: draft.author,
            text: draft.text,
            created_at: Utc::now(),
        };
        self.items
            .modify(message_id, |message| message.comments.push(comment))
    }
}

impl Repository for MessageStore {
    type Entity = Message;
    type Draft = NewMessage;
    type Patch = MessagePatch;

    async fn get_all(&self) -> Result<Vec<Message>> {
        self.latency.wait(DELAY_LIST).await;
        Ok(self.items.all())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Message> {
        self.latency.wait(DELAY_GET).await;
        self.items.find(id)
    }

    async fn create(&self, draft: NewMessage) -> Result<Message> {
        self.latency.wait(DELAY_CREATE).await;
        let message = Message {
            id: Uuid::new_v4(),
            project_id: draft.project_id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: Utc::now(),
            comments: Vec::new(),
        };
        self.items.insert_front(message.clone());
        tracing::debug!(message_id = %message.id, project_id = %message.project_id, "Posted message");
        Ok(message)
    }

    async fn update(&self, id: Uuid, patch: MessagePatch) -> Result<Message> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.modify(id, |message| {
            if let Some(title) = patch.title {
                message.title = title;
            }
            if let Some(content) = patch.content {
                message.content = content;
            }
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Message> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.remove(id)
    }
}

impl ProjectScoped for MessageStore {
    async fn get_by_project_id(&self, project_id: Uuid) -> Result<Vec<Message>> {
        self.latency.wait(DELAY_LIST).await;
        Ok(self.items.matching(|m| m.project_id == project_id))
    }
}
