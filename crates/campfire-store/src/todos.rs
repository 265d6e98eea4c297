//! CRUD operations for [`Todo`] records, plus completion toggling.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::collection::{Latency, MemoryCollection, Record, DELAY_GET, DELAY_LIST, DELAY_MUTATE, DELAY_CREATE};
use crate::error::Result;
use crate::models::Todo;
use crate::repository::{ProjectScoped, Repository};

impl Record for Todo {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Caller-supplied fields for creating a todo.  New todos start incomplete.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub project_id: Uuid,
    pub list_id: Option<Uuid>,
    pub title: String,
    pub assignee: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Shallow-merge patch: present fields override, absent fields persist.
///
/// `completed` and `completed_at` are patched independently, exactly like
/// the raw update of the mock backend; [`TodoStore::toggle_complete`] is the
/// operation that keeps the two in sync.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub assignee: Option<String>,
    pub list_id: Option<Option<Uuid>>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// In-memory collection of todos, oldest first.
#[derive(Debug, Clone)]
pub struct TodoStore {
    items: MemoryCollection<Todo>,
    latency: Latency,
}

impl TodoStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub(crate) fn with_seed(seed: Vec<Todo>, latency: Latency) -> Self {
        Self {
            items: MemoryCollection::new(seed),
            latency,
        }
    }

    /// Flip completion state.  Completing stamps `completed_at`; reopening
    /// clears it, so `completed == true` iff `completed_at` is set.
    pub async fn toggle_complete(&self, id: Uuid) -> Result<Todo> {
        self.latency.wait(DELAY_LIST).await;
        self.items.modify(id, |todo| {
            todo.completed = !todo.completed;
            todo.completed_at = todo.completed.then(Utc::now);
        })
    }
}

impl Repository for TodoStore {
    type Entity = Todo;
    type Draft = NewTodo;
    type Patch = TodoPatch;

    async fn get_all(&self) -> Result<Vec<Todo>> {
        self.latency.wait(DELAY_LIST).await;
        Ok(self.items.all())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Todo> {
        self.latency.wait(DELAY_GET).await;
        self.items.find(id)
    }

    async fn create(&self, draft: NewTodo) -> Result<Todo> {
        self.latency.wait(DELAY_CREATE).await;
        let todo = Todo {
            id: Uuid::new_v4(),
            project_id: draft.project_id,
            list_id: draft.list_id,
            title: draft.title,
            assignee: draft.assignee,
            completed: false,
            completed_at: None,
            due_date: draft.due_date,
            created_at: Utc::now(),
        };
        self.items.push_back(todo.clone());
        tracing::debug!(todo_id = %todo.id, project_id = %todo.project_id, "Created todo");
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.modify(id, |todo| {
            if let Some(title) = patch.title {
                todo.title = title;
            }
            if let Some(assignee) = patch.assignee {
                todo.assignee = assignee;
            }
            if let Some(list_id) = patch.list_id {
                todo.list_id = list_id;
            }
            if let Some(completed) = patch.completed {
                todo.completed = completed;
            }
            if let Some(completed_at) = patch.completed_at {
                todo.completed_at = completed_at;
            }
            if let Some(due_date) = patch.due_date {
                todo.due_date = due_date;
            }
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Todo> {
        self.latency.wait(DELAY_MUTATE).await;
        self.items.remove(id)
    }
}

impl ProjectScoped for TodoStore {
    async fn get_by_project_id(&self, project_id: Uuid) -> Result<Vec<Todo>> {
        self.latency.wait(DELAY_LIST).await;
        Ok(self.items.matching(|t| t.project_id == project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn store() -> TodoStore {
        TodoStore::new(Latency::none())
    }

    fn draft(title: &str) -> NewTodo {
        NewTodo {
            project_id: Uuid::new_v4(),
            list_id: None,
            title: title.to_string(),
            assignee: "You".to_string(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_incomplete() {
        let store = store();
        let created = store.create(draft("ship it")).await.unwrap();
        assert!(!created.completed);
        assert!(created.completed_at.is_none());
        assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_appends() {
        let store = store();
        store.create(draft("first")).await.unwrap();
        store.create(draft("second")).await.unwrap();
        let all = store.get_all().await.unwrap();
        assert_eq!(all[0].title, "first");
        assert_eq!(all[1].title, "second");
    }

    #[tokio::test]
    async fn test_toggle_complete_keeps_invariant_both_ways() {
        let store = store();
        let created = store.create(draft("ship it")).await.unwrap();

        let completed = store.toggle_complete(created.id).await.unwrap();
        assert!(completed.completed);
        assert!(completed.completed_at.is_some());

        let reopened = store.toggle_complete(created.id).await.unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_not_found() {
        let store = store();
        assert!(matches!(
            store.toggle_complete(Uuid::new_v4()).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_patches_due_date_without_touching_rest() {
        let store = store();
        let created = store.create(draft("ship it")).await.unwrap();
        let due = Utc::now();

        let patch = TodoPatch {
            due_date: Some(Some(due)),
            ..Default::default()
        };
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.due_date, Some(due));
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.assignee, created.assignee);
        assert_eq!(updated.created_at, created.created_at);
        assert!(!updated.completed);
    }
}
