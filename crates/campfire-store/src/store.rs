//! The four entity collections bundled behind a single cloneable handle.

use crate::collection::Latency;
use crate::files::FileStore;
use crate::messages::MessageStore;
use crate::projects::ProjectStore;
use crate::seed;
use crate::todos::TodoStore;

/// One store per entity type.  Cloning is cheap (the collections share their
/// backing storage), so the handle can be passed around freely.
#[derive(Debug, Clone)]
pub struct EntityStore {
    pub projects: ProjectStore,
    pub messages: MessageStore,
    pub todos: TodoStore,
    pub files: FileStore,
}

impl EntityStore {
    /// Four empty collections.
    pub fn empty(latency: Latency) -> Self {
        Self {
            projects: ProjectStore::new(latency),
            messages: MessageStore::new(latency),
            todos: TodoStore::new(latency),
            files: FileStore::new(latency),
        }
    }

    /// Collections populated with the bundled demo fixtures.  All data is
    /// lost on process exit; the next start reseeds from scratch.
    pub fn seeded(latency: Latency) -> Self {
        let seed = seed::demo_data();
        Self {
            projects: ProjectStore::with_seed(seed.projects, latency),
            messages: MessageStore::with_seed(seed.messages, latency),
            todos: TodoStore::with_seed(seed.todos, latency),
            files: FileStore::with_seed(seed.files, latency),
        }
    }
}
