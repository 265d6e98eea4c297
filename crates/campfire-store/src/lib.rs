//! # campfire-store
//!
//! Mock in-memory entity store for the Campfire dashboard: four independent
//! collections (projects, messages, todos, files) behind per-entity
//! [`Repository`] capabilities, with optional simulated latency.
//!
//! There is no persistence.  Every operation returns value copies, so no
//! shared mutable reference to the backing storage ever leaks to callers.

pub mod collection;
pub mod files;
pub mod messages;
pub mod models;
pub mod projects;
pub mod repository;
pub mod seed;
pub mod store;
pub mod todos;

mod error;

pub use collection::Latency;
pub use error::{Result, StoreError};
pub use files::{FilePatch, FileStore, NewFile};
pub use messages::{MessagePatch, MessageStore, NewComment, NewMessage};
pub use models::*;
pub use projects::{NewProject, ProjectPatch, ProjectStore};
pub use repository::{ProjectScoped, Repository};
pub use store::EntityStore;
pub use todos::{NewTodo, TodoPatch, TodoStore};
