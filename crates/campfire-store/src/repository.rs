//! Storage abstraction for campfire.
//!
//! Each entity type gets one polymorphic capability implementing this trait,
//! so the derivation logic and the application layer never depend on the
//! in-memory backend directly and it can be swapped for a real database.

use uuid::Uuid;

use crate::error::Result;

/// The five CRUD operations every entity collection supports.
///
/// All operations return value copies; no shared mutable reference to the
/// backing storage ever leaks to callers.
pub trait Repository {
    /// The persisted record type.
    type Entity;
    /// Caller-supplied fields for `create`; the store assigns the rest.
    type Draft;
    /// Shallow-merge update: present fields override, absent fields persist.
    type Patch;

    /// Fetch every record in the collection.
    fn get_all(&self) -> impl std::future::Future<Output = Result<Vec<Self::Entity>>> + Send;

    /// Fetch a single record, failing with `NotFound` for unknown ids.
    fn get_by_id(&self, id: Uuid) -> impl std::future::Future<Output = Result<Self::Entity>> + Send;

    /// Insert a new record; the store assigns id, timestamps and defaults.
    fn create(&self, draft: Self::Draft)
        -> impl std::future::Future<Output = Result<Self::Entity>> + Send;

    /// Shallow-merge `patch` over the stored record and return the result.
    fn update(
        &self,
        id: Uuid,
        patch: Self::Patch,
    ) -> impl std::future::Future<Output = Result<Self::Entity>> + Send;

    /// Remove a record and return it.
    fn delete(&self, id: Uuid) -> impl std::future::Future<Output = Result<Self::Entity>> + Send;
}

/// Extension for collections whose records belong to a project
/// (messages, todos, files).
pub trait ProjectScoped: Repository {
    /// Fetch all records referencing `project_id`.  Unknown projects yield
    /// an empty list, not an error.
    fn get_by_project_id(
        &self,
        project_id: Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Entity>>> + Send;
}
