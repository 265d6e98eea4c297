//! Shared in-memory substrate for the per-entity stores.
//!
//! A [`MemoryCollection`] is a `Vec` behind a mutex, cloned on every read so
//! callers never observe the backing storage directly.  The [`Latency`] knob
//! reproduces the 200-500 ms artificial delay of the mock backend; tests run
//! with it disabled.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::error::{Result, StoreError};

// Per-operation delays of the simulated backend.
pub(crate) const DELAY_GET: Duration = Duration::from_millis(200);
pub(crate) const DELAY_LIST: Duration = Duration::from_millis(250);
pub(crate) const DELAY_LIST_SLOW: Duration = Duration::from_millis(300);
pub(crate) const DELAY_MUTATE: Duration = Duration::from_millis(300);
pub(crate) const DELAY_CREATE: Duration = Duration::from_millis(400);
pub(crate) const DELAY_UPLOAD: Duration = Duration::from_millis(500);

/// Whether store operations sleep before touching the collection.
///
/// A simulation detail, not a contract: nothing downstream depends on the
/// delays being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    /// Sleep the configured per-operation delay before each store call.
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    /// No artificial delay (used by tests and the derivation benchmarks).
    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub(crate) async fn wait(&self, delay: Duration) {
        if self.enabled {
            sleep(delay).await;
        }
    }
}

/// Anything stored in a [`MemoryCollection`].
pub(crate) trait Record: Clone {
    fn id(&self) -> Uuid;
}

/// A clone-on-read, mutex-guarded `Vec` of records.
///
/// The mutex is only held for the duration of the vector operation itself;
/// latency sleeps happen outside the lock.
#[derive(Debug, Clone)]
pub(crate) struct MemoryCollection<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T: Record> MemoryCollection<T> {
    pub(crate) fn new(seed: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(seed)),
        }
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.lock().clone()
    }

    pub(crate) fn find(&self, id: Uuid) -> Result<T> {
        self.lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub(crate) fn matching(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.lock().iter().filter(|r| pred(r)).cloned().collect()
    }

    /// Insert at the front (newest-first collections).
    pub(crate) fn insert_front(&self, record: T) {
        self.lock().insert(0, record);
    }

    /// Insert at the back (oldest-first collections).
    pub(crate) fn push_back(&self, record: T) {
        self.lock().push(record);
    }

    /// Mutate the record in place and return a copy of the result.
    pub(crate) fn modify(&self, id: Uuid, f: impl FnOnce(&mut T)) -> Result<T> {
        let mut items = self.lock();
        let record = items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;
        f(record);
        Ok(record.clone())
    }

    /// Remove the record and return it.
    pub(crate) fn remove(&self, id: Uuid) -> Result<T> {
        let mut items = self.lock();
        let index = items
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;
        Ok(items.remove(index))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        // Records are plain data; a poisoned lock only happens if a clone
        // panicked, in which case the collection is still consistent.
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: Uuid,
        value: u32,
    }

    impl Record for Row {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn row(value: u32) -> Row {
        Row {
            id: Uuid::new_v4(),
            value,
        }
    }

    #[test]
    fn test_find_unknown_id_is_not_found() {
        let coll = MemoryCollection::new(vec![row(1)]);
        assert!(matches!(
            coll.find(Uuid::new_v4()),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_insert_front_orders_newest_first() {
        let coll = MemoryCollection::new(vec![row(1)]);
        coll.insert_front(row(2));
        let all = coll.all();
        assert_eq!(all[0].value, 2);
        assert_eq!(all[1].value, 1);
    }

    #[test]
    fn test_modify_returns_updated_copy() {
        let first = row(1);
        let id = first.id;
        let coll = MemoryCollection::new(vec![first]);
        let updated = coll.modify(id, |r| r.value = 7).unwrap();
        assert_eq!(updated.value, 7);
        assert_eq!(coll.find(id).unwrap().value, 7);
    }

    #[test]
    fn test_remove_returns_record_and_shrinks() {
        let first = row(1);
        let id = first.id;
        let coll = MemoryCollection::new(vec![first, row(2)]);
        let removed = coll.remove(id).unwrap();
        assert_eq!(removed.value, 1);
        assert_eq!(coll.all().len(), 1);
        assert!(matches!(coll.remove(id), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_all_returns_copies() {
        let first = row(1);
        let id = first.id;
        let coll = MemoryCollection::new(vec![first]);
        let mut copy = coll.all();
        copy[0].value = 99;
        assert_eq!(coll.find(id).unwrap().value, 1);
    }
}
