//! Shared, ordered person store.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::observability::metrics;
use crate::store::person::Person;

/// Insertion-ordered collection of [`Person`] records.
///
/// Cloning is cheap and every clone refers to the same records.
/// Identifiers are not unique: lookups and removals act on the first
/// match only.
#[derive(Clone, Default)]
pub struct PersonStore {
    inner: Arc<RwLock<Vec<Person>>>,
}

impl PersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    pub fn with_records(records: Vec<Person>) -> Self {
        metrics::record_store_size(records.len());
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    /// Snapshot of every record in store order.
    pub async fn list(&self) -> Vec<Person> {
        self.inner.read().await.clone()
    }

    /// First record whose id equals `id`.
    pub async fn find(&self, id: &str) -> Option<Person> {
        self.inner
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Append `person` and return the resulting list.
    pub async fn append(&self, person: Person) -> Vec<Person> {
        let mut records = self.inner.write().await;
        records.push(person);
        metrics::record_store_size(records.len());
        records.clone()
    }

    /// Remove the first record whose id equals `id` and return the
    /// removed record (if any) with the resulting list.
    pub async fn remove_first(&self, id: &str) -> (Option<Person>, Vec<Person>) {
        let mut records = self.inner.write().await;
        let position = records.iter().position(|p| p.id == id);
        let removed = position.map(|index| records.remove(index));
        metrics::record_store_size(records.len());
        (removed, records.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
