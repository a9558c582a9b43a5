//! Read-through cache of transaction projections, keyed by id.
//!
//! Populated on `get`, invalidated synchronously on update and delete of
//! the same id. Unbounded: entries only leave through invalidation.

use dashmap::DashMap;

use crate::schemas::TransactionResponse;

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: DashMap<String, TransactionResponse>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<TransactionResponse> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    pub fn put(&self, response: TransactionResponse) {
        self.entries.insert(response.id.clone(), response);
    }

    pub fn invalidate(&self, id: &str) {
        self.entries.remove(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
