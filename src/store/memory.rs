//! In-memory transaction store.
//!
//! DashMap keyed by transaction id plus an atomic live count. Reads are
//! lock-free; writes only lock the target shard, so callers never need
//! external synchronization. The count is maintained by save/delete rather
//! than recounted: every successful save increments it, every successful
//! delete decrements it, and no other path touches it.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::Transaction;
use crate::store::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    entries: DashMap<String, Transaction>,
    live: AtomicI64,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. The duplicate check and the insert happen under
    /// the same shard lock, so two concurrent saves with the same id cannot
    /// both succeed.
    pub fn save(&self, tx: Transaction) -> StoreResult<Transaction> {
        match self.entries.entry(tx.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(tx.id)),
            Entry::Vacant(slot) => {
                slot.insert(tx.clone());
                self.live.fetch_add(1, Ordering::SeqCst);
                Ok(tx)
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<Transaction> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Snapshot of every record, in unspecified order.
    pub fn find_all(&self) -> Vec<Transaction> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Page over the map's native iteration order: skip `page * size`
    /// records, take up to `size`. The order is stable within this call but
    /// carries no guarantee across calls once the contents change.
    pub fn find_page(&self, page: i64, size: i64) -> StoreResult<Vec<Transaction>> {
        if page < 0 || size <= 0 {
            return Err(StoreError::InvalidPagination { page, size });
        }

        let skip = page
            .checked_mul(size)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);

        Ok(self
            .entries
            .iter()
            .skip(skip)
            .take(size as usize)
            .map(|entry| entry.value().clone())
            .collect())
    }

    pub fn exists_by_id(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        match self.entries.remove(id) {
            Some(_) => {
                self.live.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Replace the stored record wholesale. The existence check and the
    /// replacement happen under the same shard lock.
    pub fn update(&self, tx: Transaction) -> StoreResult<()> {
        match self.entries.entry(tx.id.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(tx);
                Ok(())
            }
            Entry::Vacant(_) => Err(StoreError::NotFound(tx.id)),
        }
    }

    /// Live record count from the maintained counter, not a recount.
    pub fn count(&self) -> i64 {
        self.live.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn record(amount: &str) -> Transaction {
        Transaction::new(
            BigDecimal::from_str(amount).expect("valid decimal"),
            None,
            "DEPOSIT".to_string(),
            "USD".to_string(),
        )
    }

    #[test]
    fn save_then_find_returns_equal_record() {
        let store = InMemoryTransactionStore::new();
        let saved = store.save(record("42.50")).unwrap();

        let found = store.find_by_id(&saved.id).expect("record present");
        assert_eq!(found, saved);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn save_rejects_duplicate_id() {
        let store = InMemoryTransactionStore::new();
        let saved = store.save(record("10")).unwrap();

        let mut dup = record("20");
        dup.id = saved.id.clone();

        assert_eq!(store.save(dup), Err(StoreError::Duplicate(saved.id)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn delete_removes_and_decrements() {
        let store = InMemoryTransactionStore::new();
        let a = store.save(record("1")).unwrap();
        let _b = store.save(record("2")).unwrap();

        store.delete_by_id(&a.id).unwrap();

        assert_eq!(store.count(), 1);
        assert!(store.find_by_id(&a.id).is_none());
        assert!(!store.exists_by_id(&a.id));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = InMemoryTransactionStore::new();
        assert_eq!(
            store.delete_by_id("ghost"),
            Err(StoreError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn update_replaces_existing_record() {
        let store = InMemoryTransactionStore::new();
        let saved = store.save(record("5")).unwrap();

        let mut updated = saved.clone();
        updated.amount = BigDecimal::from_str("9.99").unwrap();
        updated.tx_type = "TRANSFER".to_string();
        store.update(updated.clone()).unwrap();

        assert_eq!(store.find_by_id(&saved.id), Some(updated));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = InMemoryTransactionStore::new();
        let tx = record("5");
        let id = tx.id.clone();
        assert_eq!(store.update(tx), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn find_page_validates_parameters() {
        let store = InMemoryTransactionStore::new();

        assert!(matches!(
            store.find_page(-1, 10),
            Err(StoreError::InvalidPagination { .. })
        ));
        assert!(matches!(
            store.find_page(0, 0),
            Err(StoreError::InvalidPagination { .. })
        ));
        assert!(matches!(
            store.find_page(0, -3),
            Err(StoreError::InvalidPagination { .. })
        ));
    }

    #[test]
    fn find_page_windows_the_snapshot() {
        let store = InMemoryTransactionStore::new();
        for i in 0..15 {
            store.save(record(&format!("{}", i + 1))).unwrap();
        }

        assert_eq!(store.find_page(0, 10).unwrap().len(), 10);
        assert_eq!(store.find_page(1, 10).unwrap().len(), 5);
        assert_eq!(store.find_page(2, 10).unwrap().len(), 0);
        assert_eq!(store.find_page(0, 100).unwrap().len(), 15);
        // past the end of what page*size can address
        assert_eq!(store.find_page(i64::MAX, 2).unwrap().len(), 0);
    }

    #[test]
    fn find_all_returns_every_record() {
        let store = InMemoryTransactionStore::new();
        let mut ids: Vec<String> = (0..5)
            .map(|_| store.save(record("1")).unwrap().id)
            .collect();

        let mut found: Vec<String> = store.find_all().into_iter().map(|tx| tx.id).collect();
        ids.sort();
        found.sort();
        assert_eq!(found, ids);
    }

    #[test]
    fn concurrent_saves_with_distinct_ids_all_succeed() {
        let store = Arc::new(InMemoryTransactionStore::new());
        let threads = 8;
        let per_thread = 50;

        std::thread::scope(|scope| {
            for _ in 0..threads {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for _ in 0..per_thread {
                        store.save(record("1")).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.count(), (threads * per_thread) as i64);
        assert_eq!(store.find_all().len(), threads * per_thread);
    }

    #[test]
    fn concurrent_saves_with_same_id_admit_exactly_one() {
        let store = Arc::new(InMemoryTransactionStore::new());
        let template = record("1");

        let successes: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    let tx = template.clone();
                    scope.spawn(move || usize::from(store.save(tx).is_ok()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(store.count(), 1);
    }
}
