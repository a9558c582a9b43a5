//! Orchestration layer for transaction CRUD.
//!
//! The only component that constructs or mutates records by business rule.
//! Everything it hands back is a detached projection; the store keeps the
//! authoritative copy.

use std::sync::Arc;

use crate::domain::Transaction;
use crate::error::AppError;
use crate::schemas::{TransactionRequest, TransactionResponse};
use crate::services::ResponseCache;
use crate::store::InMemoryTransactionStore;
use crate::validation::validate_request;

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<InMemoryTransactionStore>,
    cache: Option<Arc<ResponseCache>>,
}

impl TransactionService {
    pub fn new(store: Arc<InMemoryTransactionStore>, cache: Option<Arc<ResponseCache>>) -> Self {
        Self { store, cache }
    }

    /// Validate the request, construct a fresh record (new id, current
    /// timestamp, default status) and persist it.
    pub fn create(&self, request: TransactionRequest) -> Result<TransactionResponse, AppError> {
        let valid = validate_request(&request)?;

        let tx = Transaction::new(
            valid.amount,
            valid.description,
            valid.tx_type,
            valid.currency,
        );
        let saved = self.store.save(tx)?;

        tracing::debug!(id = %saved.id, "transaction created");
        Ok(TransactionResponse::from(&saved))
    }

    /// Look up one record, served from the read-through cache when enabled.
    pub fn get(&self, id: &str) -> Result<TransactionResponse, AppError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(id) {
                tracing::trace!(id, "cache hit");
                return Ok(hit);
            }
        }

        let tx = self
            .store
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let response = TransactionResponse::from(&tx);

        if let Some(cache) = &self.cache {
            cache.put(response.clone());
        }
        Ok(response)
    }

    pub fn list(&self) -> Vec<TransactionResponse> {
        self.store
            .find_all()
            .iter()
            .map(TransactionResponse::from)
            .collect()
    }

    pub fn list_page(&self, page: i64, size: i64) -> Result<Vec<TransactionResponse>, AppError> {
        let records = self.store.find_page(page, size)?;
        Ok(records.iter().map(TransactionResponse::from).collect())
    }

    /// Overwrite the four request fields of an existing record. The id,
    /// timestamp and status are preserved. The cached projection for the id
    /// is dropped before this returns, so no caller can observe the stale
    /// record after a successful update.
    pub fn update(
        &self,
        id: &str,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        let valid = validate_request(&request)?;

        let mut tx = self
            .store
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tx.amount = valid.amount;
        tx.description = valid.description;
        tx.tx_type = valid.tx_type;
        tx.currency = valid.currency;

        self.store.update(tx.clone())?;
        if let Some(cache) = &self.cache {
            cache.invalidate(id);
        }

        tracing::debug!(id, "transaction updated");
        Ok(TransactionResponse::from(&tx))
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete_by_id(id)?;
        if let Some(cache) = &self.cache {
            cache.invalidate(id);
        }

        tracing::debug!(id, "transaction deleted");
        Ok(())
    }

    pub fn count(&self) -> i64 {
        self.store.count()
    }
}
