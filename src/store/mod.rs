pub mod memory;

pub use memory::InMemoryTransactionStore;

use thiserror::Error;

/// Failures the store can report. Mapped to the service-level taxonomy at
/// the boundary; the store itself knows nothing about HTTP.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Transaction with id {0} not found")]
    NotFound(String),

    #[error("Transaction with id {0} already exists")]
    Duplicate(String),

    #[error("Invalid page or size parameters: page {page}, size {size}")]
    InvalidPagination { page: i64, size: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;
