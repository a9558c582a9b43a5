pub mod cache;
pub mod transaction_service;

pub use cache::ResponseCache;
pub use transaction_service::TransactionService;
