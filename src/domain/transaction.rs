//! Transaction domain entity.
//! Framework-agnostic representation of a stored transaction record.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_STATUS: &str = "COMPLETED";

/// A single transaction record. The id and timestamp are assigned once at
/// construction and never change, even across updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: BigDecimal,
    pub description: Option<String>,
    pub tx_type: String,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

impl Transaction {
    pub fn new(
        amount: BigDecimal,
        description: Option<String>,
        tx_type: String,
        currency: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            description,
            tx_type,
            currency,
            timestamp: Utc::now(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}
