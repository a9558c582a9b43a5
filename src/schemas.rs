//! Request and response payloads for the transaction API.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Body of create and update requests. Every field is optional at the
/// serde level so that missing or blank fields surface as validation
/// errors with the proper message instead of deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub currency: Option<String>,
}

/// Detached projection of a stored record. Callers only ever see these,
/// never the live record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub amount: BigDecimal,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            amount: tx.amount.clone(),
            description: tx.description.clone(),
            tx_type: tx.tx_type.clone(),
            currency: tx.currency.clone(),
            timestamp: tx.timestamp,
            status: tx.status.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
