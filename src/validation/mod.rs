//! Business-rule validation for transaction requests.
//!
//! Pure functions only: no I/O, no store access. Rules run in a fixed
//! order and the first failure wins.

use bigdecimal::BigDecimal;
use std::fmt;

use crate::schemas::TransactionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A request that passed validation, with the required fields unwrapped so
/// downstream code never re-checks presence.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub amount: BigDecimal,
    pub description: Option<String>,
    pub tx_type: String,
    pub currency: String,
}

pub fn validate_positive_amount(amount: Option<&BigDecimal>) -> Result<BigDecimal, ValidationError> {
    match amount {
        Some(value) if *value > BigDecimal::from(0) => Ok(value.clone()),
        _ => Err(ValidationError::new("Transaction amount must be positive")),
    }
}

fn validate_required(
    value: Option<&String>,
    message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(ValidationError::new(message)),
    }
}

/// Check a create/update request: amount first, then type, then currency.
/// The description is never validated.
pub fn validate_request(req: &TransactionRequest) -> Result<ValidRequest, ValidationError> {
    let amount = validate_positive_amount(req.amount.as_ref())?;
    let tx_type = validate_required(req.tx_type.as_ref(), "Transaction type is required")?;
    let currency = validate_required(req.currency.as_ref(), "Transaction currency is required")?;

    Ok(ValidRequest {
        amount,
        description: req.description.clone(),
        tx_type,
        currency,
    })
}
