//! HTTP handlers for /api/transactions.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::schemas::{CountResponse, DeleteResponse, TransactionRequest};

const DEFAULT_PAGE: i64 = 0;
const DEFAULT_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.service.create(request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.service.get(&id)?;
    Ok(Json(response))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let size = query.size.unwrap_or(DEFAULT_SIZE);

    let responses = state.service.list_page(page, size)?;
    Ok(Json(responses))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.service.update(&id, request)?;
    Ok(Json(response))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(&id)?;
    Ok(Json(DeleteResponse {
        message: "Transaction deleted successfully".to_string(),
    }))
}

pub async fn count_transactions(State(state): State<AppState>) -> impl IntoResponse {
    Json(CountResponse {
        count: state.service.count(),
    })
}
