use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::RelayError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// POST /
pub async fn handle_query(
    State(state): State<AppState>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, RelayError> {
    let Json(req) = body.map_err(|rejection| RelayError::InvalidRequest(rejection.body_text()))?;
    let answer = state.relay.handle(&req.query).await?;
    Ok(Json(AnswerResponse { answer }))
}
