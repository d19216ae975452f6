//! Arithmetic operation endpoints.

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct OperationResponse {
    pub operation: &'static str,
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

/// GET /add/:a/:b — computes `a + b`.
#[tracing::instrument]
pub async fn add(Path((a, b)): Path<(String, String)>) -> Result<Json<OperationResponse>, ApiError> {
    let a = parse_operand(&a)?;
    let b = parse_operand(&b)?;
    let result = calc::add(a, b)?;

    Ok(Json(OperationResponse {
        operation: "addition",
        a,
        b,
        result,
    }))
}

/// GET /sub/:a/:b — computes `a - b`.
#[tracing::instrument]
pub async fn sub(Path((a, b)): Path<(String, String)>) -> Result<Json<OperationResponse>, ApiError> {
    let a = parse_operand(&a)?;
    let b = parse_operand(&b)?;
    let result = calc::sub(a, b)?;

    Ok(Json(OperationResponse {
        operation: "subtraction",
        a,
        b,
        result,
    }))
}

// The routes only accept integer operands; a non-integer segment means
// no matching route, so parse failures map to 404 rather than 400.
fn parse_operand(segment: &str) -> Result<i64, ApiError> {
    segment
        .parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("no route for operand {segment:?}")))
}
