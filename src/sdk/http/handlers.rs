use super::error::ApiError;
use super::AppState;
use crate::sdk::resolver::{CellQuery, SpatialCellResult};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

pub async fn geocode_to_h3(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SpatialCellResult>, ApiError> {
    let payload: Value = serde_json::from_slice(&body?)?;
    let query = CellQuery::parse(&payload)?;

    let result = state.resolver.resolve(&query).await?;
    log::info!(
        "Resolved {} query to {} at resolution {}",
        query.mode(),
        result.cell_id,
        result.resolution
    );
    Ok(Json(result))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
