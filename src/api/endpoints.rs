//! Capability listing.

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::ApiResult;

const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: Value,
}

/// GET /api - Describe every available endpoint.
pub async fn get_endpoints() -> ApiResult<Json<EndpointsResponse>> {
    let endpoints = serde_json::from_str(ENDPOINTS_JSON)?;
    Ok(Json(EndpointsResponse { endpoints }))
}
