use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::cache_dto::CacheRequest;
use crate::state::AppState;
use crate::utils::errors::{cache_error, not_found_error, AppResult};

pub fn create_memory_router() -> Router<AppState> {
    Router::new()
        .route("/memory", post(set_to_memory_cache))
        .route(
            "/memory/:key",
            get(get_from_memory_cache).delete(remove_from_memory_cache),
        )
}

async fn get_from_memory_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let value = state
        .memory
        .get::<String>(&key)
        .map_err(cache_error("Error retrieving from memory cache"))?
        .ok_or_else(|| not_found_error(format!("Key '{}' not found in memory cache", key)))?;

    Ok(Json(json!({
        "key": key,
        "value": value,
        "cacheType": "Memory"
    })))
}

async fn set_to_memory_cache(
    State(state): State<AppState>,
    Json(request): Json<CacheRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    state
        .memory
        .set(&request.key, &request.value, request.expiration())
        .map_err(cache_error("Error setting to memory cache"))?;

    Ok(Json(json!({
        "message": format!("Value set in memory cache with key '{}'", request.key),
        "expiration": format!("{} minutes", request.expiration_in_minutes)
    })))
}

async fn remove_from_memory_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    state.memory.remove(&key);

    Ok(Json(json!({
        "message": format!("Key '{}' removed from memory cache", key)
    })))
}
