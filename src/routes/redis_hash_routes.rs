use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::cache_dto::HashFieldRequest;
use crate::state::AppState;
use crate::utils::errors::{cache_error, not_found_error, AppResult};

pub fn create_hash_router() -> Router<AppState> {
    Router::new()
        .route("/redis/hash/:key/set", post(set_hash_field))
        .route("/redis/hash/:key/get/:field", get(get_hash_field))
        .route("/redis/hash/:key/all", get(get_all_hash_fields))
        .route("/redis/hash/:key/exists/:field", get(check_hash_field_exists))
        .route("/redis/hash/:key/delete/:field", delete(delete_hash_field))
}

async fn set_hash_field(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<HashFieldRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    let success = state
        .redis
        .hash_set(&key, &request.field, &request.value)
        .await
        .map_err(cache_error("Error setting Redis hash field"))?;

    Ok(Json(json!({
        "key": key,
        "field": request.field,
        "value": request.value,
        "success": success,
        "operation": "HashSet"
    })))
}

async fn get_hash_field(
    State(state): State<AppState>,
    Path((key, field)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let value = state
        .redis
        .hash_get(&key, &field)
        .await
        .map_err(cache_error("Error getting Redis hash field"))?
        .ok_or_else(|| not_found_error(format!("Field '{}' in hash '{}' not found", field, key)))?;

    Ok(Json(json!({
        "key": key,
        "field": field,
        "value": value,
        "type": "Hash"
    })))
}

async fn get_all_hash_fields(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let fields = state
        .redis
        .hash_get_all(&key)
        .await
        .map_err(cache_error("Error getting all Redis hash fields"))?;

    Ok(Json(json!({
        "key": key,
        "fields": fields,
        "type": "Hash"
    })))
}

async fn check_hash_field_exists(
    State(state): State<AppState>,
    Path((key, field)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let exists = state
        .redis
        .hash_exists(&key, &field)
        .await
        .map_err(cache_error("Error checking Redis hash field exists"))?;

    Ok(Json(json!({
        "key": key,
        "field": field,
        "exists": exists,
        "type": "Hash"
    })))
}

async fn delete_hash_field(
    State(state): State<AppState>,
    Path((key, field)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let deleted = state
        .redis
        .hash_delete(&key, &field)
        .await
        .map_err(cache_error("Error deleting Redis hash field"))?;

    Ok(Json(json!({
        "key": key,
        "field": field,
        "deleted": deleted,
        "operation": "HashDelete"
    })))
}
