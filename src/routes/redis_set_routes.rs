use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::dto::cache_dto::ValueRequest;
use crate::state::AppState;
use crate::utils::errors::{cache_error, AppResult};

pub fn create_set_router() -> Router<AppState> {
    Router::new()
        .route("/redis/set/:key/add", post(add_to_set))
        .route("/redis/set/:key/members", get(get_set_members))
        .route("/redis/set/:key/contains/:member", get(check_set_contains))
        .route("/redis/set/:key/size", get(get_set_size))
        .route("/redis/set/:key/remove/:member", delete(remove_from_set))
}

async fn add_to_set(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<ValueRequest>,
) -> AppResult<Json<Value>> {
    let added = state
        .redis
        .set_add(&key, &request.value)
        .await
        .map_err(cache_error("Error adding to Redis set"))?;

    Ok(Json(json!({
        "key": key,
        "member": request.value,
        "added": added,
        "operation": "SetAdd"
    })))
}

async fn get_set_members(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let members = state
        .redis
        .set_members(&key)
        .await
        .map_err(cache_error("Error getting Redis set members"))?;

    Ok(Json(json!({
        "key": key,
        "members": members,
        "type": "Set"
    })))
}

async fn check_set_contains(
    State(state): State<AppState>,
    Path((key, member)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let contains = state
        .redis
        .set_contains(&key, &member)
        .await
        .map_err(cache_error("Error checking Redis set contains"))?;

    Ok(Json(json!({
        "key": key,
        "member": member,
        "contains": contains,
        "type": "Set"
    })))
}

async fn get_set_size(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let size = state
        .redis
        .set_size(&key)
        .await
        .map_err(cache_error("Error getting Redis set size"))?;

    Ok(Json(json!({
        "key": key,
        "size": size,
        "type": "Set"
    })))
}

async fn remove_from_set(
    State(state): State<AppState>,
    Path((key, member)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let removed = state
        .redis
        .set_remove(&key, &member)
        .await
        .map_err(cache_error("Error removing from Redis set"))?;

    Ok(Json(json!({
        "key": key,
        "member": member,
        "removed": removed,
        "operation": "SetRemove"
    })))
}
