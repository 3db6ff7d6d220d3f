use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::cache_dto::{ListRangeQuery, ValueRequest, ValuesRequest};
use crate::state::AppState;
use crate::utils::errors::{cache_error, not_found_error, AppResult};

pub fn create_list_router() -> Router<AppState> {
    Router::new()
        .route("/redis/list/:key/push", post(push_to_list))
        .route("/redis/list/:key/push-range", post(push_range_to_list))
        .route("/redis/list/:key/range", get(get_list_range))
        .route("/redis/list/:key/pop", get(pop_from_list))
        .route("/redis/list/:key/length", get(get_list_length))
}

async fn push_to_list(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<ValueRequest>,
) -> AppResult<Json<Value>> {
    let count = state
        .redis
        .list_push(&key, &request.value)
        .await
        .map_err(cache_error("Error pushing to Redis list"))?;

    Ok(Json(json!({
        "key": key,
        "value": request.value,
        "newLength": count,
        "operation": "ListPush"
    })))
}

async fn push_range_to_list(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<ValuesRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    let count = state
        .redis
        .list_push_range(&key, &request.values)
        .await
        .map_err(cache_error("Error pushing range to Redis list"))?;

    Ok(Json(json!({
        "key": key,
        "values": request.values,
        "newLength": count,
        "operation": "ListPushRange"
    })))
}

async fn get_list_range(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(range): Query<ListRangeQuery>,
) -> AppResult<Json<Value>> {
    let values = state
        .redis
        .list_range(&key, range.start, range.stop)
        .await
        .map_err(cache_error("Error getting Redis list range"))?;

    Ok(Json(json!({
        "key": key,
        "values": values,
        "type": "List"
    })))
}

async fn pop_from_list(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let value = state
        .redis
        .list_pop(&key)
        .await
        .map_err(cache_error("Error popping from Redis list"))?
        .ok_or_else(|| not_found_error(format!("List '{}' is empty or does not exist", key)))?;

    Ok(Json(json!({
        "key": key,
        "value": value,
        "operation": "ListPop"
    })))
}

async fn get_list_length(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let length = state
        .redis
        .list_length(&key)
        .await
        .map_err(cache_error("Error getting Redis list length"))?;

    Ok(Json(json!({
        "key": key,
        "length": length,
        "type": "List"
    })))
}
