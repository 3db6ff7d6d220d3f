use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::cache_dto::{ScoreRangeQuery, SortedSetMemberRequest};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, cache_error, not_found_error, AppResult};

pub fn create_sorted_set_router() -> Router<AppState> {
    Router::new()
        .route("/redis/sortedset/:key/add", post(add_to_sorted_set))
        .route("/redis/sortedset/:key/range", get(get_sorted_set_range))
        .route("/redis/sortedset/:key/score/:member", get(get_sorted_set_score))
        .route("/redis/sortedset/:key/length", get(get_sorted_set_length))
}

async fn add_to_sorted_set(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<SortedSetMemberRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    let added = state
        .redis
        .sorted_set_add(&key, &request.member, request.score)
        .await
        .map_err(cache_error("Error adding to Redis sorted set"))?;

    Ok(Json(json!({
        "key": key,
        "member": request.member,
        "score": request.score,
        "added": added,
        "operation": "SortedSetAdd"
    })))
}

async fn get_sorted_set_range(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(range): Query<ScoreRangeQuery>,
) -> AppResult<Json<Value>> {
    if range.min.is_nan() || range.max.is_nan() {
        return Err(bad_request_error("min and max must be numbers"));
    }

    let members = state
        .redis
        .sorted_set_range_by_score(&key, range.min, range.max)
        .await
        .map_err(cache_error("Error getting Redis sorted set range"))?;

    // Los límites infinitos se serializan como null
    Ok(Json(json!({
        "key": key,
        "members": members,
        "min": range.min,
        "max": range.max,
        "type": "SortedSet"
    })))
}

async fn get_sorted_set_score(
    State(state): State<AppState>,
    Path((key, member)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let score = state
        .redis
        .sorted_set_score(&key, &member)
        .await
        .map_err(cache_error("Error getting Redis sorted set score"))?
        .ok_or_else(|| {
            not_found_error(format!("Member '{}' in sorted set '{}' not found", member, key))
        })?;

    Ok(Json(json!({
        "key": key,
        "member": member,
        "score": score,
        "type": "SortedSet"
    })))
}

async fn get_sorted_set_length(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let length = state
        .redis
        .sorted_set_length(&key)
        .await
        .map_err(cache_error("Error getting Redis sorted set length"))?;

    Ok(Json(json!({
        "key": key,
        "length": length,
        "type": "SortedSet"
    })))
}
