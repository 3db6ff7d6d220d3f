//! Endpoints Redis básicos: valores JSON, strings y expiración

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::cache_dto::{CacheRequest, ExpireRequest};
use crate::state::AppState;
use crate::utils::errors::{cache_error, not_found_error, AppResult};

pub fn create_redis_router() -> Router<AppState> {
    Router::new()
        .route("/redis", post(set_to_redis_cache))
        .route(
            "/redis/:key",
            get(get_from_redis_cache).delete(remove_from_redis_cache),
        )
        .route(
            "/redis/check/:key",
            get(check_redis_key_exists).post(expire_key_named_check),
        )
        .route(
            "/redis/string",
            post(set_redis_string)
                .get(get_key_named_string)
                .delete(remove_key_named_string),
        )
        .route(
            "/redis/string/:key",
            get(get_redis_string).post(expire_key_named_string),
        )
        .route("/redis/:key/expire", post(set_expiration))
        .route("/redis/:key/ttl", get(get_time_to_live))
}

async fn get_from_redis_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let value = state
        .redis
        .get::<String>(&key)
        .await
        .map_err(cache_error("Error retrieving from Redis cache"))?
        .ok_or_else(|| not_found_error(format!("Key '{}' not found in Redis cache", key)))?;

    Ok(Json(json!({
        "key": key,
        "value": value,
        "cacheType": "Redis"
    })))
}

async fn set_to_redis_cache(
    State(state): State<AppState>,
    Json(request): Json<CacheRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    state
        .redis
        .set(&request.key, &request.value, request.expiration())
        .await
        .map_err(cache_error("Error setting to Redis cache"))?;

    Ok(Json(json!({
        "message": format!("Value set in Redis cache with key '{}'", request.key),
        "expiration": format!("{} minutes", request.expiration_in_minutes)
    })))
}

async fn remove_from_redis_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    state
        .redis
        .remove(&key)
        .await
        .map_err(cache_error("Error removing from Redis cache"))?;

    Ok(Json(json!({
        "message": format!("Key '{}' removed from Redis cache", key)
    })))
}

async fn check_redis_key_exists(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let exists = state
        .redis
        .exists(&key)
        .await
        .map_err(cache_error("Error checking Redis key existence"))?;

    Ok(Json(json!({ "key": key, "exists": exists })))
}

async fn get_redis_string(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let value = state
        .redis
        .get_string(&key)
        .await
        .map_err(cache_error("Error retrieving Redis string"))?
        .ok_or_else(|| not_found_error(format!("Key '{}' not found in Redis cache", key)))?;

    Ok(Json(json!({
        "key": key,
        "value": value,
        "type": "String"
    })))
}

async fn set_redis_string(
    State(state): State<AppState>,
    Json(request): Json<CacheRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    state
        .redis
        .set_string(&request.key, &request.value, Some(request.expiration()))
        .await
        .map_err(cache_error("Error setting Redis string"))?;

    Ok(Json(json!({
        "message": format!("String value set in Redis with key '{}'", request.key),
        "expiration": format!("{} minutes", request.expiration_in_minutes)
    })))
}

async fn set_expiration(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<ExpireRequest>,
) -> AppResult<Json<Value>> {
    request.validate()?;

    let success = state
        .redis
        .expire(&key, request.expiration())
        .await
        .map_err(cache_error("Error setting Redis key expiration"))?;

    Ok(Json(json!({
        "key": key,
        "expirationInMinutes": request.expiration_in_minutes,
        "success": success,
        "operation": "Expire"
    })))
}

async fn get_time_to_live(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let ttl = state
        .redis
        .time_to_live(&key)
        .await
        .map_err(cache_error("Error getting Redis TTL"))?;

    Ok(Json(json!({
        "key": key,
        "timeToLive": ttl.map(|ttl| ttl.as_secs_f64()),
        "unit": "seconds"
    })))
}

// Las rutas estáticas `/redis/string` y `/redis/check` tapan a `/redis/:key` cuando
// la clave se llama igual; estos handlers reenvían a los genéricos con la clave fija.

async fn get_key_named_string(state: State<AppState>) -> AppResult<Json<Value>> {
    get_from_redis_cache(state, Path("string".to_string())).await
}

async fn remove_key_named_string(state: State<AppState>) -> AppResult<Json<Value>> {
    remove_from_redis_cache(state, Path("string".to_string())).await
}

async fn expire_key_named_string(
    state: State<AppState>,
    Path(action): Path<String>,
    request: Json<ExpireRequest>,
) -> AppResult<Response> {
    expire_reserved_key("string", state, &action, request).await
}

async fn expire_key_named_check(
    state: State<AppState>,
    Path(action): Path<String>,
    request: Json<ExpireRequest>,
) -> AppResult<Response> {
    expire_reserved_key("check", state, &action, request).await
}

async fn expire_reserved_key(
    key: &str,
    state: State<AppState>,
    action: &str,
    request: Json<ExpireRequest>,
) -> AppResult<Response> {
    if action != "expire" {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let response = set_expiration(state, Path(key.to_string()), request).await?;
    Ok(response.into_response())
}
