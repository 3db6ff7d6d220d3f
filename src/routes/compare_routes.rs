//! Comparación entre backends y health check

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::utils::errors::{cache_error, AppResult};

pub fn create_compare_router() -> Router<AppState> {
    Router::new()
        .route("/compare/:key", get(compare_caches))
        .route("/health", get(health_check))
}

/// Dos lecturas independientes, sin reconciliación
async fn compare_caches(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Value>> {
    let memory_value = state
        .memory
        .get::<String>(&key)
        .map_err(cache_error("Error comparing caches"))?;
    let redis_value = state
        .redis
        .get::<String>(&key)
        .await
        .map_err(cache_error("Error comparing caches"))?;

    Ok(Json(json!({
        "key": key,
        "memoryCacheExists": memory_value.is_some(),
        "redisCacheExists": redis_value.is_some(),
        "memoryCacheValue": memory_value,
        "redisCacheValue": redis_value
    })))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let redis_connected = state.redis.is_connected().await;
    let status = if redis_connected { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "redisConnected": redis_connected,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
