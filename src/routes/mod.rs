pub mod compare_routes;
pub mod memory_routes;
pub mod redis_hash_routes;
pub mod redis_list_routes;
pub mod redis_routes;
pub mod redis_set_routes;
pub mod redis_sorted_set_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Prefijo común de todos los endpoints de cache
pub const API_PREFIX: &str = "/api/cache";

/// Router de cache sin estado ni capas
pub fn create_cache_router() -> Router<AppState> {
    Router::new()
        .merge(memory_routes::create_memory_router())
        .merge(redis_routes::create_redis_router())
        .merge(redis_list_routes::create_list_router())
        .merge(redis_set_routes::create_set_router())
        .merge(redis_hash_routes::create_hash_router())
        .merge(redis_sorted_set_routes::create_sorted_set_router())
        .merge(compare_routes::create_compare_router())
}

/// Aplicación completa: rutas bajo `/api/cache`, trazas HTTP y CORS
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest(API_PREFIX, create_cache_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}
