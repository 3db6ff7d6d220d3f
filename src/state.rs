//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los dos adaptadores se construyen en `main`
//! y se inyectan aquí; no hay estado global.

use std::sync::Arc;

use crate::cache::{MemoryCache, RedisOperations};

#[derive(Clone)]
pub struct AppState {
    pub memory: MemoryCache,
    pub redis: Arc<dyn RedisOperations>,
}

impl AppState {
    pub fn new(memory: MemoryCache, redis: Arc<dyn RedisOperations>) -> Self {
        Self { memory, redis }
    }
}
