//! Configuración de cache
//!
//! Este módulo contiene la configuración compartida por los dos backends
//! de cache (memoria y Redis).

use serde::{Deserialize, Serialize};

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    /// Número máximo de entradas en el cache de memoria
    pub memory_max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            memory_max_capacity: 10_000,
        }
    }
}
