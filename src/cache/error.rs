//! Errores de los adaptadores de cache

use thiserror::Error;

/// Fallos inesperados de un backend de cache.
///
/// Una clave inexistente nunca es un error: se representa con `Ok(None)`.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Redis connection is closed")]
    Disconnected,
}

/// Resultado de una operación de cache
pub type CacheResult<T> = Result<T, CacheError>;
