//! Configuración del entorno
//!
//! Variables leídas al arrancar (después de `dotenvy::dotenv()`):
//! `HOST`, `PORT`, `REDIS_URL`, `MEMORY_CACHE_MAX_CAPACITY`, `CORS_ORIGINS`.

use std::env;

use anyhow::{Context, Result};

use crate::cache::CacheConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub cache: CacheConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
            cache: CacheConfig::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", port))?,
            None => defaults.port,
        };

        let memory_max_capacity = match lookup("MEMORY_CACHE_MAX_CAPACITY") {
            Some(capacity) => capacity.parse().with_context(|| {
                format!("MEMORY_CACHE_MAX_CAPACITY must be a valid number, got '{}'", capacity)
            })?,
            None => defaults.cache.memory_max_capacity,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            cache: CacheConfig {
                redis_url: lookup("REDIS_URL").unwrap_or(defaults.cache.redis_url),
                memory_max_capacity,
            },
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
