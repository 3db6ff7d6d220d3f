//! Cache en memoria del proceso
//!
//! Envoltorio fino sobre `moka::sync::Cache`. Cada entrada guarda su propio
//! tiempo de vida, de modo que dos claves escritas con expiraciones distintas
//! caducan de forma independiente.

use std::time::{Duration, Instant};

use moka::{sync::Cache, Expiry};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{CacheConfig, CacheResult};

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: Value,
    ttl: Duration,
}

/// Expiración absoluta por entrada, reiniciada en cada escritura
struct PerEntryExpiry;

impl Expiry<String, MemoryEntry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &MemoryEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &MemoryEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Cache en memoria con expiración por entrada
#[derive(Clone)]
pub struct MemoryCache {
    cache: Cache<String, MemoryEntry>,
}

impl MemoryCache {
    /// Crear nuevo cache en memoria
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.memory_max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self { cache }
    }

    /// Leer un valor. Una clave ausente o caducada devuelve `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.cache.get(key) {
            Some(entry) => {
                debug!("📥 Memory HIT para clave: {}", key);
                Ok(Some(serde_json::from_value(entry.value)?))
            }
            None => {
                debug!("❌ Memory MISS para clave: {}", key);
                Ok(None)
            }
        }
    }

    /// Guardar un valor con expiración absoluta relativa a ahora
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) -> CacheResult<()> {
        let value = serde_json::to_value(value)?;
        self.cache.insert(key.to_string(), MemoryEntry { value, ttl });
        debug!("💾 Memory SET para clave: {} (TTL: {}s)", key, ttl.as_secs());
        Ok(())
    }

    /// Eliminar una clave; no falla si la clave no existe
    pub fn remove(&self, key: &str) {
        self.cache.invalidate(key);
        debug!("🗑️ Memory DELETE para clave: {}", key);
    }
}
