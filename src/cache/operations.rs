//! Operaciones del cache Redis
//!
//! El router depende de este trait y no del cliente concreto, así el
//! adaptador se construye explícitamente en `main` y los tests pueden
//! sustituirlo por una implementación en proceso.

use std::collections::HashMap;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::CacheResult;

#[async_trait::async_trait]
pub trait RedisOperations: Send + Sync {
    // Conexión
    async fn connect(&self) -> bool;
    async fn disconnect(&self);
    async fn is_connected(&self) -> bool;

    // Valores escalares codificados en JSON
    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>>;
    async fn set_json(&self, key: &str, value: &Value, ttl: Duration) -> CacheResult<()>;
    async fn remove(&self, key: &str) -> CacheResult<()>;
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    // Strings sin codificar
    async fn get_string(&self, key: &str) -> CacheResult<Option<String>>;
    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()>;

    // Listas
    async fn list_push(&self, key: &str, value: &str) -> CacheResult<i64>;
    async fn list_push_range(&self, key: &str, values: &[String]) -> CacheResult<i64>;
    async fn list_range(&self, key: &str, start: isize, stop: isize) -> CacheResult<Vec<String>>;
    async fn list_pop(&self, key: &str) -> CacheResult<Option<String>>;
    async fn list_length(&self, key: &str) -> CacheResult<i64>;

    // Sets
    async fn set_add(&self, key: &str, member: &str) -> CacheResult<bool>;
    async fn set_remove(&self, key: &str, member: &str) -> CacheResult<bool>;
    async fn set_members(&self, key: &str) -> CacheResult<Vec<String>>;
    async fn set_contains(&self, key: &str, member: &str) -> CacheResult<bool>;
    async fn set_size(&self, key: &str) -> CacheResult<i64>;

    // Hashes
    async fn hash_set(&self, key: &str, field: &str, value: &str) -> CacheResult<bool>;
    async fn hash_get(&self, key: &str, field: &str) -> CacheResult<Option<String>>;
    async fn hash_get_all(&self, key: &str) -> CacheResult<HashMap<String, String>>;
    async fn hash_delete(&self, key: &str, field: &str) -> CacheResult<bool>;
    async fn hash_exists(&self, key: &str, field: &str) -> CacheResult<bool>;

    // Sorted sets
    async fn sorted_set_add(&self, key: &str, member: &str, score: f64) -> CacheResult<bool>;
    async fn sorted_set_range_by_score(&self, key: &str, min: f64, max: f64) -> CacheResult<Vec<String>>;
    async fn sorted_set_score(&self, key: &str, member: &str) -> CacheResult<Option<f64>>;
    async fn sorted_set_length(&self, key: &str) -> CacheResult<i64>;

    // Expiración
    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<bool>;
    async fn time_to_live(&self, key: &str) -> CacheResult<Option<Duration>>;
}

impl<'a> dyn RedisOperations + 'a {
    /// Leer y deserializar un valor escalar
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.get_json(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serializar y guardar un valor escalar con expiración absoluta
    pub async fn set<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheResult<()> {
        let value = serde_json::to_value(value)?;
        self.set_json(key, &value, ttl).await
    }
}
