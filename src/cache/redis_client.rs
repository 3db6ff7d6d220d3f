use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{CacheConfig, CacheError, CacheResult, RedisOperations};

/// Cliente Redis sobre un `ConnectionManager` multiplexado
#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
    manager: Arc<RwLock<Option<ConnectionManager>>>,
}

impl RedisClient {
    /// Crear nuevo cliente Redis y verificar la conexión
    pub async fn new(config: &CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client.clone()).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self {
            client,
            manager: Arc::new(RwLock::new(Some(manager))),
        })
    }

    /// Conexión activa, o error si se llamó a `disconnect`
    async fn connection(&self) -> CacheResult<ConnectionManager> {
        self.manager
            .read()
            .await
            .clone()
            .ok_or(CacheError::Disconnected)
    }

    async fn ping(conn: &mut ConnectionManager) -> bool {
        match redis::cmd("PING").query_async::<_, String>(conn).await {
            Ok(response) => response == "PONG",
            Err(e) => {
                warn!("⚠️ PING a Redis falló: {}", e);
                false
            }
        }
    }
}

/// Redis solo acepta `-inf`/`+inf` como límites abiertos
fn score_bound(value: f64) -> String {
    if value == f64::INFINITY {
        "+inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        value.to_string()
    }
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis().try_into().unwrap_or(u64::MAX)
}

#[async_trait::async_trait]
impl RedisOperations for RedisClient {
    async fn connect(&self) -> bool {
        let mut guard = self.manager.write().await;

        if guard.is_none() {
            match ConnectionManager::new(self.client.clone()).await {
                Ok(manager) => {
                    info!("🔗 Conexión Redis restablecida");
                    *guard = Some(manager);
                }
                Err(e) => {
                    warn!("⚠️ No se pudo conectar a Redis: {}", e);
                    return false;
                }
            }
        }

        match guard.as_mut() {
            Some(conn) => Self::ping(conn).await,
            None => false,
        }
    }

    async fn disconnect(&self) {
        if self.manager.write().await.take().is_some() {
            info!("🔌 Conexión Redis cerrada");
        }
    }

    async fn is_connected(&self) -> bool {
        match self.connection().await {
            Ok(mut conn) => Self::ping(&mut conn).await,
            Err(_) => false,
        }
    }

    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>> {
        let mut conn = self.connection().await?;

        let raw: Option<String> = conn.get(key).await?;
        match raw {
            Some(text) if !text.is_empty() => {
                debug!("📥 Cache HIT para clave: {}", key);
                Ok(Some(serde_json::from_str(&text)?))
            }
            _ => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, value: &Value, ttl: Duration) -> CacheResult<()> {
        let serialized = serde_json::to_string(value)?;
        self.set_string(key, &serialized, Some(ttl)).await
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.connection().await?;

        let count: i64 = conn.del(key).await?;
        debug!("🗑️ Cache DELETE para clave: {} (eliminados: {})", key, count);
        Ok(())
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;

        let exists: bool = conn.exists(key).await?;
        debug!("🔍 Cache EXISTS para clave {}: {}", key, exists);
        Ok(exists)
    }

    async fn get_string(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;

        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()> {
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(millis(ttl));
        }
        let _: () = cmd.query_async(&mut conn).await?;

        debug!(
            "💾 Cache SET para clave: {} (TTL: {:?})",
            key,
            ttl.map(|t| t.as_secs())
        );
        Ok(())
    }

    async fn list_push(&self, key: &str, value: &str) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let length: i64 = conn.rpush(key, value).await?;
        Ok(length)
    }

    async fn list_push_range(&self, key: &str, values: &[String]) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let length: i64 = conn.rpush(key, values).await?;
        Ok(length)
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let values: Vec<String> = conn.lrange(key, start, stop).await?;
        Ok(values)
    }

    async fn list_pop(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.lpop(key, None).await?;
        Ok(value)
    }

    async fn list_length(&self, key: &str) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let length: i64 = conn.llen(key).await?;
        Ok(length)
    }

    async fn set_add(&self, key: &str, member: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let added: i64 = conn.sadd(key, member).await?;
        Ok(added > 0)
    }

    async fn set_remove(&self, key: &str, member: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let removed: i64 = conn.srem(key, member).await?;
        Ok(removed > 0)
    }

    async fn set_members(&self, key: &str) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn.smembers(key).await?;
        Ok(members)
    }

    async fn set_contains(&self, key: &str, member: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let contains: bool = conn.sismember(key, member).await?;
        Ok(contains)
    }

    async fn set_size(&self, key: &str) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let size: i64 = conn.scard(key).await?;
        Ok(size)
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let created: i64 = conn.hset(key, field, value).await?;
        Ok(created > 0)
    }

    async fn hash_get(&self, key: &str, field: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.hget(key, field).await?;
        Ok(value)
    }

    async fn hash_get_all(&self, key: &str) -> CacheResult<HashMap<String, String>> {
        let mut conn = self.connection().await?;
        let fields: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(fields)
    }

    async fn hash_delete(&self, key: &str, field: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let deleted: i64 = conn.hdel(key, field).await?;
        Ok(deleted > 0)
    }

    async fn hash_exists(&self, key: &str, field: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn.hexists(key, field).await?;
        Ok(exists)
    }

    async fn sorted_set_add(&self, key: &str, member: &str, score: f64) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let added: i64 = conn.zadd(key, member, score).await?;
        Ok(added > 0)
    }

    async fn sorted_set_range_by_score(&self, key: &str, min: f64, max: f64) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn
            .zrangebyscore(key, score_bound(min), score_bound(max))
            .await?;
        Ok(members)
    }

    async fn sorted_set_score(&self, key: &str, member: &str) -> CacheResult<Option<f64>> {
        let mut conn = self.connection().await?;
        let score: Option<f64> = conn.zscore(key, member).await?;
        Ok(score)
    }

    async fn sorted_set_length(&self, key: &str) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let length: i64 = conn.zcard(key).await?;
        Ok(length)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<bool> {
        let mut conn = self.connection().await?;

        let applied: bool = redis::cmd("PEXPIRE")
            .arg(key)
            .arg(millis(ttl))
            .query_async(&mut conn)
            .await?;
        debug!("⏰ Cache EXPIRE para clave {}: {}s (aplicado: {})", key, ttl.as_secs(), applied);
        Ok(applied)
    }

    async fn time_to_live(&self, key: &str) -> CacheResult<Option<Duration>> {
        let mut conn = self.connection().await?;

        // -2: la clave no existe, -1: la clave no tiene expiración
        let ttl: i64 = redis::cmd("PTTL").arg(key).query_async(&mut conn).await?;
        if ttl >= 0 {
            Ok(Some(Duration::from_millis(ttl as u64)))
        } else {
            Ok(None)
        }
    }
}
