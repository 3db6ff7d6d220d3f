#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use dual_cache_api::cache::{CacheConfig, CacheError, CacheResult, MemoryCache, RedisOperations};
use dual_cache_api::routes::create_app;
use dual_cache_api::state::AppState;

#[derive(Debug, Clone)]
enum Stored {
    Text(String),
    List(VecDeque<String>),
    Set(BTreeSet<String>),
    Hash(HashMap<String, String>),
    Sorted(Vec<(String, f64)>),
}

#[derive(Debug, Clone)]
struct Entry {
    value: Stored,
    expires_at: Option<Instant>,
}

/// Redis en proceso con la semántica de los comandos usados por la API
#[derive(Default)]
pub struct FakeRedis {
    data: Mutex<HashMap<String, Entry>>,
    disconnected: AtomicBool,
    failing: AtomicBool,
}

fn wrong_type() -> CacheError {
    CacheError::Redis(redis::RedisError::from((
        redis::ErrorKind::TypeError,
        "WRONGTYPE Operation against a key holding the wrong kind of value",
    )))
}

impl FakeRedis {
    /// Simular un fallo del backend en todas las operaciones
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::Redis(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            ))));
        }
        if self.disconnected.load(Ordering::SeqCst) {
            return Err(CacheError::Disconnected);
        }
        Ok(())
    }

    /// Ejecuta `f` sobre el mapa tras purgar claves caducadas y colecciones vacías
    fn with_data<R>(&self, f: impl FnOnce(&mut HashMap<String, Entry>) -> CacheResult<R>) -> CacheResult<R> {
        self.check()?;
        let mut data = self.data.lock().unwrap();
        let now = Instant::now();
        data.retain(|_, entry| entry.expires_at.map_or(true, |at| at > now));
        let result = f(&mut data);
        data.retain(|_, entry| match &entry.value {
            Stored::Text(_) => true,
            Stored::List(l) => !l.is_empty(),
            Stored::Set(s) => !s.is_empty(),
            Stored::Hash(h) => !h.is_empty(),
            Stored::Sorted(z) => !z.is_empty(),
        });
        result
    }
}

macro_rules! collection {
    ($data:expr, $key:expr, $variant:ident, $default:expr) => {
        match &mut $data
            .entry($key.to_string())
            .or_insert_with(|| Entry {
                value: Stored::$variant($default),
                expires_at: None,
            })
            .value
        {
            Stored::$variant(inner) => inner,
            _ => return Err(wrong_type()),
        }
    };
}

macro_rules! read_collection {
    ($data:expr, $key:expr, $variant:ident) => {
        match $data.get($key).map(|e| &e.value) {
            Some(Stored::$variant(inner)) => Some(inner),
            Some(_) => return Err(wrong_type()),
            None => None,
        }
    };
}

#[async_trait::async_trait]
impl RedisOperations for FakeRedis {
    async fn connect(&self) -> bool {
        self.disconnected.store(false, Ordering::SeqCst);
        !self.failing.load(Ordering::SeqCst)
    }

    async fn disconnect(&self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }

    async fn is_connected(&self) -> bool {
        self.check().is_ok()
    }

    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>> {
        match self.get_string(key).await? {
            Some(text) if !text.is_empty() => Ok(Some(serde_json::from_str(&text)?)),
            _ => Ok(None),
        }
    }

    async fn set_json(&self, key: &str, value: &Value, ttl: Duration) -> CacheResult<()> {
        let text = serde_json::to_string(value)?;
        self.set_string(key, &text, Some(ttl)).await
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        self.with_data(|data| {
            data.remove(key);
            Ok(())
        })
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        self.with_data(|data| Ok(data.contains_key(key)))
    }

    async fn get_string(&self, key: &str) -> CacheResult<Option<String>> {
        self.with_data(|data| match data.get(key).map(|e| &e.value) {
            Some(Stored::Text(text)) => Ok(Some(text.clone())),
            Some(_) => Err(wrong_type()),
            None => Ok(None),
        })
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()> {
        self.with_data(|data| {
            data.insert(
                key.to_string(),
                Entry {
                    value: Stored::Text(value.to_string()),
                    expires_at: ttl.map(|ttl| Instant::now() + ttl),
                },
            );
            Ok(())
        })
    }

    async fn list_push(&self, key: &str, value: &str) -> CacheResult<i64> {
        self.list_push_range(key, &[value.to_string()]).await
    }

    async fn list_push_range(&self, key: &str, values: &[String]) -> CacheResult<i64> {
        self.with_data(|data| {
            let list = collection!(data, key, List, VecDeque::new());
            list.extend(values.iter().cloned());
            Ok(list.len() as i64)
        })
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> CacheResult<Vec<String>> {
        self.with_data(|data| {
            let Some(list) = read_collection!(data, key, List) else {
                return Ok(Vec::new());
            };
            let len = list.len() as isize;
            let start = if start < 0 { (len + start).max(0) } else { start };
            let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
            if start > stop || start >= len {
                return Ok(Vec::new());
            }
            Ok(list
                .iter()
                .skip(start as usize)
                .take((stop - start + 1) as usize)
                .cloned()
                .collect())
        })
    }

    async fn list_pop(&self, key: &str) -> CacheResult<Option<String>> {
        self.with_data(|data| {
            let value = match data.get_mut(key).map(|e| &mut e.value) {
                Some(Stored::List(list)) => list.pop_front(),
                Some(_) => return Err(wrong_type()),
                None => None,
            };
            Ok(value)
        })
    }

    async fn list_length(&self, key: &str) -> CacheResult<i64> {
        self.with_data(|data| Ok(read_collection!(data, key, List).map_or(0, |l| l.len() as i64)))
    }

    async fn set_add(&self, key: &str, member: &str) -> CacheResult<bool> {
        self.with_data(|data| {
            let set = collection!(data, key, Set, BTreeSet::new());
            Ok(set.insert(member.to_string()))
        })
    }

    async fn set_remove(&self, key: &str, member: &str) -> CacheResult<bool> {
        self.with_data(|data| match data.get_mut(key).map(|e| &mut e.value) {
            Some(Stored::Set(set)) => Ok(set.remove(member)),
            Some(_) => Err(wrong_type()),
            None => Ok(false),
        })
    }

    async fn set_members(&self, key: &str) -> CacheResult<Vec<String>> {
        self.with_data(|data| {
            Ok(read_collection!(data, key, Set)
                .map(|s| s.iter().cloned().collect())
                .unwrap_or_default())
        })
    }

    async fn set_contains(&self, key: &str, member: &str) -> CacheResult<bool> {
        self.with_data(|data| Ok(read_collection!(data, key, Set).map_or(false, |s| s.contains(member))))
    }

    async fn set_size(&self, key: &str) -> CacheResult<i64> {
        self.with_data(|data| Ok(read_collection!(data, key, Set).map_or(0, |s| s.len() as i64)))
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> CacheResult<bool> {
        self.with_data(|data| {
            let hash = collection!(data, key, Hash, HashMap::new());
            Ok(hash.insert(field.to_string(), value.to_string()).is_none())
        })
    }

    async fn hash_get(&self, key: &str, field: &str) -> CacheResult<Option<String>> {
        self.with_data(|data| Ok(read_collection!(data, key, Hash).and_then(|h| h.get(field).cloned())))
    }

    async fn hash_get_all(&self, key: &str) -> CacheResult<HashMap<String, String>> {
        self.with_data(|data| Ok(read_collection!(data, key, Hash).cloned().unwrap_or_default()))
    }

    async fn hash_delete(&self, key: &str, field: &str) -> CacheResult<bool> {
        self.with_data(|data| match data.get_mut(key).map(|e| &mut e.value) {
            Some(Stored::Hash(hash)) => Ok(hash.remove(field).is_some()),
            Some(_) => Err(wrong_type()),
            None => Ok(false),
        })
    }

    async fn hash_exists(&self, key: &str, field: &str) -> CacheResult<bool> {
        self.with_data(|data| Ok(read_collection!(data, key, Hash).map_or(false, |h| h.contains_key(field))))
    }

    async fn sorted_set_add(&self, key: &str, member: &str, score: f64) -> CacheResult<bool> {
        self.with_data(|data| {
            let zset = collection!(data, key, Sorted, Vec::new());
            match zset.iter_mut().find(|(m, _)| m == member) {
                Some(existing) => {
                    existing.1 = score;
                    Ok(false)
                }
                None => {
                    zset.push((member.to_string(), score));
                    Ok(true)
                }
            }
        })
    }

    async fn sorted_set_range_by_score(&self, key: &str, min: f64, max: f64) -> CacheResult<Vec<String>> {
        self.with_data(|data| {
            let Some(zset) = read_collection!(data, key, Sorted) else {
                return Ok(Vec::new());
            };
            let mut in_range: Vec<&(String, f64)> =
                zset.iter().filter(|(_, s)| *s >= min && *s <= max).collect();
            in_range.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
            Ok(in_range.into_iter().map(|(m, _)| m.clone()).collect())
        })
    }

    async fn sorted_set_score(&self, key: &str, member: &str) -> CacheResult<Option<f64>> {
        self.with_data(|data| {
            Ok(read_collection!(data, key, Sorted)
                .and_then(|z| z.iter().find(|(m, _)| m == member).map(|(_, s)| *s)))
        })
    }

    async fn sorted_set_length(&self, key: &str) -> CacheResult<i64> {
        self.with_data(|data| Ok(read_collection!(data, key, Sorted).map_or(0, |z| z.len() as i64)))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<bool> {
        self.with_data(|data| match data.get_mut(key) {
            Some(entry) => {
                entry.expires_at = Some(Instant::now() + ttl);
                Ok(true)
            }
            None => Ok(false),
        })
    }

    async fn time_to_live(&self, key: &str) -> CacheResult<Option<Duration>> {
        self.with_data(|data| {
            Ok(data
                .get(key)
                .and_then(|e| e.expires_at)
                .map(|at| at.saturating_duration_since(Instant::now())))
        })
    }
}

/// App de test: cache en memoria real + Redis falso
pub struct TestApp {
    pub router: Router,
    pub memory: MemoryCache,
    pub redis: Arc<FakeRedis>,
}

pub fn create_test_app() -> TestApp {
    let memory = MemoryCache::new(&CacheConfig::default());
    let redis = Arc::new(FakeRedis::default());
    let state = AppState::new(memory.clone(), redis.clone());

    TestApp {
        router: create_app(state, &[]),
        memory,
        redis,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("response body is not JSON")
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}
