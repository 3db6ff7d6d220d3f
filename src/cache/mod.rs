//! Cache
//!
//! Este módulo contiene los dos backends de cache: el cache en memoria del
//! proceso y el cliente Redis.

pub mod cache_config;
pub mod error;
pub mod memory_cache;
pub mod operations;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use error::{CacheError, CacheResult};
pub use memory_cache::MemoryCache;
pub use operations::RedisOperations;
pub use redis_client::RedisClient;
