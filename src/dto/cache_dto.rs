use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

/// Expiración por defecto para todos los endpoints que la aceptan
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

fn default_expiration_minutes() -> i64 {
    DEFAULT_EXPIRATION_MINUTES
}

/// Límite superior aceptado para `expirationInMinutes` (un año)
pub const MAX_EXPIRATION_MINUTES: i64 = 525_600;

fn minutes(value: i64) -> Duration {
    let seconds = u64::try_from(value).unwrap_or(0).saturating_mul(60);
    Duration::from_secs(seconds)
}

// Request para escribir un valor escalar (memoria, Redis y strings)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CacheRequest {
    #[serde(default, alias = "Key")]
    #[validate(length(min = 1, message = "key must not be empty"))]
    pub key: String,
    #[serde(default, alias = "Value")]
    pub value: String,
    #[serde(default = "default_expiration_minutes", alias = "ExpirationInMinutes")]
    #[validate(range(
        min = 1,
        max = 525600,
        message = "expirationInMinutes must be between 1 and 525600"
    ))]
    pub expiration_in_minutes: i64,
}

impl CacheRequest {
    pub fn expiration(&self) -> Duration {
        minutes(self.expiration_in_minutes)
    }
}

// Request con un único valor (push a lista, add a set)
#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    #[serde(default, alias = "Value")]
    pub value: String,
}

// Request con varios valores para push a lista
#[derive(Debug, Deserialize, Validate)]
pub struct ValuesRequest {
    #[serde(default, alias = "Values")]
    #[validate(length(min = 1, message = "values must not be empty"))]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct HashFieldRequest {
    #[serde(default, alias = "Field")]
    #[validate(length(min = 1, message = "field must not be empty"))]
    pub field: String,
    #[serde(default, alias = "Value")]
    pub value: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SortedSetMemberRequest {
    #[serde(default, alias = "Member")]
    #[validate(length(min = 1, message = "member must not be empty"))]
    pub member: String,
    #[serde(default, alias = "Score")]
    pub score: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpireRequest {
    #[serde(default = "default_expiration_minutes", alias = "ExpirationInMinutes")]
    #[validate(range(
        min = 1,
        max = 525600,
        message = "expirationInMinutes must be between 1 and 525600"
    ))]
    pub expiration_in_minutes: i64,
}

impl ExpireRequest {
    pub fn expiration(&self) -> Duration {
        minutes(self.expiration_in_minutes)
    }
}

// Query de rango de lista: por defecto la lista completa
#[derive(Debug, Deserialize)]
pub struct ListRangeQuery {
    #[serde(default)]
    pub start: isize,
    #[serde(default = "ListRangeQuery::default_stop")]
    pub stop: isize,
}

impl ListRangeQuery {
    fn default_stop() -> isize {
        -1
    }
}

// Query de rango por score: por defecto intervalo abierto (-inf, +inf)
#[derive(Debug, Deserialize)]
pub struct ScoreRangeQuery {
    #[serde(default = "ScoreRangeQuery::default_min")]
    pub min: f64,
    #[serde(default = "ScoreRangeQuery::default_max")]
    pub max: f64,
}

impl ScoreRangeQuery {
    fn default_min() -> f64 {
        f64::NEG_INFINITY
    }

    fn default_max() -> f64 {
        f64::INFINITY
    }
}
