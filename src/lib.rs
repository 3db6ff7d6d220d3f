//! API web de cache dual
//!
//! Expone un cache en memoria del proceso y una instancia Redis a través de
//! endpoints HTTP paralelos, más un endpoint de comparación entre ambos.

pub mod cache;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod utils;
