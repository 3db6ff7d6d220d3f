//! Middleware del sistema
//!
//! Este módulo contiene las capas HTTP comunes a todos los endpoints.

pub mod cors;

pub use cors::*;
