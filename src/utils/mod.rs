//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores HTTP.

pub mod errors;
