//! Sistema de manejo de errores
//!
//! Este módulo define los errores que pueden devolver los endpoints
//! y su conversión a respuestas HTTP:
//! - no encontrado → 404 con mensaje en texto plano
//! - error del backend → 500 con mensaje fijo, el detalle solo va al log
//! - datos inválidos → 400 con cuerpo JSON

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::cache::CacheError;

/// Mensaje fijo para cualquier fallo inesperado
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{operation}: {source}")]
    Cache {
        operation: &'static str,
        #[source]
        source: CacheError,
    },
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),

            AppError::Cache { operation, source } => {
                error!(operation, error = %source, "❌ {}", operation);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                let body = ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: "VALIDATION_ERROR".to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                let body = ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: "BAD_REQUEST".to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

/// Resultado tipado para los handlers
pub type AppResult<T> = Result<T, AppError>;

/// Adjuntar el contexto de la operación a un error del backend, para usar con `map_err`
pub fn cache_error(operation: &'static str) -> impl FnOnce(CacheError) -> AppError {
    move |source| AppError::Cache { operation, source }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: impl Into<String>) -> AppError {
    AppError::NotFound(message.into())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
