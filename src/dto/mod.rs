//! DTOs de request
//!
//! Esquemas tipados de los cuerpos y queries que aceptan los endpoints.

pub mod cache_dto;
