//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno para el servicio de
//! insights. Ninguna variable es obligatoria: este núcleo no tiene
//! condiciones fatales de arranque, sin API key el servicio queda en modo
//! fallback.

use std::env;

/// Modelo generativo por defecto
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Endpoint público de la Generative Language API
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base_url: String,
    pub http_timeout_secs: u64,
}

impl EnvironmentConfig {
    /// Carga la configuración desde el entorno (y `.env` si existe)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE_URL.to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
