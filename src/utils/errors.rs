//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del núcleo. No hay
//! condiciones fatales: la entrada malformada se rechaza antes de llegar al
//! estado, y los fallos del servicio externo se absorben en el texto de
//! fallback del servicio de insights.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("External API error: {0}")]
    ExternalApi(String),
}
