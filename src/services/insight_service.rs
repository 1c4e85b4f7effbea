//! Servicio de insights generativos
//!
//! Este módulo formatea el estado financiero actual como un prompt en
//! lenguaje natural, lo envía a la Generative Language API y devuelve el
//! texto generado (con las referencias de geolocalización que el servicio
//! adjunte) o un texto fijo de fallback. Ningún fallo cruza la frontera del
//! servicio: red, auth, cuota o respuesta vacía resuelven al fallback.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::environment::EnvironmentConfig;
use crate::metrics::aggregator;
use crate::models::cost::Cost;
use crate::models::trip::Trip;
use crate::utils::errors::AppError;

/// Etiqueta de alcance cuando el análisis cubre toda la malla
pub const GENERAL_SCOPE_LABEL: &str = "Malha Logística Geral";
/// Fallback cuando el modelo responde sin texto
pub const EMPTY_ANALYSIS_FALLBACK: &str = "Análise indisponível no momento.";
/// Fallback ante cualquier fallo del servicio externo
pub const ANALYSIS_ERROR_FALLBACK: &str =
    "Erro ao gerar insights geográficos. Tente novamente em instantes.";

/// Referencia geográfica extraída de los metadatos de grounding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingReference {
    pub title: String,
    pub uri: String,
}

/// Resultado crudo de una generación
#[derive(Debug, Clone, Default)]
pub struct InsightOutcome {
    pub text: Option<String>,
    pub references: Vec<GroundingReference>,
}

/// Backend de generación de texto. La implementación de producción habla
/// con la API externa; los tests sustituyen este seam.
#[async_trait]
pub trait InsightBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<InsightOutcome>;
}

// ---- DTOs del protocolo generateContent ----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleMaps")]
    google_maps: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Debug, Deserialize)]
struct MapsChunk {
    title: Option<String>,
    uri: Option<String>,
}

/// Backend de producción contra la Generative Language API
pub struct GeminiBackend {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    /// Construye el backend; falla si no hay API key configurada.
    pub fn new(config: &EnvironmentConfig) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| AppError::ExternalApi("GEMINI_API_KEY no configurada".to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            api_key,
            model: config.gemini_model.clone(),
            base_url: config.gemini_api_base_url.clone(),
            client,
        })
    }
}

#[async_trait]
impl InsightBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<InsightOutcome> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        info!("🤖 Solicitando análisis generativo a {}", self.model);

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.3 },
            tools: vec![Tool {
                google_maps: serde_json::json!({}),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "generateContent falló con status {}: {}",
                status, error_text
            ))
            .into());
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(extract_outcome(parsed))
    }
}

/// Extrae texto y referencias del primer candidato.
fn extract_outcome(response: GenerateContentResponse) -> InsightOutcome {
    let Some(candidate) = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
    else {
        return InsightOutcome::default();
    };

    let text = candidate
        .content
        .and_then(|content| content.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.is_empty());

    let references = candidate
        .grounding_metadata
        .and_then(|metadata| metadata.grounding_chunks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|chunk| {
            let maps = chunk.maps?;
            Some(GroundingReference {
                title: maps.title?,
                uri: maps.uri?,
            })
        })
        .collect();

    InsightOutcome { text, references }
}

/// Servicio de insights. Clonable y compartible: las invocaciones
/// concurrentes son independientes, sin orden ni deduplicación.
#[derive(Clone)]
pub struct InsightService {
    backend: Option<Arc<dyn InsightBackend>>,
}

impl InsightService {
    pub fn new(backend: Arc<dyn InsightBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Servicio sin backend: toda petición resuelve al fallback.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Construye el servicio desde la configuración del entorno.
    pub fn from_env() -> Self {
        let config = EnvironmentConfig::from_env();
        match GeminiBackend::new(&config) {
            Ok(backend) => Self::new(Arc::new(backend)),
            Err(e) => {
                warn!("⚠️ Backend generativo deshabilitado: {}", e);
                Self::disabled()
            }
        }
    }

    /// Analiza el desempeño del conjunto recibido (completo o ya filtrado a
    /// un destino). Nunca falla más allá de su frontera: cualquier error se
    /// absorbe y resuelve al texto de fallback.
    pub async fn analyze_performance(&self, trips: &[Trip], costs: &[Cost]) -> String {
        let prompt = build_prompt(trips, costs);
        let Some(backend) = &self.backend else {
            return ANALYSIS_ERROR_FALLBACK.to_string();
        };
        match backend.generate(&prompt).await {
            Ok(outcome) => {
                let text = outcome
                    .text
                    .unwrap_or_else(|| EMPTY_ANALYSIS_FALLBACK.to_string());
                format!("{}{}", text, format_references(&outcome.references))
            }
            Err(e) => {
                error!("❌ Error en el análisis generativo: {}", e);
                ANALYSIS_ERROR_FALLBACK.to_string()
            }
        }
    }

    /// Lanza el análisis como tarea cancelable. Abortar o descartar el
    /// handle abandona el resultado; una petición nueva no espera a la
    /// anterior.
    pub fn spawn_analysis(&self, trips: Vec<Trip>, costs: Vec<Cost>) -> JoinHandle<String> {
        let service = self.clone();
        tokio::spawn(async move { service.analyze_performance(&trips, &costs).await })
    }
}

/// Alcance del análisis: un único destino distinto ⇒ análisis de esa rota;
/// si no, la visión general de la malla.
pub fn scope_label(trips: &[Trip]) -> &str {
    let mut destinations = trips.iter().map(|trip| trip.destination.as_str());
    match destinations.next() {
        Some(first) if destinations.all(|destination| destination == first) => first,
        _ => GENERAL_SCOPE_LABEL,
    }
}

/// Prompt ejecutivo en pt-BR con el resumen financiero y el detalle por
/// viagem.
pub fn build_prompt(trips: &[Trip], costs: &[Cost]) -> String {
    let totals = aggregator::totals(trips, costs);
    let margin = aggregator::margin(&totals);
    let scope = scope_label(trips);

    let trip_lines = trips
        .iter()
        .map(|trip| {
            format!(
                "- De {} para {}: R${} ({}kg)",
                trip.origin, trip.destination, trip.revenue, trip.cargo_weight
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "CONTEXTO: Você está analisando o desempenho de: {scope}.\n\n\
         DADOS FINANCEIROS ATUAIS:\n\
         - Faturamento: R${revenue}\n\
         - Custos Totais: R${costs}\n\
         - Lucro Líquido: R${profit}\n\
         - Margem: {margin}%\n\n\
         DETALHAMENTO DE VIAGENS:\n\
         {trip_lines}\n\n\
         TAREFA:\n\
         1. Se for uma rota específica ({scope}), use o Google Maps para sugerir pontos de descanso e postos de combustível com bom custo-benefício nesse trajeto.\n\
         2. Se for a visão geral, identifique qual região está sendo mais custosa.\n\
         3. Dê uma recomendação técnica baseada em geolocalização.\n\n\
         Responda em Português do Brasil com tom executivo e direto. Use Markdown.",
        scope = scope,
        revenue = totals.total_revenue,
        costs = totals.total_costs,
        profit = totals.net_profit,
        margin = margin,
        trip_lines = trip_lines,
    )
}

/// Sección de referencias geográficas, vacía si no hubo grounding.
fn format_references(references: &[GroundingReference]) -> String {
    if references.is_empty() {
        return String::new();
    }
    let lines = references
        .iter()
        .map(|reference| format!("- [{}]({})", reference.title, reference.uri))
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n\n### Referências Geográficas Sugeridas:\n{}", lines)
}
