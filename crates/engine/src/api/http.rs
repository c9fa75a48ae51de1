//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use pokedex_domain::{EvolutionNode, PokedexFilter, PokedexId};

use crate::app::App;
use crate::use_cases::evolution::ResolveError;
use crate::use_cases::pokedex::{PokedexError, PokedexPage, PokemonDetail};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/pokedex", get(list_pokedex))
        .route("/api/pokemon/{id}", get(get_pokemon))
        .route("/api/pokemon/{id}/evolutions", get(get_evolutions))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Default, Deserialize)]
struct PokedexQuery {
    generation: Option<u8>,
    name: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    id: Option<String>,
}

async fn list_pokedex(
    State(app): State<Arc<App>>,
    Query(query): Query<PokedexQuery>,
) -> Result<Json<PokedexPage>, ApiError> {
    let generation = query.generation.unwrap_or(app.default_generation);
    let filter = PokedexFilter {
        name: query.name,
        type_name: query.type_name,
        id: query.id,
    };
    let page = app
        .use_cases
        .pokedex
        .list
        .execute(generation, &filter)
        .await?;
    Ok(Json(page))
}

async fn get_pokemon(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<PokemonDetail>, ApiError> {
    let id = parse_id(&id)?;
    let detail = app.use_cases.pokedex.detail.execute(id).await?;
    Ok(Json(detail))
}

async fn get_evolutions(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<EvolutionNode>>, ApiError> {
    let id = parse_id(&id)?;
    let nodes = app.use_cases.evolution.resolve(id).await?;
    Ok(Json(nodes))
}

fn parse_id(raw: &str) -> Result<PokedexId, ApiError> {
    raw.parse()
        .map_err(|e: pokedex_domain::DomainError| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    /// An upstream data source failed; the client may retry.
    Upstream(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Upstream(msg) => {
                tracing::warn!(error = %msg, "Upstream source failed");
                (axum::http::StatusCode::BAD_GATEWAY, "Upstream source unavailable").into_response()
            }
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(_) => ApiError::NotFound,
            ResolveError::SourceUnavailable(msg) => ApiError::Upstream(msg),
        }
    }
}

impl From<PokedexError> for ApiError {
    fn from(e: PokedexError) -> Self {
        match e {
            PokedexError::GenerationNotFound(_) => ApiError::NotFound,
            PokedexError::InvalidGeneration(generation) => {
                ApiError::BadRequest(format!("Invalid generation: {generation}"))
            }
            PokedexError::SourceUnavailable(msg) => ApiError::Upstream(msg),
        }
    }
}
