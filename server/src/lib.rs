use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use ir_core::query::evaluate;
use ir_core::stats::{bottom_terms, find_similar_terms, top_terms, SimilarTerms, TermFrequency, SIMILAR_MAX_DF, SIMILAR_MIN_DF};
use ir_core::{DocId, InvertedIndex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_TERMS: usize = 1000;

#[derive(Deserialize)]
pub struct SearchParams {
    /// RPN query, e.g. `cat dog AND`
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<String>,
}

#[derive(Deserialize)]
pub struct TermsParams {
    #[serde(default = "default_n")]
    pub n: usize,
}
fn default_n() -> usize { 10 }

/// Same defaults as the `similar` CLI command.
#[derive(Deserialize)]
pub struct SimilarParams {
    #[serde(default = "default_min_df")]
    pub min_df: usize,
    #[serde(default = "default_max_df")]
    pub max_df: usize,
    /// Ignore the document frequency bounds
    #[serde(default)]
    pub unbounded: bool,
}
fn default_min_df() -> usize { SIMILAR_MIN_DF }
fn default_max_df() -> usize { SIMILAR_MAX_DF }

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, err: impl ToString) -> ApiError {
    (status, Json(ErrorBody { error: err.to_string() }))
}

/// Shared, read-only after startup; handlers never lock.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<InvertedIndex>,
}

pub fn build_app(index: InvertedIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .route("/terms/top", get(top_terms_handler))
        .route("/terms/bottom", get(bottom_terms_handler))
        .route("/terms/similar", get(similar_terms_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<SearchResponse>, ApiError> {
    let start = std::time::Instant::now();
    let ids = evaluate(&state.index, &params.q).map_err(|e| {
        tracing::debug!(query = %params.q, error = %e, "rejected query");
        api_error(StatusCode::BAD_REQUEST, e)
    })?;
    let results: Vec<String> = state
        .index
        .translate(&ids)
        .map_err(|e| {
            tracing::error!(query = %params.q, error = %e, "result translation failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        })?
        .into_iter()
        .map(str::to_owned)
        .collect();

    let elapsed = start.elapsed();
    Ok(Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits: results.len(), results }))
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> Result<Json<serde_json::Value>, ApiError> {
    match state.index.doc_ids().get(doc_id) {
        Some(original_id) => Ok(Json(serde_json::json!({ "doc_id": doc_id, "original_id": original_id }))),
        None => Err(api_error(StatusCode::NOT_FOUND, "not found")),
    }
}

pub async fn top_terms_handler(State(state): State<AppState>, Query(params): Query<TermsParams>) -> Json<Vec<TermFrequency>> {
    Json(top_terms(&state.index, params.n.min(MAX_TERMS)))
}

pub async fn bottom_terms_handler(State(state): State<AppState>, Query(params): Query<TermsParams>) -> Json<Vec<TermFrequency>> {
    Json(bottom_terms(&state.index, params.n.min(MAX_TERMS)))
}

pub async fn similar_terms_handler(State(state): State<AppState>, Query(params): Query<SimilarParams>) -> Result<Json<Option<SimilarTerms>>, ApiError> {
    let bounds = (!params.unbounded).then_some(params.min_df..=params.max_df);
    find_similar_terms(&state.index, bounds)
        .map(Json)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
}
