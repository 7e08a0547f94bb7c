//! # HTTP Interface
//!
//! Axum router exposing the lookup as JSON and as HTML pages.
//!
//! | route                        | response                                   |
//! |------------------------------|--------------------------------------------|
//! | `GET /`                      | landing page with the form                 |
//! | `GET /expectancy`            | result page, or too-old page past age 122  |
//! | `GET /api/v1/life-expectancy`| [`LookupResult`] as JSON                   |
//! | `GET /health`                | `{"status": "healthy", "version": ...}`    |
//! | `GET /static/*`              | files from the configured static directory |
//!
//! Query strings are read as raw pairs, so a repeated key keeps its last value instead of
//! being rejected by the extractor.
//!
//! Validation failures answer 422 with `{"detail": [{"field", "message"}, ...]}`; any other
//! failure answers 500 with `{"detail": "<message>"}`.

pub mod pages;

use crate::error::MomentoError;
use crate::imagery::ImageBucket;
use crate::life_table::{LifeTable, LookupResult};
use crate::params::{PageRequest, RawExpectancyQuery, parse_api_query, parse_page_query};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: Arc<LifeTable>,
    pub version: &'static str,
}

impl AppState {
    pub fn new(table: LifeTable) -> Self {
        Self {
            table: Arc::new(table),
            version: crate::VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/expectancy", get(life_expectancy_page))
        .route("/api/v1/life-expectancy", get(life_expectancy_api))
        .route("/health", get(health_check))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ================================================
// HANDLERS
// ================================================

async fn homepage() -> Html<String> {
    Html(pages::landing())
}

async fn life_expectancy_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, MomentoError> {
    match parse_page_query(&RawExpectancyQuery::from_pairs(pairs))? {
        PageRequest::TooOld { age } => {
            debug!(age, "age beyond ceiling, rendering too-old page");
            Ok(Html(pages::too_old()))
        }
        PageRequest::Lookup(req) => {
            let years = state.table.lookup(req.age, req.gender)?;
            let bucket = ImageBucket::select(years);
            debug!(age = req.age, gender = %req.gender, years, ?bucket, "page lookup");
            Ok(Html(pages::result(years, bucket)))
        }
    }
}

async fn life_expectancy_api(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LookupResult>, MomentoError> {
    let req = parse_api_query(&RawExpectancyQuery::from_pairs(pairs))?;
    let result = state.table.lookup_result(req.age, req.gender)?;
    Ok(Json(result))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: state.version,
    })
}

// ================================================
// ERROR RESPONSES
// ================================================

impl IntoResponse for MomentoError {
    fn into_response(self) -> Response {
        match self {
            MomentoError::Validation(errors) => {
                debug!(?errors, "rejected request parameters");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": errors })),
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
