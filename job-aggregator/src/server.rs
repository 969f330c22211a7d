use crate::aggregator::JobAggregator;
use crate::page::render_index;
use crate::types::{JobListing, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<JobAggregator>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/trigger-scraping", get(trigger_scraping_handler))
        .route("/api/jobs", get(jobs_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(bind_addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> Response {
    match state.aggregator.store().load() {
        Ok(listings) => Html(render_index(&listings)).into_response(),
        Err(e) => {
            error!("Failed to load listings for the index page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to load listings: {}", e)).into_response()
        }
    }
}

/// Runs a scrape synchronously and reports the count.
async fn trigger_scraping_handler(State(state): State<AppState>) -> (StatusCode, String) {
    match state.aggregator.run().await {
        Ok(report) => (
            StatusCode::OK,
            format!("Scraping finished successfully. {} listings found.", report.total()),
        ),
        Err(e) => {
            error!("Manual scraping run failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Scraping failed: {}", e))
        }
    }
}

async fn jobs_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<JobListing>>, (StatusCode, String)> {
    state.aggregator.store().load().map(Json).map_err(|e| {
        error!("Failed to load listings: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to load listings: {}", e))
    })
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
