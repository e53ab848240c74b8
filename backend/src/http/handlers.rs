//! HTTP handlers for the dashboard API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! and binding layers for the actual chart computation.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{
    ChangedInput, DashboardLayout, DispatchRequest, DispatchResponse, HealthResponse, PieFigure,
    PieQuery, ScatterFigure, ScatterQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::bindings::{Dashboard, InputEvent};
use crate::models::PayloadRange;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("../../static/index.html");

// =============================================================================
// Dashboard page + health
// =============================================================================

/// GET /
///
/// Static dashboard page; it renders the figures returned by the API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint reporting how many launch records are loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

/// GET /v1/layout
///
/// Dropdown options, slider configuration and graph ids.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(state.layout.as_ref().clone()))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/success-pie?site=...
///
/// Success pie chart for a site selection.
pub async fn get_success_pie(
    State(state): State<AppState>,
    query: Result<Query<PieQuery>, QueryRejection>,
) -> HandlerResult<PieFigure> {
    let Query(query) = query?;
    let site = query.site.unwrap_or_default();
    debug!(site = %site, "computing success pie");

    Ok(Json(services::build_pie_figure(&state.dataset, &site)))
}

/// GET /v1/charts/payload-scatter?site=...&min=...&max=...
///
/// Payload vs. outcome scatter chart. Missing bounds default to the
/// slider's initial value.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    query: Result<Query<ScatterQuery>, QueryRejection>,
) -> HandlerResult<ScatterFigure> {
    let Query(query) = query?;
    let site = query.site.unwrap_or_default();
    let default_range = state.layout.payload_slider.value;
    let range = PayloadRange::new(
        query.min.unwrap_or(default_range.min_kg),
        query.max.unwrap_or(default_range.max_kg),
    );
    debug!(site = %site, range = %range, "computing payload scatter");

    Ok(Json(services::build_scatter_figure(
        &state.dataset,
        &site,
        &range,
    )))
}

// =============================================================================
// Event Dispatch
// =============================================================================

/// POST /v1/events
///
/// Apply one input change and return the figures of every binding it
/// triggers. The request carries the full input state, so the server keeps
/// nothing between calls.
pub async fn dispatch_event(
    State(state): State<AppState>,
    body: Result<Json<DispatchRequest>, JsonRejection>,
) -> HandlerResult<DispatchResponse> {
    let Json(request) = body?;

    let event = match request.event {
        ChangedInput::Site => InputEvent::SiteChanged(request.inputs.site.clone()),
        ChangedInput::Payload => InputEvent::PayloadChanged(request.inputs.payload),
    };

    let mut dashboard = Dashboard::with_inputs(state.dataset.clone(), request.inputs);
    let updates = dashboard.dispatch(event);
    debug!(updates = updates.len(), "dispatched input event");

    Ok(Json(DispatchResponse { updates }))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
