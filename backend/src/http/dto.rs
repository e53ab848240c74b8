//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs live in [`crate::api`] and are re-exported here;
//! this module adds the request/response shapes that only the HTTP layer uses.

use serde::{Deserialize, Serialize};

pub use crate::api::{DashboardLayout, PieFigure, ScatterFigure};
pub use crate::bindings::{ChartUpdate, DashboardInputs};
use crate::models::SiteSelection;

/// Query parameters for the success pie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Site dropdown value (default: ALL)
    #[serde(default)]
    pub site: Option<SiteSelection>,
}

/// Query parameters for the payload scatter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Site dropdown value (default: ALL)
    #[serde(default)]
    pub site: Option<SiteSelection>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub max: Option<f64>,
}

/// Which input the user just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangedInput {
    Site,
    Payload,
}

/// Request body for dispatching an input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Input values after the change
    pub inputs: DashboardInputs,
    /// The input that changed
    pub event: ChangedInput,
}

/// Figures re-rendered in response to an input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub updates: Vec<ChartUpdate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}
