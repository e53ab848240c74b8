//! Application state for the HTTP server.

use std::sync::Arc;

use crate::api::DashboardLayout;
use crate::db::Dataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch table, loaded once at startup
    pub dataset: Arc<Dataset>,
    /// Widget layout derived from the dataset
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    /// Create a new application state for the given dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let layout = Arc::new(DashboardLayout::from_dataset(&dataset));
        Self { dataset, layout }
    }
}
