use crate::models::SiteSelection;
use serde::{Deserialize, Serialize};

// =========================================================
// Success pie chart types + graph id
// =========================================================

/// Labelled slice values computed by the pie aggregator.
///
/// `labels[i]` names the slice whose size is `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieSlices {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl PieSlices {
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// Chart description for the success pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieFigure {
    pub graph_id: String,
    pub title: String,
    pub site: SiteSelection,
    #[serde(flatten)]
    pub slices: PieSlices,
}

/// Component id of the pie chart in the dashboard layout.
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";

/// Slice labels used when a single site is selected.
pub const SUCCESS_LABEL: &str = "Success";
pub const FAILED_LABEL: &str = "Failed";
