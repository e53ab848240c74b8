use crate::models::{OutcomeClass, PayloadRange, SiteSelection};
use serde::{Deserialize, Serialize};

// =========================================================
// Payload scatter chart types + graph id
// =========================================================

/// One plotted launch: payload on x, outcome on y, site for color grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: OutcomeClass,
    pub launch_site: String,
}

/// Points sharing one color in the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

/// Chart description for the payload vs. outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFigure {
    pub graph_id: String,
    pub title: String,
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: Vec<ScatterSeries>,
    pub point_count: usize,
}

/// Component id of the scatter chart in the dashboard layout.
pub const PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

pub const X_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const Y_AXIS_TITLE: &str = "Outcome";
