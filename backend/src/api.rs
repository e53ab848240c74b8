//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::layout::DashboardLayout;
pub use crate::routes::layout::DropdownOption;
pub use crate::routes::layout::PayloadSlider;
pub use crate::routes::layout::SiteDropdown;
pub use crate::routes::layout::SliderMark;
pub use crate::routes::payload_scatter::ScatterFigure;
pub use crate::routes::payload_scatter::ScatterPoint;
pub use crate::routes::payload_scatter::ScatterSeries;
pub use crate::routes::success_pie::PieFigure;
pub use crate::routes::success_pie::PieSlices;

pub use crate::models::{LaunchRecord, OutcomeClass, PayloadRange, SiteSelection};
