use crate::db::Dataset;
use crate::models::{PayloadRange, SiteSelection, ALL_SITES};
use serde::{Deserialize, Serialize};

use super::payload_scatter::PAYLOAD_SCATTER_CHART;
use super::success_pie::SUCCESS_PIE_CHART;

// =========================================================
// Dashboard layout types
// =========================================================

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";
pub const ALL_SITES_LABEL: &str = "All Sites";

pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 10_000.0;
pub const SLIDER_STEP_KG: f64 = 1_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

/// Everything a client needs to draw the input widgets and graph slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
    pub graphs: Vec<String>,
}

impl DashboardLayout {
    /// Build the layout for a loaded dataset.
    ///
    /// The dropdown lists "All Sites" followed by every site in the data; the
    /// slider starts at the dataset's payload bounds.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut options = vec![DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: SiteDropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: SiteSelection::All,
                placeholder: SITE_PLACEHOLDER.to_string(),
            },
            payload_slider: PayloadSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: SLIDER_MIN_KG,
                max: SLIDER_MAX_KG,
                step: SLIDER_STEP_KG,
                marks: slider_marks(),
                value: default_payload_range(dataset),
            },
            graphs: vec![
                SUCCESS_PIE_CHART.to_string(),
                PAYLOAD_SCATTER_CHART.to_string(),
            ],
        }
    }
}

/// `[min_payload, max_payload]`, or the full slider span for an empty dataset.
pub fn default_payload_range(dataset: &Dataset) -> PayloadRange {
    dataset
        .payload_bounds()
        .unwrap_or_else(|| PayloadRange::new(SLIDER_MIN_KG, SLIDER_MAX_KG))
}

fn slider_marks() -> Vec<SliderMark> {
    let steps = (SLIDER_MAX_KG / SLIDER_STEP_KG) as u32;
    (0..=steps)
        .map(|i| {
            let value = SLIDER_MIN_KG + f64::from(i) * SLIDER_STEP_KG;
            SliderMark {
                value,
                label: format!("{}", value as u32),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, OutcomeClass::Success),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, OutcomeClass::Failure),
            LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Failure),
        ])
    }

    #[test]
    fn test_dropdown_lists_all_then_sites() {
        let layout = DashboardLayout::from_dataset(&dataset());
        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, ["ALL", "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert!(layout.site_dropdown.value.is_all());
    }

    #[test]
    fn test_slider_defaults_to_dataset_bounds() {
        let layout = DashboardLayout::from_dataset(&dataset());
        let slider = &layout.payload_slider;
        assert_eq!(slider.value, PayloadRange::new(500.0, 9600.0));
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10_000.0);
        assert_eq!(slider.step, 1_000.0);
        assert_eq!(slider.marks.len(), 11);
        assert_eq!(slider.marks[10].label, "10000");
    }

    #[test]
    fn test_empty_dataset_uses_full_slider_span() {
        let empty = Dataset::from_records(vec![]);
        assert_eq!(
            default_payload_range(&empty),
            PayloadRange::new(SLIDER_MIN_KG, SLIDER_MAX_KG)
        );
    }

    #[test]
    fn test_graph_ids() {
        let layout = DashboardLayout::from_dataset(&dataset());
        assert_eq!(
            layout.graphs,
            ["success-pie-chart", "success-payload-scatter-chart"]
        );
        assert_eq!(layout.title, DASHBOARD_TITLE);
    }
}
