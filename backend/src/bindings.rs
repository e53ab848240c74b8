//! Event dispatch from dashboard inputs to chart figures.
//!
//! Two bindings connect the inputs to the charts:
//!
//! | Binding          | Triggered by            | Produces         |
//! |------------------|-------------------------|------------------|
//! | `SuccessPie`     | site changes            | [`PieFigure`]    |
//! | `PayloadScatter` | site or payload changes | [`ScatterFigure`]|
//!
//! A [`Dashboard`] holds the current input values and the last figure each
//! binding produced. Dispatching an event updates the input, re-evaluates the
//! triggered bindings against the shared dataset and replaces their figures.
//! Evaluation is synchronous, so the newest event always wins.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::{PieFigure, ScatterFigure};
use crate::db::Dataset;
use crate::models::{PayloadRange, SiteSelection};
use crate::routes::layout::default_payload_range;
use crate::services::{build_pie_figure, build_scatter_figure};

/// A change to one dashboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SiteChanged(SiteSelection),
    PayloadChanged(PayloadRange),
}

/// Current value of every dashboard input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInputs {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl DashboardInputs {
    /// Initial inputs: every site, payload range spanning the dataset.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload: default_payload_range(dataset),
        }
    }

    fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::SiteChanged(site) => self.site = site.clone(),
            InputEvent::PayloadChanged(range) => self.payload = *range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    SuccessPie,
    PayloadScatter,
}

impl Binding {
    pub const ALL: [Binding; 2] = [Binding::SuccessPie, Binding::PayloadScatter];

    pub fn triggered_by(self, event: &InputEvent) -> bool {
        match (self, event) {
            (Binding::SuccessPie, InputEvent::SiteChanged(_)) => true,
            (Binding::SuccessPie, InputEvent::PayloadChanged(_)) => false,
            (Binding::PayloadScatter, _) => true,
        }
    }

    /// Evaluate this binding for the given inputs.
    pub fn evaluate(self, dataset: &Dataset, inputs: &DashboardInputs) -> Figure {
        match self {
            Binding::SuccessPie => Figure::Pie(build_pie_figure(dataset, &inputs.site)),
            Binding::PayloadScatter => {
                Figure::Scatter(build_scatter_figure(dataset, &inputs.site, &inputs.payload))
            }
        }
    }
}

/// A chart description produced by a binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart_type", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn graph_id(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.graph_id,
            Figure::Scatter(scatter) => &scatter.graph_id,
        }
    }
}

/// The figure a binding emitted in response to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub binding: Binding,
    pub figure: Figure,
}

/// Dashboard state: the shared dataset, current inputs and rendered figures.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    inputs: DashboardInputs,
    pie: Option<PieFigure>,
    scatter: Option<ScatterFigure>,
}

impl Dashboard {
    /// A dashboard with the initial inputs and nothing rendered yet.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let inputs = DashboardInputs::initial(&dataset);
        Self::with_inputs(dataset, inputs)
    }

    pub fn with_inputs(dataset: Arc<Dataset>, inputs: DashboardInputs) -> Self {
        Self {
            dataset,
            inputs,
            pie: None,
            scatter: None,
        }
    }

    pub fn inputs(&self) -> &DashboardInputs {
        &self.inputs
    }

    /// Evaluate every binding, as on first page load.
    pub fn render_all(&mut self) -> Vec<ChartUpdate> {
        Binding::ALL.iter().map(|b| self.evaluate(*b)).collect()
    }

    /// Apply an input change and re-evaluate the bindings it triggers.
    pub fn dispatch(&mut self, event: InputEvent) -> Vec<ChartUpdate> {
        self.inputs.apply(&event);
        debug!("Dispatching {:?} with inputs {:?}", event, self.inputs);

        Binding::ALL
            .iter()
            .filter(|b| b.triggered_by(&event))
            .map(|b| self.evaluate(*b))
            .collect()
    }

    /// The figure currently shown for a binding, if it has rendered yet.
    pub fn figure(&self, binding: Binding) -> Option<Figure> {
        match binding {
            Binding::SuccessPie => self.pie.clone().map(Figure::Pie),
            Binding::PayloadScatter => self.scatter.clone().map(Figure::Scatter),
        }
    }

    fn evaluate(&mut self, binding: Binding) -> ChartUpdate {
        let figure = binding.evaluate(&self.dataset, &self.inputs);
        match &figure {
            Figure::Pie(pie) => self.pie = Some(pie.clone()),
            Figure::Scatter(scatter) => self.scatter = Some(scatter.clone()),
        }
        ChartUpdate { binding, figure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass};

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, OutcomeClass::Success),
            LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Failure),
            LaunchRecord::new("KSC LC-39A", 3000.0, OutcomeClass::Success),
        ]))
    }

    fn scatter(update: &ChartUpdate) -> &ScatterFigure {
        match &update.figure {
            Figure::Scatter(s) => s,
            other => panic!("expected scatter figure, got {:?}", other),
        }
    }

    #[test]
    fn test_triggers() {
        let site = InputEvent::SiteChanged(SiteSelection::All);
        let payload = InputEvent::PayloadChanged(PayloadRange::new(0.0, 1.0));
        assert!(Binding::SuccessPie.triggered_by(&site));
        assert!(!Binding::SuccessPie.triggered_by(&payload));
        assert!(Binding::PayloadScatter.triggered_by(&site));
        assert!(Binding::PayloadScatter.triggered_by(&payload));
    }

    #[test]
    fn test_initial_inputs_span_dataset() {
        let dashboard = Dashboard::new(dataset());
        assert_eq!(dashboard.inputs().site, SiteSelection::All);
        assert_eq!(dashboard.inputs().payload, PayloadRange::new(500.0, 3000.0));
        assert!(dashboard.figure(Binding::SuccessPie).is_none());
    }

    #[test]
    fn test_render_all_fills_both_figures() {
        let mut dashboard = Dashboard::new(dataset());
        let updates = dashboard.render_all();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].figure.graph_id(), "success-pie-chart");
        assert_eq!(updates[1].figure.graph_id(), "success-payload-scatter-chart");
        assert!(dashboard.figure(Binding::SuccessPie).is_some());
        assert!(dashboard.figure(Binding::PayloadScatter).is_some());
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let mut dashboard = Dashboard::new(dataset());
        let updates = dashboard.dispatch(InputEvent::SiteChanged(SiteSelection::site("KSC LC-39A")));
        let bindings: Vec<Binding> = updates.iter().map(|u| u.binding).collect();
        assert_eq!(bindings, [Binding::SuccessPie, Binding::PayloadScatter]);
        assert_eq!(scatter(&updates[1]).point_count, 1);
    }

    #[test]
    fn test_payload_change_updates_scatter_only() {
        let mut dashboard = Dashboard::new(dataset());
        dashboard.render_all();
        let pie_before = dashboard.figure(Binding::SuccessPie);

        let updates = dashboard.dispatch(InputEvent::PayloadChanged(PayloadRange::new(0.0, 2500.0)));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].binding, Binding::PayloadScatter);
        assert_eq!(scatter(&updates[0]).point_count, 2);
        assert_eq!(dashboard.figure(Binding::SuccessPie), pie_before);
    }

    #[test]
    fn test_latest_event_replaces_figure() {
        let mut dashboard = Dashboard::new(dataset());
        dashboard.dispatch(InputEvent::PayloadChanged(PayloadRange::new(0.0, 0.0)));
        dashboard.dispatch(InputEvent::PayloadChanged(PayloadRange::new(0.0, 10_000.0)));

        match dashboard.figure(Binding::PayloadScatter) {
            Some(Figure::Scatter(figure)) => assert_eq!(figure.point_count, 3),
            other => panic!("unexpected figure {:?}", other),
        }
    }

    #[test]
    fn test_figure_json_is_tagged() {
        let mut dashboard = Dashboard::new(dataset());
        let updates = dashboard.render_all();
        let value = serde_json::to_value(&updates[0]).unwrap();
        assert_eq!(value["binding"], "success_pie");
        assert_eq!(value["figure"]["chart_type"], "pie");
        assert_eq!(value["figure"]["labels"][0], "CCAFS LC-40");
    }
}
