use crate::api::{ScatterFigure, ScatterPoint, ScatterSeries};
use crate::db::Dataset;
use crate::models::{PayloadRange, SiteSelection};
use crate::routes::payload_scatter::{PAYLOAD_SCATTER_CHART, X_AXIS_TITLE, Y_AXIS_TITLE};

/// Select the launches to plot against payload mass.
///
/// Keeps records with `range.min_kg <= payload <= range.max_kg`, then, unless
/// every site is selected, only those from the chosen site. Dataset order is
/// preserved. An empty result is a valid, empty chart.
pub fn filter_payload(
    dataset: &Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome_class: r.outcome_class,
            launch_site: r.launch_site.clone(),
        })
        .collect()
}

/// Split points into one series per launch site, in order of first appearance.
pub(crate) fn group_by_site(points: Vec<ScatterPoint>) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for point in points {
        match series.iter_mut().find(|s| s.name == point.launch_site) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: point.launch_site.clone(),
                points: vec![point],
            }),
        }
    }
    series
}

/// Build the scatter chart description for a site selection and payload range.
///
/// All sites: one series per site so the renderer colors them apart. A single
/// site: one series named after it, present even when it has no points.
pub fn build_scatter_figure(
    dataset: &Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterFigure {
    let points = filter_payload(dataset, site, range);
    let point_count = points.len();

    let (title, series) = match site {
        SiteSelection::All => (
            "Correlation between Payload and Success for all Sites".to_string(),
            group_by_site(points),
        ),
        SiteSelection::Site(name) => (
            format!("Correlation between Payload and Success for Site {}", name),
            vec![ScatterSeries {
                name: name.clone(),
                points,
            }],
        ),
    };

    ScatterFigure {
        graph_id: PAYLOAD_SCATTER_CHART.to_string(),
        title,
        site: site.clone(),
        payload_range: *range,
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        series,
        point_count,
    }
}
