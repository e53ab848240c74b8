use crate::api::{PieFigure, PieSlices};
use crate::db::Dataset;
use crate::models::SiteSelection;
use crate::routes::success_pie::{FAILED_LABEL, SUCCESS_LABEL, SUCCESS_PIE_CHART};

/// Count launch outcomes for the pie chart.
///
/// With [`SiteSelection::All`] only successful launches are counted, one slice
/// per site in order of first appearance; sites without a success get no
/// slice and failures never show up. With a single site the result is always
/// the two slices `Success` and `Failed`, in that order, for that site's
/// launches. An unknown site yields `[0, 0]`.
pub fn aggregate_success(dataset: &Dataset, site: &SiteSelection) -> PieSlices {
    match site {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(name) => outcomes_for_site(dataset, name),
    }
}

fn successes_by_site(dataset: &Dataset) -> PieSlices {
    let mut slices = PieSlices::default();

    for record in dataset.records().iter().filter(|r| r.is_success()) {
        match slices.labels.iter().position(|l| l == &record.launch_site) {
            Some(idx) => slices.values[idx] += 1,
            None => {
                slices.labels.push(record.launch_site.clone());
                slices.values.push(1);
            }
        }
    }

    slices
}

fn outcomes_for_site(dataset: &Dataset, site: &str) -> PieSlices {
    let (success, failed) = dataset
        .records()
        .iter()
        .filter(|r| r.launch_site == site)
        .fold((0u64, 0u64), |(s, f), r| {
            if r.is_success() {
                (s + 1, f)
            } else {
                (s, f + 1)
            }
        });

    PieSlices {
        labels: vec![SUCCESS_LABEL.to_string(), FAILED_LABEL.to_string()],
        values: vec![success, failed],
    }
}

/// Build the pie chart description for a site selection.
pub fn build_pie_figure(dataset: &Dataset, site: &SiteSelection) -> PieFigure {
    let title = match site {
        SiteSelection::All => "Total Successful Launches by Site".to_string(),
        SiteSelection::Site(name) => format!("Launch Outcomes for Site {}", name),
    };

    PieFigure {
        graph_id: SUCCESS_PIE_CHART.to_string(),
        title,
        site: site.clone(),
        slices: aggregate_success(dataset, site),
    }
}
