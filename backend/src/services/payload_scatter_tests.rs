#[cfg(test)]
mod tests {
    use crate::db::Dataset;
    use crate::models::{LaunchRecord, OutcomeClass, PayloadRange, SiteSelection};
    use crate::services::payload_scatter::{build_scatter_figure, filter_payload, group_by_site};

    fn create_test_record(site: &str, payload: f64, class: i64) -> LaunchRecord {
        LaunchRecord::new(site, payload, OutcomeClass::from_class(class).unwrap())
    }

    fn three_row_dataset() -> Dataset {
        Dataset::from_records(vec![
            create_test_record("CCAFS LC-40", 500.0, 1),
            create_test_record("CCAFS LC-40", 2000.0, 0),
            create_test_record("KSC LC-39A", 3000.0, 1),
        ])
    }

    #[test]
    fn test_filter_all_sites_by_range() {
        let points = filter_payload(
            &three_row_dataset(),
            &SiteSelection::All,
            &PayloadRange::new(0.0, 2500.0),
        );
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].payload_mass_kg, 500.0);
        assert_eq!(points[1].payload_mass_kg, 2000.0);
        assert_eq!(points[1].outcome_class, OutcomeClass::Failure);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let points = filter_payload(
            &three_row_dataset(),
            &SiteSelection::All,
            &PayloadRange::new(500.0, 3000.0),
        );
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_filter_single_site() {
        let points = filter_payload(
            &three_row_dataset(),
            &SiteSelection::site("KSC LC-39A"),
            &PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].launch_site, "KSC LC-39A");
    }

    #[test]
    fn test_filter_empty_range_returns_nothing() {
        let points = filter_payload(
            &three_row_dataset(),
            &SiteSelection::All,
            &PayloadRange::new(0.0, 0.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn test_filter_inverted_range_returns_nothing() {
        let points = filter_payload(
            &three_row_dataset(),
            &SiteSelection::All,
            &PayloadRange::new(9000.0, 100.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn test_group_by_site_keeps_order() {
        let dataset = Dataset::from_records(vec![
            create_test_record("KSC LC-39A", 3000.0, 1),
            create_test_record("CCAFS LC-40", 500.0, 1),
            create_test_record("KSC LC-39A", 4000.0, 0),
        ]);
        let points = filter_payload(&dataset, &SiteSelection::All, &PayloadRange::new(0.0, 10_000.0));
        let series = group_by_site(points);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "KSC LC-39A");
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[1].payload_mass_kg, 4000.0);
        assert_eq!(series[1].name, "CCAFS LC-40");
    }

    #[test]
    fn test_build_scatter_figure_all_sites() {
        let figure = build_scatter_figure(
            &three_row_dataset(),
            &SiteSelection::All,
            &PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(figure.graph_id, "success-payload-scatter-chart");
        assert_eq!(figure.x_axis_title, "Payload Mass (kg)");
        assert_eq!(figure.y_axis_title, "Outcome");
        assert_eq!(figure.point_count, 3);
        let names: Vec<&str> = figure.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_build_scatter_figure_empty_single_site() {
        let figure = build_scatter_figure(
            &three_row_dataset(),
            &SiteSelection::site("VAFB SLC-4E"),
            &PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(figure.point_count, 0);
        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].name, "VAFB SLC-4E");
        assert!(figure.series[0].points.is_empty());
        assert_eq!(figure.payload_range, PayloadRange::new(0.0, 10_000.0));
    }
}
