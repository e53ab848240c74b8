//! In-memory launch dataset.

use crate::models::{LaunchRecord, PayloadRange};

/// The loaded launch table.
///
/// Built once and then only read; share it behind an `Arc`. Site order and
/// payload bounds are computed up front so the layout never rescans records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: Option<PayloadRange>,
}

impl Dataset {
    /// Build a dataset from records already in memory, keeping their order.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut payload_bounds: Option<PayloadRange> = None;

        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            let mass = record.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                None => PayloadRange::new(mass, mass),
                Some(b) => PayloadRange::new(b.min_kg.min(mass), b.max_kg.max(mass)),
            });
        }

        Self {
            records,
            sites,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn min_payload(&self) -> Option<f64> {
        self.payload_bounds.map(|b| b.min_kg)
    }

    pub fn max_payload(&self) -> Option<f64> {
        self.payload_bounds.map(|b| b.max_kg)
    }

    /// `[min_payload, max_payload]`, the slider's initial value.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }
}
