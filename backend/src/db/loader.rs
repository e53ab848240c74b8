//! CSV loader for the launch table.
//!
//! Expected layout: a header row naming at least `Launch Site`,
//! `Payload Mass (kg)` and `class`. Columns are located by name, so the
//! unnamed index column pandas writes in front is ignored along with any
//! other extra column. `Flight Number` and `Booster Version Category` are
//! picked up when present.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};

use super::dataset::Dataset;
use super::error::{DataLoadError, DataLoadResult};
use crate::models::{LaunchRecord, OutcomeClass};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const FLIGHT_NUMBER_COLUMN: &str = "Flight Number";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Load the launch table from a CSV file.
pub fn load(path: &Path) -> DataLoadResult<Dataset> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_from_reader(file, &path.display().to_string())?;

    info!(
        "Loaded {} launch records from {} (payload range {:?}..={:?} kg, {} sites)",
        dataset.len(),
        path.display(),
        dataset.min_payload(),
        dataset.max_payload(),
        dataset.sites().len()
    );

    Ok(dataset)
}

/// Load the launch table from any CSV source. `source_name` only labels errors.
pub fn load_from_reader<R: Read>(reader: R, source_name: &str) -> DataLoadResult<Dataset> {
    let csv_err = |source: csv::Error| DataLoadError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = ColumnIndex::resolve(&headers, source_name)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(csv_err)?;
        records.push(columns.parse_row(&row, i + 1)?);
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty {
            source_name: source_name.to_string(),
        });
    }

    debug!("Parsed {} rows from {}", records.len(), source_name);
    Ok(Dataset::from_records(records))
}

/// Positions of the columns we read, resolved from the header row.
struct ColumnIndex {
    launch_site: usize,
    payload_mass: usize,
    class: usize,
    flight_number: Option<usize>,
    booster_category: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, source_name: &str) -> DataLoadResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataLoadError::MissingColumn {
                source_name: source_name.to_string(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            launch_site: require(LAUNCH_SITE_COLUMN)?,
            payload_mass: require(PAYLOAD_MASS_COLUMN)?,
            class: require(CLASS_COLUMN)?,
            flight_number: find(FLIGHT_NUMBER_COLUMN),
            booster_category: find(BOOSTER_CATEGORY_COLUMN),
        })
    }

    fn parse_row(&self, row: &StringRecord, row_no: usize) -> DataLoadResult<LaunchRecord> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let launch_site = cell(self.launch_site);
        if launch_site.is_empty() {
            return Err(DataLoadError::invalid_value(
                row_no,
                LAUNCH_SITE_COLUMN,
                launch_site,
                "launch site is empty",
            ));
        }

        let raw_mass = cell(self.payload_mass);
        let payload_mass_kg = raw_mass.parse::<f64>().map_err(|e| {
            DataLoadError::invalid_value(row_no, PAYLOAD_MASS_COLUMN, raw_mass, e.to_string())
        })?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DataLoadError::invalid_value(
                row_no,
                PAYLOAD_MASS_COLUMN,
                raw_mass,
                "payload mass must be a finite, non-negative number",
            ));
        }

        let raw_class = cell(self.class);
        let outcome_class = raw_class
            .parse::<i64>()
            .ok()
            .and_then(OutcomeClass::from_class)
            .ok_or_else(|| {
                DataLoadError::invalid_value(row_no, CLASS_COLUMN, raw_class, "expected 0 or 1")
            })?;

        let flight_number = match self.flight_number.map(cell) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = parse_flight_number(raw);
                if parsed.is_none() {
                    warn!(
                        "Row {}: ignoring unreadable {} '{}'",
                        row_no, FLIGHT_NUMBER_COLUMN, raw
                    );
                }
                parsed
            }
        };

        let booster_version_category = self
            .booster_category
            .map(cell)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(LaunchRecord {
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            outcome_class,
            flight_number,
            booster_version_category,
        })
    }
}

/// Flight numbers may come through a float column (`7.0`); only whole,
/// non-negative values are kept.
fn parse_flight_number(raw: &str) -> Option<u32> {
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value)).then(|| value as u32)
}
