//! Launch record types.
//!
//! A [`LaunchRecord`] is one validated row of the launch table. Records are
//! immutable once loaded and are only ever read by the chart services.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary launch outcome as stored in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeClass {
    /// `class = 0`
    Failure,
    /// `class = 1`
    Success,
}

impl OutcomeClass {
    /// Interpret a raw `class` value. Anything other than 0 or 1 is rejected.
    pub fn from_class(value: i64) -> Option<Self> {
        match value {
            0 => Some(OutcomeClass::Failure),
            1 => Some(OutcomeClass::Success),
            _ => None,
        }
    }

    /// Integer value used on the chart's y axis.
    pub fn as_class(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

// Serialized as the bare 0/1 integer so the figure JSON matches the data file.
impl Serialize for OutcomeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_class())
    }
}

impl<'de> Deserialize<'de> for OutcomeClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        OutcomeClass::from_class(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("outcome class must be 0 or 1, got {}", raw))
        })
    }
}

/// One row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome_class: OutcomeClass,
    /// Informational columns; never used for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version_category: Option<String>,
}

impl LaunchRecord {
    /// Build a record with only the columns the charts need.
    pub fn new(launch_site: impl Into<String>, payload_mass_kg: f64, outcome_class: OutcomeClass) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome_class,
            flight_number: None,
            booster_version_category: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome_class.is_success()
    }
}
