//! Dashboard input values: the site dropdown and the payload range slider.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dropdown value selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Value of the site dropdown.
///
/// Any string other than [`ALL_SITES`] is taken as a literal site name, even
/// if no record carries it; such a selection just matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(name)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record from `launch_site` passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::site(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SiteSelection::site(raw))
    }
}

/// Inclusive payload mass bounds in kilograms, serialized as `[min, max]`.
///
/// The slider keeps `min_kg <= max_kg`; an inverted range is not rejected
/// here, it simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl PayloadRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        Self { min_kg, max_kg }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min_kg <= payload_mass_kg && payload_mass_kg <= self.max_kg
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([min_kg, max_kg]: [f64; 2]) -> Self {
        Self { min_kg, max_kg }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.min_kg, range.max_kg]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.min_kg, self.max_kg)
    }
}
