use serde::{Deserialize, Serialize};
use std::fmt;

/// Dataset-assigned city identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city with its IANA timezone and coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
    pub timezone: String,
    /// Display only; the timezone is never derived from coordinates
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl CityRecord {
    /// State name, or the empty string for cities without one
    pub fn state_or_empty(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }
}
