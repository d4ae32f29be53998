use serde::{Deserialize, Serialize};

use crate::catalog::CityId;

/// Berkeley, California
pub const DEFAULT_HOME_CITY: CityId = CityId(1001);
/// Copenhagen, Denmark
pub const DEFAULT_SECOND_CITY: CityId = CityId(1043);

/// User preferences for the world clock
///
/// Values are never mutated in place; the `with_*` methods return an updated
/// copy that the caller saves explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// City always shown first
    pub home_city: Option<CityId>,

    /// Cities shown after the home city, in order
    pub requested_cities: Vec<CityId>,
}

impl ClockConfig {
    pub fn with_home(&self, home: CityId) -> Self {
        Self {
            home_city: Some(home),
            ..self.clone()
        }
    }

    /// Append a city, or `None` if it is already requested
    pub fn with_city_added(&self, id: CityId) -> Option<Self> {
        if self.requested_cities.contains(&id) {
            return None;
        }

        let mut requested_cities = self.requested_cities.clone();
        requested_cities.push(id);
        Some(Self {
            requested_cities,
            ..self.clone()
        })
    }

    /// Drop a city, or `None` if it was not requested
    pub fn with_city_removed(&self, id: CityId) -> Option<Self> {
        if !self.requested_cities.contains(&id) {
            return None;
        }

        Some(Self {
            requested_cities: self
                .requested_cities
                .iter()
                .copied()
                .filter(|c| *c != id)
                .collect(),
            ..self.clone()
        })
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            home_city: Some(DEFAULT_HOME_CITY),
            requested_cities: vec![DEFAULT_HOME_CITY, DEFAULT_SECOND_CITY],
        }
    }
}
