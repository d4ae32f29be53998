//! City catalog module
//!
//! Loads the bundled city dataset into an immutable id-keyed map.
//! Every record's timezone is checked at load time.

mod types;

pub use types::{CityId, CityRecord};

use chrono_tz::Tz;
use std::collections::btree_map::{BTreeMap, Entry};
use tracing::debug;

use crate::error::{ClockError, Result};

/// City dataset compiled into the binary
const BUNDLED_CITIES: &str = include_str!("../../data/cities.json");

/// Read-only set of known cities, keyed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: BTreeMap<CityId, CityRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and unknown timezones
    pub fn from_records(records: Vec<CityRecord>) -> Result<Self> {
        let mut cities = BTreeMap::new();

        for record in records {
            if record.timezone.parse::<Tz>().is_err() {
                return Err(ClockError::DataLoad(format!(
                    "City {} ({}) has unknown timezone '{}'",
                    record.id, record.name, record.timezone
                )));
            }

            match cities.entry(record.id) {
                Entry::Occupied(_) => {
                    return Err(ClockError::DataLoad(format!(
                        "Duplicate city id {}",
                        record.id
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }

        Ok(Self { cities })
    }

    /// Parse a JSON array of city records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CityRecord> = serde_json::from_str(json)
            .map_err(|e| ClockError::DataLoad(format!("Malformed city data: {}", e)))?;
        Self::from_records(records)
    }

    pub fn get(&self, id: CityId) -> Option<&CityRecord> {
        self.cities.get(&id)
    }

    pub fn contains(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    /// Iterate cities in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.cities.values()
    }

    /// Every city id, ascending
    pub fn ids(&self) -> Vec<CityId> {
        self.cities.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }
}

/// Load the bundled city dataset
pub fn load_cities() -> Result<Catalog> {
    let catalog = Catalog::from_json(BUNDLED_CITIES)?;
    debug!(cities = catalog.len(), "city catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: u32, name: &str, timezone: &str) -> CityRecord {
        CityRecord {
            id: CityId(id),
            name: name.to_string(),
            state: None,
            country: "Testland".to_string(),
            timezone: timezone.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load_cities().unwrap();
        assert!(catalog.len() > 50);
        assert_eq!(catalog.get(CityId(1001)).unwrap().name, "Berkeley");
        assert_eq!(catalog.get(CityId(1043)).unwrap().name, "Copenhagen");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_records(vec![
            city(1, "Alpha", "UTC"),
            city(1, "Beta", "UTC"),
        ]);
        let err = result.unwrap_err();
        assert!(matches!(err, ClockError::DataLoad(_)));
        assert!(err.to_string().contains("Duplicate city id 1"));
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let result = Catalog::from_records(vec![city(1, "Alpha", "Mars/Olympus_Mons")]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Catalog::from_json("[{\"id\": 1}");
        assert!(matches!(result, Err(ClockError::DataLoad(_))));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_records(vec![
            city(5, "Five", "UTC"),
            city(2, "Two", "Europe/Paris"),
        ])
        .unwrap();

        assert!(catalog.contains(CityId(5)));
        assert!(!catalog.contains(CityId(3)));
        let ids: Vec<u32> = catalog.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 5]);
        assert_eq!(catalog.ids(), vec![CityId(2), CityId(5)]);
    }
}
