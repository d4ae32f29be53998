//! Presentation builder
//!
//! Turns catalog records, clock readings and search matches into ordered
//! rows plus the columns to show for them. No terminal markup is produced here.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::catalog::{Catalog, CityId, CityRecord};
use crate::error::ClockError;
use crate::search::MatchResult;
use crate::timezone::{self, LocalTime};

const DAY_ICON: &str = "☼";
const NIGHT_ICON: &str = "☾";

/// One city as it will be displayed
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow<'a> {
    pub city: &'a CityRecord,
    /// Absent for search rows
    pub local: Option<LocalTime>,
}

impl DisplayRow<'_> {
    pub fn is_daytime(&self) -> Option<bool> {
        self.local.as_ref().map(|l| l.is_daytime)
    }

    /// Day/night marker for clock rows
    pub fn icon(&self) -> Option<&'static str> {
        self.is_daytime()
            .map(|day| if day { DAY_ICON } else { NIGHT_ICON })
    }

    /// Styling hint for the renderer
    pub fn is_dimmed(&self) -> bool {
        self.is_daytime() == Some(false)
    }
}

/// A displayable column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// City name prefixed with the day/night icon
    City,
    Name,
    LocalTime,
    Timezone,
    Country,
    State,
    Latitude,
    Longitude,
    Id,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::City => "City",
            Column::Name => "Name",
            Column::LocalTime => "Local Time",
            Column::Timezone => "Timezone",
            Column::Country => "Country",
            Column::State => "State",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::Id => "ID",
        }
    }

    /// Numeric columns render right-aligned
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Latitude | Column::Longitude | Column::Id)
    }

    pub fn cell(self, row: &DisplayRow<'_>) -> String {
        let city = row.city;
        match self {
            Column::City => match row.icon() {
                Some(icon) => format!("{} {}", icon, city.name),
                None => city.name.clone(),
            },
            Column::Name => city.name.clone(),
            Column::LocalTime => row
                .local
                .as_ref()
                .map(|l| l.local_time_text.clone())
                .unwrap_or_default(),
            Column::Timezone => row
                .local
                .as_ref()
                .map(|l| l.timezone_label.clone())
                .unwrap_or_else(|| city.timezone.clone()),
            Column::Country => city.country.clone(),
            Column::State => city.state_or_empty().to_string(),
            Column::Latitude => format!("{:.4}", city.latitude),
            Column::Longitude => format!("{:.4}", city.longitude),
            Column::Id => city.id.to_string(),
        }
    }
}

const WORLD_CLOCK_COLUMNS: &[Column] = &[Column::City, Column::LocalTime, Column::Timezone];
const VERBOSE_COLUMNS: &[Column] = &[
    Column::Country,
    Column::State,
    Column::Latitude,
    Column::Longitude,
    Column::Id,
];
const SEARCH_COLUMNS: &[Column] = &[
    Column::Name,
    Column::State,
    Column::Country,
    Column::Timezone,
    Column::Id,
];

/// Ordered rows, the columns to show, and the per-row problems hit while
/// building them
#[derive(Debug)]
pub struct RowSet<'a> {
    pub columns: Vec<Column>,
    pub rows: Vec<DisplayRow<'a>>,
    pub warnings: Vec<ClockError>,
}

/// Home city first, then the requested cities in order without duplicates
pub fn clock_order(home: Option<CityId>, requested: &[CityId]) -> Vec<CityId> {
    let mut seen = HashSet::new();
    home.into_iter()
        .chain(requested.iter().copied())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Build world-clock rows at `instant`
///
/// Unknown ids and cities whose timezone fails to resolve are left out and
/// recorded in `warnings`.
pub fn build_world_clock_rows<'a>(
    home: Option<CityId>,
    requested: &[CityId],
    catalog: &'a Catalog,
    instant: DateTime<Utc>,
    verbose: bool,
) -> RowSet<'a> {
    let mut columns = WORLD_CLOCK_COLUMNS.to_vec();
    if verbose {
        columns.extend_from_slice(VERBOSE_COLUMNS);
    }

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for id in clock_order(home, requested) {
        let Some(city) = catalog.get(id) else {
            warnings.push(ClockError::UnknownCityId(id));
            continue;
        };

        match timezone::resolve(city, instant) {
            Ok(local) => rows.push(DisplayRow {
                city,
                local: Some(local),
            }),
            // `Catalog::from_records` rejects unparseable timezones, so catalog
            // records always resolve.
            Err(e) => warnings.push(e),
        }
    }

    RowSet {
        columns,
        rows,
        warnings,
    }
}

/// Project search matches into rows, keeping their order
pub fn build_search_rows<'a>(matches: &[MatchResult<'a>]) -> RowSet<'a> {
    RowSet {
        columns: SEARCH_COLUMNS.to_vec(),
        rows: matches
            .iter()
            .map(|m| DisplayRow {
                city: m.city,
                local: None,
            })
            .collect(),
        warnings: Vec::new(),
    }
}
