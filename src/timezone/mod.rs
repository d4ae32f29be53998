//! Local time resolution
//!
//! Converts an absolute instant into a city's wall-clock time and classifies
//! it as day or night. Daytime is the half-open window `[06:00, 18:00)` local.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::catalog::CityRecord;
use crate::error::{ClockError, Result};

/// First local hour counted as daytime
pub const DAY_START_HOUR: u32 = 6;
/// First local hour counted as night again
pub const DAY_END_HOUR: u32 = 18;

const TIME_FORMAT: &str = "%H:%M:%S %Z";
const DATE_FORMAT: &str = "%a %Y-%m-%d";

/// A city's wall-clock state at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTime {
    /// `HH:MM:SS ABBR`, with the local date appended when it differs from
    /// the instant's UTC date
    pub local_time_text: String,
    pub is_daytime: bool,
    /// IANA timezone name
    pub timezone_label: String,
}

/// Whether a local time of day falls inside the daytime window
pub fn is_daytime(time: NaiveTime) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&time.hour())
}

/// Resolve a city's local time at `instant`
pub fn resolve(city: &CityRecord, instant: DateTime<Utc>) -> Result<LocalTime> {
    let tz: Tz = city
        .timezone
        .parse()
        .map_err(|_| ClockError::TimezoneResolution {
            city_id: city.id,
            timezone: city.timezone.clone(),
        })?;

    let local = instant.with_timezone(&tz);

    let mut local_time_text = local.format(TIME_FORMAT).to_string();
    if local.date_naive() != instant.date_naive() {
        local_time_text.push_str(&format!(" ({})", local.format(DATE_FORMAT)));
    }

    Ok(LocalTime {
        local_time_text,
        is_daytime: is_daytime(local.time()),
        timezone_label: tz.name().to_string(),
    })
}
