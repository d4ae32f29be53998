use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::warn;

use crate::catalog::{self, CityId};
use crate::config;
use crate::display::{self, build_world_clock_rows};
use crate::error::{ClockError, Result};

const TITLE: &str = "🌍 World Clock";

/// Options for one world-clock invocation; flags override the config file
pub struct WorldClockArgs {
    pub home_city: Option<CityId>,
    pub requested_cities: Option<Vec<CityId>>,
    pub column_width: usize,
    pub verbose: bool,
    pub at: Option<String>,
    /// Show every city in the catalog after the home city
    pub all: bool,
}

/// Show the current time in the home city and requested cities
pub fn run(config_path: &Path, args: WorldClockArgs) -> Result<()> {
    let config = config::load(config_path)?;

    let instant = match args.at {
        Some(at) => parse_instant(&at)?,
        None => Utc::now(),
    };

    let catalog = catalog::load_cities()?;

    let home = args.home_city.or(config.home_city);
    let requested = if args.all {
        catalog.ids()
    } else {
        args.requested_cities.unwrap_or(config.requested_cities)
    };
    let set = build_world_clock_rows(home, &requested, &catalog, instant, args.verbose);

    for warning in &set.warnings {
        warn!("{}", warning);
    }

    display::print_table(TITLE, &set, args.column_width);
    Ok(())
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ClockError::Config(format!("Invalid --at timestamp '{}': {}", text, e)))
}
