use std::path::Path;
use tracing::warn;

use crate::catalog::{self, CityId};
use crate::config;
use crate::error::Result;

/// Print the current configuration
pub fn show(config_path: &Path) -> Result<()> {
    let config = config::load(config_path)?;
    println!("# {}", config_path.display());
    print!("{}", config::to_toml(&config)?);
    Ok(())
}

/// Set the default home city
pub fn set_home(config_path: &Path, id: CityId) -> Result<()> {
    warn_if_unknown(id)?;

    let config = config::load(config_path)?.with_home(id);
    config::save(&config, config_path)?;
    println!("Home city updated → {}", id);
    Ok(())
}

/// Add a city to the default requested cities
pub fn add_city(config_path: &Path, id: CityId) -> Result<()> {
    warn_if_unknown(id)?;

    match config::load(config_path)?.with_city_added(id) {
        Some(config) => {
            config::save(&config, config_path)?;
            println!("Added city → {}", id);
        }
        None => println!("City {} already in requested list.", id),
    }
    Ok(())
}

/// Remove a city from the default requested cities
pub fn remove_city(config_path: &Path, id: CityId) -> Result<()> {
    match config::load(config_path)?.with_city_removed(id) {
        Some(config) => {
            config::save(&config, config_path)?;
            println!("Removed city → {}", id);
        }
        None => println!("City {} not found in requested list.", id),
    }
    Ok(())
}

/// Delete the configuration file so defaults apply again
pub fn reset(config_path: &Path) -> Result<()> {
    if config::delete(config_path)? {
        println!("Removed configuration → {}", config_path.display());
    } else {
        println!("No config file found at {}.", config_path.display());
    }
    Ok(())
}

fn warn_if_unknown(id: CityId) -> Result<()> {
    let catalog = catalog::load_cities()?;
    if !catalog.contains(id) {
        warn!("City {} is not in the city catalog; it will be skipped when displayed", id);
    }
    Ok(())
}
