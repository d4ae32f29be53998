use thiserror::Error;

use crate::catalog::CityId;

/// Clock error types
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("City data error: {0}")]
    DataLoad(String),

    #[error("Too many matches ({0}). Please use a stricter similarity.")]
    TooManyMatches(usize),

    #[error("Cannot resolve timezone '{timezone}' for city {city_id}")]
    TimezoneResolution { city_id: CityId, timezone: String },

    #[error("Unknown city id {0}")]
    UnknownCityId(CityId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClockError {
    /// Process exit code for a command that failed with this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClockError::DataLoad(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for clock operations
pub type Result<T> = std::result::Result<T, ClockError>;
