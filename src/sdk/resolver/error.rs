use crate::sdk::geocoding::GeocodingError;
use crate::sdk::spatial::SpatialError;
use thiserror::Error;

pub const MISSING_INPUT: &str = "Either an address or lat/lng coordinates are required";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Geocoding API key is not configured")]
    MissingConfiguration,

    #[error("Geocoding service error: {0}")]
    GeocodingServiceError(#[from] GeocodingError),

    #[error("Address not found: {0}")]
    AddressNotFound(String),
}

impl From<SpatialError> for ResolveError {
    fn from(err: SpatialError) -> Self {
        ResolveError::InvalidInput(err.to_string())
    }
}
