pub mod error;
pub mod provider;
pub mod service;
pub mod types;

pub use error::GeocodingError;
pub use provider::MapboxGeocoder;
pub use service::{GeocodeRequest, GeocodeResult, GeocodingClient};
