use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    #[error(
        "resolution must be an integer between {min} and {max}, got {value}",
        min = super::CellResolution::MIN,
        max = super::CellResolution::MAX
    )]
    InvalidResolution { value: String },

    #[error("coordinates must be finite numbers, got ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
}
