use super::error::SpatialError;
use super::resolution::CellResolution;
use h3o::{LatLng, Resolution};

pub trait SpatialIndexer: Send + Sync {
    /// Returns the id of the cell containing `(lat, lng)` at `resolution`.
    ///
    /// Must be a pure function of its inputs.
    fn cell_id(
        &self,
        lat: f64,
        lng: f64,
        resolution: CellResolution,
    ) -> Result<String, SpatialError>;
}

/// Uber H3 indexing backed by `h3o`. Ids are the canonical lower-case hex form.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Indexer;

impl SpatialIndexer for H3Indexer {
    fn cell_id(
        &self,
        lat: f64,
        lng: f64,
        resolution: CellResolution,
    ) -> Result<String, SpatialError> {
        let coord =
            LatLng::new(lat, lng).map_err(|_| SpatialError::InvalidCoordinate { lat, lng })?;
        let resolution = Resolution::try_from(resolution.value()).map_err(|_| {
            SpatialError::InvalidResolution {
                value: resolution.to_string(),
            }
        })?;
        Ok(coord.to_cell(resolution).to_string())
    }
}
