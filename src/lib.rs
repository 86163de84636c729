pub mod sdk;

pub use sdk::config::{GeocoderArgs, GeocoderConfig};
pub use sdk::geocoding::{
    GeocodeRequest, GeocodeResult, GeocodingClient, GeocodingError, MapboxGeocoder,
};
pub use sdk::http::{build_router, ApiError, AppState};
pub use sdk::resolver::{
    AddressQuery, CellQuery, CoordinateQuery, ResolveError, ResolverConfig, SpatialCellResolver,
    SpatialCellResult,
};
pub use sdk::spatial::{CellResolution, H3Indexer, SpatialError, SpatialIndexer};
