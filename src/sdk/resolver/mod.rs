pub mod error;
pub mod query;
pub mod service;

pub use error::ResolveError;
pub use query::{AddressQuery, CellQuery, CoordinateQuery};
pub use service::{ResolverConfig, SpatialCellResolver, SpatialCellResult};
