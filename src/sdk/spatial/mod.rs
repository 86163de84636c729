//! Hexagonal grid indexing of coordinates.

pub mod error;
pub mod indexer;
pub mod resolution;

pub use error::SpatialError;
pub use indexer::{H3Indexer, SpatialIndexer};
pub use resolution::CellResolution;
