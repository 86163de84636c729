use super::error::ResolveError;
use super::query::{AddressQuery, CellQuery, CoordinateQuery};
use crate::sdk::geocoding::{GeocodeRequest, GeocodingClient};
use crate::sdk::spatial::{CellResolution, H3Indexer, SpatialIndexer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Provider settings the resolver needs per lookup.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub geocoding_api_key: Option<String>,
    pub country_filter: Option<String>,
    pub result_limit: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            geocoding_api_key: None,
            country_filter: None,
            result_limit: 1,
        }
    }
}

/// Success payload. Field names follow the HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialCellResult {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "h3Index")]
    pub cell_id: String,
    #[serde(rename = "h3Resolution")]
    pub resolution: u8,
    /// Provider's formatted address; only set for address queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

pub struct SpatialCellResolver {
    geocoder: Arc<dyn GeocodingClient>,
    indexer: Arc<dyn SpatialIndexer>,
    config: ResolverConfig,
}

impl SpatialCellResolver {
    pub fn new(geocoder: Arc<dyn GeocodingClient>, config: ResolverConfig) -> Self {
        Self {
            geocoder,
            indexer: Arc::new(H3Indexer),
            config,
        }
    }

    pub fn with_indexer(mut self, indexer: Arc<dyn SpatialIndexer>) -> Self {
        self.indexer = indexer;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub async fn resolve(&self, query: &CellQuery) -> Result<SpatialCellResult, ResolveError> {
        match query {
            CellQuery::Coordinates(query) => self.resolve_coordinates(query),
            CellQuery::Address(query) => self.resolve_address(query).await,
        }
    }

    fn resolve_coordinates(
        &self,
        query: &CoordinateQuery,
    ) -> Result<SpatialCellResult, ResolveError> {
        self.build_result(query.lat, query.lng, query.resolution, None)
    }

    async fn resolve_address(
        &self,
        query: &AddressQuery,
    ) -> Result<SpatialCellResult, ResolveError> {
        let api_key = self
            .config
            .geocoding_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ResolveError::MissingConfiguration)?;

        let request = GeocodeRequest {
            address: query.address(),
            api_key,
            country: self.config.country_filter.as_deref(),
            limit: self.config.result_limit,
        };
        let candidates = self.geocoder.geocode(&request).await?;

        let best = candidates
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::AddressNotFound(query.address().to_string()))?;
        log::debug!(
            "Geocoded \"{}\" to \"{}\" ({}, {})",
            query.address(),
            best.formatted_address,
            best.lat,
            best.lng
        );

        self.build_result(
            best.lat,
            best.lng,
            query.resolution,
            Some(best.formatted_address),
        )
    }

    fn build_result(
        &self,
        lat: f64,
        lng: f64,
        resolution: CellResolution,
        address: Option<String>,
    ) -> Result<SpatialCellResult, ResolveError> {
        let cell_id = self.indexer.cell_id(lat, lng, resolution)?;
        Ok(SpatialCellResult {
            lat,
            lng,
            cell_id,
            resolution: resolution.value(),
            address,
        })
    }
}
