use super::error::GeocodingError;
use super::types::Feature;
use async_trait::async_trait;

/// A single provider candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<Feature> for GeocodeResult {
    fn from(feature: Feature) -> Self {
        let [lng, lat] = feature.center;
        Self {
            formatted_address: feature.place_name,
            lat,
            lng,
        }
    }
}

/// Parameters of one forward-geocoding lookup.
#[derive(Debug, Clone, Copy)]
pub struct GeocodeRequest<'a> {
    pub address: &'a str,
    pub api_key: &'a str,
    /// ISO 3166-1 alpha-2 code restricting the search, if any.
    pub country: Option<&'a str>,
    pub limit: u8,
}

#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolves free text to candidate coordinates, best match first.
    ///
    /// An empty vec means the provider answered but found nothing.
    async fn geocode(
        &self,
        request: &GeocodeRequest<'_>,
    ) -> Result<Vec<GeocodeResult>, GeocodingError>;
}
