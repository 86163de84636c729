use crate::sdk::geocoding::error::{GeocodingError, ProviderErrorPayload};
use crate::sdk::geocoding::service::{GeocodeRequest, GeocodeResult, GeocodingClient};
use crate::sdk::geocoding::types::PlacesResponse;
use crate::sdk::util::rate_limit::Limiter;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Client for the Mapbox Places (v5) forward-geocoding endpoint.
pub struct MapboxGeocoder {
    client: Client,
    base_url: Url,
    limiter: Limiter,
}

impl MapboxGeocoder {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        limiter: Limiter,
    ) -> Result<Self, GeocodingError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GeocodingError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GeocodingError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            limiter,
        })
    }

    fn search_url(&self, request: &GeocodeRequest<'_>) -> Result<Url, GeocodingError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| GeocodingError::InvalidBaseUrl(self.base_url.to_string()))?;
            // `;` separates batch queries on this endpoint.
            let query = request.address.replace(';', ",");
            segments
                .pop_if_empty()
                .extend(["geocoding", "v5", "mapbox.places"])
                .push(&format!("{query}.json"));
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("access_token", request.api_key)
                .append_pair("limit", &request.limit.to_string());
            if let Some(country) = request.country {
                pairs.append_pair("country", country);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocoder {
    async fn geocode(
        &self,
        request: &GeocodeRequest<'_>,
    ) -> Result<Vec<GeocodeResult>, GeocodingError> {
        let url = self.search_url(request)?;

        self.limiter.until_ready().await;
        log::debug!(
            "[PROVIDER] Calling mapbox geocode for address: \"{}\" (country={:?}, limit={})",
            request.address,
            request.country,
            request.limit
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                let err = GeocodingError::transport(e);
                log::error!("Geocoding request for \"{}\" failed: {}", request.address, err);
                err
            })?;

        let status = response.status();
        let text = response.text().await.map_err(GeocodingError::transport)?;

        if !status.is_success() {
            if let Ok(payload) = serde_json::from_str::<ProviderErrorPayload>(&text) {
                log::warn!(
                    "Geocoding provider rejected \"{}\" with {}: {}",
                    request.address,
                    status,
                    payload.message
                );
                return Err(GeocodingError::ApiError {
                    status: status.as_u16(),
                    message: payload.message,
                });
            }
            log::error!(
                "Geocoding provider returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            return Err(GeocodingError::RawApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: PlacesResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse PlacesResponse for \"{}\"\nError: {}. Body: {}",
                request.address,
                e,
                text
            );
            e
        })?;

        log::debug!(
            "[PROVIDER] Mapbox returned {} candidate(s) for \"{}\"",
            body.features.len(),
            request.address
        );
        Ok(body.features.into_iter().map(GeocodeResult::from).collect())
    }
}
