use crate::sdk::geocoding::provider::mapbox::DEFAULT_BASE_URL;
use crate::sdk::geocoding::{GeocodingError, MapboxGeocoder};
use crate::sdk::resolver::{ResolverConfig, SpatialCellResolver};
use crate::sdk::util::rate_limit::geocoder_limiter;
use clap::Args;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Upper bound the Places API accepts for `limit`.
pub const MAX_RESULT_LIMIT: u8 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("result limit must be between 1 and {max}, got {0}", max = MAX_RESULT_LIMIT)]
    InvalidResultLimit(u8),

    #[error("geocoder requests per minute must be greater than zero")]
    ZeroRequestRate,

    #[error("geocoder timeout must be greater than zero")]
    ZeroTimeout,
}

/// Geocoding provider options, read from flags or the environment.
#[derive(Args, Debug, Clone)]
pub struct GeocoderArgs {
    /// Provider access token. Only address lookups need it
    #[arg(long = "api-key", env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub api_key: Option<String>,

    /// ISO country code restricting address lookups (empty disables the filter)
    #[arg(long, env = "GEOCODER_COUNTRY", default_value = "mx")]
    pub country: String,

    /// Number of provider candidates requested; the first one is used
    #[arg(long, env = "GEOCODER_RESULT_LIMIT", default_value_t = 1)]
    pub result_limit: u8,

    #[arg(long = "geocoder-base-url", env = "GEOCODER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long = "geocoder-timeout-secs", env = "GEOCODER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(
        long = "geocoder-requests-per-minute",
        env = "GEOCODER_REQUESTS_PER_MINUTE",
        default_value_t = 600
    )]
    pub requests_per_minute: u32,
}

impl Default for GeocoderArgs {
    fn default() -> Self {
        Self {
            api_key: None,
            country: "mx".to_string(),
            result_limit: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            requests_per_minute: 600,
        }
    }
}

/// Validated geocoder settings.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub api_key: Option<String>,
    pub country_filter: Option<String>,
    pub result_limit: u8,
    pub base_url: String,
    pub timeout: Duration,
    pub requests_per_minute: NonZeroU32,
}

impl TryFrom<GeocoderArgs> for GeocoderConfig {
    type Error = ConfigError;

    fn try_from(args: GeocoderArgs) -> Result<Self, Self::Error> {
        if args.result_limit == 0 || args.result_limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::InvalidResultLimit(args.result_limit));
        }
        if args.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let requests_per_minute =
            NonZeroU32::new(args.requests_per_minute).ok_or(ConfigError::ZeroRequestRate)?;

        Ok(Self {
            api_key: non_blank(args.api_key),
            country_filter: non_blank(Some(args.country)).map(|c| c.to_ascii_lowercase()),
            result_limit: args.result_limit,
            base_url: args.base_url,
            timeout: Duration::from_secs(args.timeout_secs),
            requests_per_minute,
        })
    }
}

impl GeocoderConfig {
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            geocoding_api_key: self.api_key.clone(),
            country_filter: self.country_filter.clone(),
            result_limit: self.result_limit,
        }
    }

    /// Wires the Mapbox client, its rate limiter and the H3 indexer together.
    pub fn build_resolver(&self) -> Result<SpatialCellResolver, GeocodingError> {
        let limiter = geocoder_limiter(self.requests_per_minute);
        let geocoder = MapboxGeocoder::new(&self.base_url, self.timeout, limiter)?;
        Ok(SpatialCellResolver::new(
            Arc::new(geocoder),
            self.resolver_config(),
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_restrict_to_mexico_with_single_result() {
        let config = GeocoderConfig::try_from(GeocoderArgs::default()).unwrap();
        assert_eq!(config.country_filter.as_deref(), Some("mx"));
        assert_eq!(config.result_limit, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = GeocoderConfig::try_from(GeocoderArgs {
            api_key: Some("  ".to_string()),
            country: String::new(),
            ..GeocoderArgs::default()
        })
        .unwrap();
        assert!(config.api_key.is_none());
        assert!(config.country_filter.is_none());
        assert!(config.resolver_config().geocoding_api_key.is_none());
    }

    #[test]
    fn country_is_normalised() {
        let config = GeocoderConfig::try_from(GeocoderArgs {
            country: " MX ".to_string(),
            ..GeocoderArgs::default()
        })
        .unwrap();
        assert_eq!(config.country_filter.as_deref(), Some("mx"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let limit = GeocoderConfig::try_from(GeocoderArgs {
            result_limit: 0,
            ..GeocoderArgs::default()
        });
        assert_eq!(limit.unwrap_err(), ConfigError::InvalidResultLimit(0));

        let rate = GeocoderConfig::try_from(GeocoderArgs {
            requests_per_minute: 0,
            ..GeocoderArgs::default()
        });
        assert_eq!(rate.unwrap_err(), ConfigError::ZeroRequestRate);

        let timeout = GeocoderConfig::try_from(GeocoderArgs {
            timeout_secs: 0,
            ..GeocoderArgs::default()
        });
        assert_eq!(timeout.unwrap_err(), ConfigError::ZeroTimeout);
    }

    #[test]
    fn builds_resolver_from_config() {
        let config = GeocoderConfig::try_from(GeocoderArgs {
            api_key: Some("pk.test".to_string()),
            ..GeocoderArgs::default()
        })
        .unwrap();
        let resolver = config.build_resolver().unwrap();
        assert_eq!(resolver.config().geocoding_api_key.as_deref(), Some("pk.test"));
    }
}
