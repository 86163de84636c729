use super::error::{ResolveError, MISSING_INPUT};
use crate::sdk::spatial::{CellResolution, SpatialError};
use serde_json::Value;

/// Explicit coordinates; never needs the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lng: f64,
    pub resolution: CellResolution,
}

impl CoordinateQuery {
    /// Only finiteness is checked. Values outside `[-90, 90]` / `[-180, 180]`
    /// are not rejected: the indexer wraps them onto the sphere, so e.g.
    /// `(91, 181)` yields the cell of the wrapped point, not an error.
    pub fn new(lat: f64, lng: f64, resolution: CellResolution) -> Result<Self, ResolveError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(SpatialError::InvalidCoordinate { lat, lng }.into());
        }
        Ok(Self {
            lat,
            lng,
            resolution,
        })
    }
}

/// Free text that has to be geocoded first.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressQuery {
    address: String,
    pub resolution: CellResolution,
}

impl AddressQuery {
    pub fn new(address: &str, resolution: CellResolution) -> Result<Self, ResolveError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ResolveError::InvalidInput(
                "Address must not be empty".to_string(),
            ));
        }
        Ok(Self {
            address: address.to_string(),
            resolution,
        })
    }

    /// The trimmed address text.
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellQuery {
    Coordinates(CoordinateQuery),
    Address(AddressQuery),
}

impl CellQuery {
    /// Validates a loosely typed request body.
    ///
    /// A finite numeric `lat`/`lng` pair takes precedence over `address`.
    /// A missing or `null` resolution falls back to [`CellResolution::DEFAULT`].
    pub fn parse(body: &Value) -> Result<Self, ResolveError> {
        let fields = body.as_object().ok_or_else(|| {
            ResolveError::InvalidInput("Request body must be a JSON object".to_string())
        })?;

        let resolution = parse_resolution(fields.get("resolution"))?;

        let lat = fields.get("lat").and_then(finite_number);
        let lng = fields.get("lng").and_then(finite_number);
        if let (Some(lat), Some(lng)) = (lat, lng) {
            return Ok(CellQuery::Coordinates(CoordinateQuery::new(
                lat, lng, resolution,
            )?));
        }

        match fields.get("address") {
            Some(Value::String(address)) => Ok(CellQuery::Address(AddressQuery::new(
                address, resolution,
            )?)),
            _ => Err(ResolveError::InvalidInput(MISSING_INPUT.to_string())),
        }
    }

    pub fn resolution(&self) -> CellResolution {
        match self {
            CellQuery::Coordinates(query) => query.resolution,
            CellQuery::Address(query) => query.resolution,
        }
    }

    /// Short label for logs.
    pub fn mode(&self) -> &'static str {
        match self {
            CellQuery::Coordinates(_) => "coordinates",
            CellQuery::Address(_) => "address",
        }
    }
}

impl From<CoordinateQuery> for CellQuery {
    fn from(query: CoordinateQuery) -> Self {
        CellQuery::Coordinates(query)
    }
}

impl From<AddressQuery> for CellQuery {
    fn from(query: AddressQuery) -> Self {
        CellQuery::Address(query)
    }
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

fn parse_resolution(value: Option<&Value>) -> Result<CellResolution, ResolveError> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(CellResolution::DEFAULT);
    };
    let invalid = || SpatialError::InvalidResolution {
        value: value.to_string(),
    };

    let number = value.as_f64().ok_or_else(invalid)?;
    if number.fract() != 0.0 || number < 0.0 || number > f64::from(CellResolution::MAX) {
        return Err(invalid().into());
    }
    Ok(CellResolution::new(number as u8)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invalid_input(body: Value) -> String {
        match CellQuery::parse(&body) {
            Err(ResolveError::InvalidInput(message)) => message,
            other => panic!("expected InvalidInput for {body}, got {other:?}"),
        }
    }

    #[test]
    fn coordinates_take_precedence_over_address() {
        let query = CellQuery::parse(&json!({
            "lat": 19.4326,
            "lng": -99.1332,
            "address": "ignored",
            "resolution": 9
        }))
        .unwrap();

        match query {
            CellQuery::Coordinates(q) => {
                assert_eq!((q.lat, q.lng), (19.4326, -99.1332));
                assert_eq!(q.resolution.value(), 9);
            }
            other => panic!("expected coordinates, got {other:?}"),
        }
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let query = CellQuery::parse(&json!({ "lat": 20, "lng": -100 })).unwrap();
        assert_eq!(query.mode(), "coordinates");
        assert_eq!(query.resolution(), CellResolution::DEFAULT);
    }

    #[test]
    fn out_of_range_coordinates_are_accepted_but_not_infinite_ones() {
        let query = CoordinateQuery::new(91.0, 181.0, CellResolution::DEFAULT).unwrap();
        assert_eq!((query.lat, query.lng), (91.0, 181.0));
        assert!(CoordinateQuery::new(1e308, -1e308, CellResolution::DEFAULT).is_ok());

        let err = CoordinateQuery::new(f64::INFINITY, 0.0, CellResolution::DEFAULT).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput(_)));
    }

    #[test]
    fn half_a_coordinate_pair_falls_back_to_address() {
        let query = CellQuery::parse(&json!({ "lat": 19.4, "address": "  Calle X  " })).unwrap();
        match query {
            CellQuery::Address(q) => assert_eq!(q.address(), "Calle X"),
            other => panic!("expected address, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coordinates_are_not_coordinates() {
        let message = invalid_input(json!({ "lat": "19.4", "lng": "-99.1" }));
        assert_eq!(message, MISSING_INPUT);
    }

    #[test]
    fn missing_input_is_rejected() {
        assert_eq!(invalid_input(json!({})), MISSING_INPUT);
        assert_eq!(invalid_input(json!({ "resolution": 8 })), MISSING_INPUT);
        assert_eq!(invalid_input(json!({ "address": 42 })), MISSING_INPUT);
        assert_eq!(invalid_input(json!({ "lat": 1.0 })), MISSING_INPUT);
    }

    #[test]
    fn blank_address_is_rejected() {
        assert_eq!(
            invalid_input(json!({ "address": "   " })),
            "Address must not be empty"
        );
    }

    #[test]
    fn body_must_be_an_object() {
        assert_eq!(
            invalid_input(json!([19.4, -99.1])),
            "Request body must be a JSON object"
        );
        invalid_input(json!(null));
    }

    #[test]
    fn resolution_defaults_when_missing_or_null() {
        let missing = CellQuery::parse(&json!({ "address": "x" })).unwrap();
        let null = CellQuery::parse(&json!({ "address": "x", "resolution": null })).unwrap();
        assert_eq!(missing.resolution().value(), 8);
        assert_eq!(null.resolution().value(), 8);
    }

    #[test]
    fn resolution_bounds_are_enforced() {
        assert_eq!(
            CellQuery::parse(&json!({ "lat": 0, "lng": 0, "resolution": 15 }))
                .unwrap()
                .resolution()
                .value(),
            15
        );
        assert_eq!(
            CellQuery::parse(&json!({ "lat": 0, "lng": 0, "resolution": 8.0 }))
                .unwrap()
                .resolution()
                .value(),
            8
        );

        for bad in [json!(16), json!(-1), json!(7.5), json!("8"), json!(true)] {
            let message = invalid_input(json!({ "lat": 0, "lng": 0, "resolution": bad }));
            assert!(
                message.starts_with("resolution must be an integer between 0 and 15"),
                "{message}"
            );
        }
    }
}
