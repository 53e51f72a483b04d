use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Errors raised while resolving an address.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Non-200 status, an empty result list, or an unreadable body. The
    /// provider does not let us tell these apart reliably, so they share
    /// one kind.
    #[error("Could not retrieve location for the given address")]
    LocationNotFound,
    /// Connection-level failure before any response was read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Google Maps Geocoding API client
pub struct GeocodingApi {
    client: reqwest::Client,
}

impl GeocodingApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Resolve a free-form address to coordinates. Only the first result
    /// returned by the provider is used.
    pub async fn resolve(&self, address: &str, api_key: &str) -> Result<Coordinates, GeocodeError> {
        let response = self
            .client
            .get(GEOCODE_ENDPOINT)
            .query(&[("address", address), ("key", api_key)])
            .send()
            .await?;
        check_status(response.status())?;
        let body = response.text().await?;
        parse_geocode_response(&body)
    }
}

impl Default for GeocodingApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a geocoding response status to the collapsed error kind; the
/// provider contract is status 200 exactly (pure function)
fn check_status(status: StatusCode) -> Result<(), GeocodeError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(GeocodeError::LocationNotFound)
    }
}

/// Extract the first result's location from a geocoding response body
/// (pure function)
pub fn parse_geocode_response(body: &str) -> Result<Coordinates, GeocodeError> {
    let parsed: GeocodeResponse =
        serde_json::from_str(body).map_err(|_| GeocodeError::LocationNotFound)?;
    parsed
        .results
        .first()
        .map(|result| Coordinates {
            lat: result.geometry.location.lat,
            lng: result.geometry.location.lng,
        })
        .ok_or(GeocodeError::LocationNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POTSDAM: &str = r#"{"results":[{"geometry":{"location":{"lat":52.4009,"lng":12.9736}}}]}"#;

    #[test]
    fn parses_first_result() {
        let coords = parse_geocode_response(POTSDAM).unwrap();
        assert_eq!(
            coords,
            Coordinates {
                lat: 52.4009,
                lng: 12.9736
            }
        );
    }

    #[test]
    fn coordinates_are_in_range() {
        let coords = parse_geocode_response(POTSDAM).unwrap();
        assert!((-90.0..=90.0).contains(&coords.lat));
        assert!((-180.0..=180.0).contains(&coords.lng));
    }

    #[test]
    fn empty_results_is_location_not_found() {
        let err = parse_geocode_response(r#"{"results":[]}"#).unwrap_err();
        assert!(matches!(err, GeocodeError::LocationNotFound));
    }

    #[test]
    fn missing_results_is_location_not_found() {
        let err = parse_geocode_response(r#"{"status":"ZERO_RESULTS"}"#).unwrap_err();
        assert!(matches!(err, GeocodeError::LocationNotFound));
    }

    #[test]
    fn malformed_body_is_location_not_found() {
        let err = parse_geocode_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GeocodeError::LocationNotFound));
    }

    #[test]
    fn multiple_results_use_the_first() {
        let body = r#"{"results":[
            {"geometry":{"location":{"lat":1.5,"lng":2.5}}},
            {"geometry":{"location":{"lat":3.5,"lng":4.5}}}
        ]}"#;
        let coords = parse_geocode_response(body).unwrap();
        assert_eq!(coords.lat, 1.5);
        assert_eq!(coords.lng, 2.5);
    }

    #[test]
    fn ok_status_passes() {
        assert!(check_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn any_non_200_status_is_location_not_found() {
        for status in [
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = check_status(status).unwrap_err();
            assert!(matches!(err, GeocodeError::LocationNotFound));
        }
    }

    #[test]
    fn error_message_matches_user_facing_text() {
        assert_eq!(
            GeocodeError::LocationNotFound.to_string(),
            "Could not retrieve location for the given address"
        );
    }
}
