use image::DynamicImage;
use reqwest::{Client, StatusCode};
use thiserror::Error;

const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Parameters for one static-map request.
#[derive(Debug, Clone, PartialEq)]
pub struct MapQuery {
    pub lat: f64,
    pub lng: f64,
    /// Provider zoom level; 19 gives roughly a 50m:50px scale.
    pub zoom: u32,
    /// Logical pixel size (width, height).
    pub size: (u32, u32),
    /// Pixel density multiplier for high-DPI output, independent of size.
    pub scale: u8,
}

impl MapQuery {
    /// A query centered on the given coordinates with the default
    /// zoom, size, and scale.
    pub fn centered(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            zoom: 19,
            size: (1000, 1000),
            scale: 2,
        }
    }

    /// Encode as static-map query parameters (pure function)
    pub fn to_query_params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("center", format!("{},{}", self.lat, self.lng)),
            ("zoom", self.zoom.to_string()),
            ("size", format!("{}x{}", self.size.0, self.size.1)),
            ("scale", self.scale.to_string()),
            ("key", api_key.to_string()),
        ]
    }
}

/// Errors raised while fetching a map image.
#[derive(Debug, Error)]
pub enum MapError {
    /// Any non-200 status from the provider.
    #[error("Failed to retrieve the map image")]
    MapFetchFailed,
    /// Connection-level failure before any response was read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The provider answered 200 but the body was not a decodable image.
    #[error(transparent)]
    Decode(#[from] image::ImageError),
}

/// Google Static Maps API client
pub struct StaticMapApi {
    client: Client,
}

impl StaticMapApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch a rendered map centered on the query coordinates and decode
    /// it into an in-memory image.
    pub async fn fetch_map(&self, query: &MapQuery, api_key: &str) -> Result<DynamicImage, MapError> {
        let response = self
            .client
            .get(STATIC_MAP_ENDPOINT)
            .query(&query.to_query_params(api_key))
            .send()
            .await?;
        check_status(response.status())?;
        let bytes = response.bytes().await?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

impl Default for StaticMapApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a static-map response status to the fetch error; the provider
/// contract is status 200 exactly (pure function)
fn check_status(status: StatusCode) -> Result<(), MapError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(MapError::MapFetchFailed)
    }
}
