use geocoding::GeocodingApi;
use image::DynamicImage;
use staticmap::{MapQuery, StaticMapApi};

/// Resolve the address, then fetch a map centered on it. Stages run in
/// order; the first failure ends the run before the next stage starts.
pub async fn run(address: &str, api_key: &str) -> anyhow::Result<DynamicImage> {
    info!("Resolving '{}'...", address);
    let coords = GeocodingApi::new().resolve(address, api_key).await?;
    info!("Resolved to {:.6}, {:.6}", coords.lat, coords.lng);

    let query = MapQuery::centered(coords.lat, coords.lng);
    info!(
        "Fetching {}x{} map at zoom {}...",
        query.size.0, query.size.1, query.zoom
    );
    let map = StaticMapApi::new().fetch_map(&query, api_key).await?;

    Ok(map)
}
