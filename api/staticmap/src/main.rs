extern crate pretty_env_logger;
#[macro_use] extern crate log;

use staticmap::{MapQuery, StaticMapApi};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let api_key = std::env::var("GOOGLE_MAPS_API_KEY")
        .map_err(|_| anyhow::anyhow!("GOOGLE_MAPS_API_KEY is not set"))?;

    let (lat, lng) = if args.len() >= 3 {
        let lat: f64 = args[1].parse().map_err(|_| anyhow::anyhow!("Invalid latitude"))?;
        let lng: f64 = args[2].parse().map_err(|_| anyhow::anyhow!("Invalid longitude"))?;
        (lat, lng)
    } else {
        info!("Usage: {} <latitude> <longitude> [zoom]", args[0]);
        info!("Using default coordinates (52.4009N 12.9736E)...");
        (52.4009, 12.9736)
    };

    let mut query = MapQuery::centered(lat, lng);
    if let Some(zoom) = args.get(3) {
        query.zoom = zoom.parse().map_err(|_| anyhow::anyhow!("Invalid zoom"))?;
    }

    info!(
        "Fetching {}x{} map around {},{} at zoom {}...",
        query.size.0, query.size.1, lat, lng, query.zoom
    );
    let map = StaticMapApi::new().fetch_map(&query, &api_key).await?;

    let output = Path::new("map.png");
    map.save(output)?;
    info!("Saved map to {:?}", output);

    Ok(())
}
