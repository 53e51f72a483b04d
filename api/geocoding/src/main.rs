extern crate pretty_env_logger;
#[macro_use] extern crate log;

use geocoding::GeocodingApi;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let api_key = match std::env::var("GOOGLE_MAPS_API_KEY") {
        Ok(key) => key,
        Err(_) if args.len() >= 2 => args.pop().unwrap(),
        Err(_) => anyhow::bail!("Set GOOGLE_MAPS_API_KEY or pass the key as the last argument"),
    };

    let address = if args.is_empty() {
        info!("Usage: geocoding <address...> [api-key]");
        info!("Using default address (Universität Potsdam, Campus Golm, Germany)...");
        "Universität Potsdam, Campus Golm, Germany".to_string()
    } else {
        args.join(" ")
    };

    info!("Resolving '{}'...", address);
    let coords = GeocodingApi::new().resolve(&address, &api_key).await?;
    info!("Resolved to {:.6}, {:.6}", coords.lat, coords.lng);

    let json = serde_json::json!({ "lat": coords.lat, "lng": coords.lng });
    std::fs::write("coordinates.json", serde_json::to_string_pretty(&json)?)?;
    info!("Saved coordinates.json");

    Ok(())
}
