mod app;

slint::include_modules!();

extern crate pretty_env_logger;
#[macro_use] extern crate log;

const DEFAULT_ADDRESS: &str = "Universität Potsdam, Campus Golm, Germany";

fn main() -> Result<(), slint::PlatformError> {
    pretty_env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let api_key = match std::env::var("GOOGLE_MAPS_API_KEY") {
        Ok(key) => key,
        Err(_) if args.len() >= 2 => args.pop().unwrap(),
        // An empty key is rejected by the providers and surfaces as a
        // resolve/fetch error below.
        Err(_) => String::new(),
    };

    let address = if args.is_empty() {
        info!("Usage: mapsnap-frontend <address...> [api-key]");
        info!("Using default address ({})...", DEFAULT_ADDRESS);
        DEFAULT_ADDRESS.to_string()
    } else {
        args.join(" ")
    };

    let rt = tokio::runtime::Runtime::new().unwrap();
    let map = match rt.block_on(app::pipeline::run(&address, &api_key)) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    let main_window = MainWindow::new()?;
    main_window.set_map_image(app::viewer::to_slint_image(&map));
    main_window.set_map_title(app::viewer::window_title(&address).into());

    // Blocks until the window is closed
    main_window.run()
}
