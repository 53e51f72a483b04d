use image::DynamicImage;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};

/// Convert a decoded raster image into a Slint image.
pub fn to_slint_image(map: &DynamicImage) -> Image {
    let rgba = map.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let raw_pixels: Vec<u8> = rgba.into_raw();

    let pixel_buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&raw_pixels, width, height);
    Image::from_rgba8(pixel_buffer)
}

/// Window title shown above the map.
pub fn window_title(address: &str) -> String {
    format!("Map centered around '{}'", address)
}
