use std::fmt::Write;

use slidereg_geometry::Rect;

use crate::properties::ImageProperties;

/// Format one image's properties as a human-readable report block.
pub fn properties_report(props: &ImageProperties) -> String {
    let tr = props.frame.placement;
    let pixel_size = props.frame.pixel_size;
    let (width, height) = props.frame.pixel_dims;

    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "Image location: {}", props.location.display());
    let _ = writeln!(out, "Number of levels: {}", props.level_count);
    let _ = writeln!(out, "---Image Size---");
    let _ = writeln!(out, "    Width: {width}");
    let _ = writeln!(out, "    Height: {height}");
    let _ = writeln!(out, "---Image Pixel Size---");
    let _ = writeln!(out, "    Pixel Width: {} um", pixel_size.width);
    let _ = writeln!(out, "    Pixel Height: {} um", pixel_size.height);
    let _ = writeln!(out, "---Placement Transform---");
    let _ = writeln!(
        out,
        "    Pixel Spacing (um): {}",
        props.override_pixel_spacing
    );
    let _ = writeln!(out, "    Center: {}", tr.center);
    let _ = writeln!(out, "    Translation: {}", tr.translation);
    let _ = writeln!(out, "    Scale: {}", tr.scale);
    let _ = writeln!(out, "    Rotation: {}", tr.rotation);
    let _ = writeln!(out, "Opacity: {}", props.opacity);
    let _ = writeln!(out, "Visibility: {}", props.visibility);
    let _ = writeln!(
        out,
        "Color model and pixel type: {} {}",
        props.color_model, props.pixel_type
    );
    out
}

/// Number of pixels an output constrained to `rect` would contain; zero for
/// an empty rectangle.
pub fn estimate_output_pixels(rect: &Rect) -> f64 {
    if rect.is_empty() {
        0.0
    } else {
        rect.width * rect.height
    }
}

/// Human-readable storage estimate for a pixel count, at four bytes per
/// pixel, using binary prefixes.
pub fn estimate_storage_size(pixels: f64) -> String {
    const BYTES_PER_PIXEL: f64 = 4.0;
    let bytes = BYTES_PER_PIXEL * pixels;
    if bytes < 1.0 {
        return "0 bytes".to_string();
    }
    let power = (bytes.ln() / 1024f64.ln()) as i32;
    let value = bytes / 1024f64.powi(power);
    let unit = match power {
        0 => "bytes",
        1 => "kB",
        2 => "MB",
        3 => "GB",
        _ => "TB",
    };
    format!("{value:.3} {unit}")
}
