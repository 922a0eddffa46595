use eframe::egui;
use std::io::Cursor;
use std::path::Path;

use crate::error::ExportError;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "dna-structure.png";

/// Crops a full-viewport screenshot down to the canvas rectangle (in points).
pub fn crop_canvas(
    screenshot: &egui::ColorImage,
    canvas: egui::Rect,
    pixels_per_point: f32,
) -> egui::ColorImage {
    screenshot.region(&canvas, Some(pixels_per_point))
}

pub fn to_rgba_image(image: &egui::ColorImage) -> Result<image::RgbaImage, ExportError> {
    let [w, h] = image.size;
    if w == 0 || h == 0 {
        return Err(ExportError::EmptyCapture);
    }
    let raw: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    image::RgbaImage::from_raw(w as u32, h as u32, raw).ok_or(ExportError::EmptyCapture)
}

pub fn encode_png(image: &egui::ColorImage) -> Result<Vec<u8>, ExportError> {
    let rgba = to_rgba_image(image)?;
    let mut bytes = Cursor::new(Vec::new());
    rgba.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

pub fn save_png(image: &egui::ColorImage, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    log::info!(
        "exported {}x{} canvas to {}",
        image.size[0],
        image.size[1],
        path.display()
    );
    Ok(())
}
