// this_file: crates/specimen-export/src/png.rs

//! PNG export format
//!
//! Encodes specimen canvases with the `image` crate.

use image::{ImageBuffer, ImageEncoder, RgbaImage};
use specimen_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

/// Encode an RGBA8 bitmap to PNG.
///
/// Returns a valid PNG with IHDR, IDAT and IEND chunks.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    let expected_size = (bitmap.width as usize) * (bitmap.height as usize) * 4;
    if bitmap.data.len() != expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer size mismatch: expected {} bytes for {}x{} RGBA, got {}",
            expected_size,
            bitmap.width,
            bitmap.height,
            bitmap.data.len()
        ))
        .into());
    }

    let img: RgbaImage = ImageBuffer::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
        .ok_or_else(|| {
            ExportError::EncodingFailed("Failed to create image buffer from RGBA data".into())
        })?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), bitmap.width, bitmap.height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for specimen canvases
///
/// ```
/// use specimen_core::Exporter;
/// use specimen_export::PngExporter;
///
/// let exporter = PngExporter::new();
/// assert_eq!(exporter.extension(), "png");
/// ```
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_bitmap_to_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }

    #[test]
    fn test_png_export_rgba() {
        let exporter = PngExporter::default();

        let bitmap = BitmapData {
            width: 2,
            height: 2,
            data: vec![
                255, 0, 0, 255, // Red
                0, 255, 0, 255, // Green
                0, 0, 255, 255, // Blue
                0xdd, 0xdd, 0xdd, 255, // Ruler gray
            ],
        };

        let png_data = exporter.export(&bitmap).unwrap();

        assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        let decoded = image::load_from_memory(&png_data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [0xdd, 0xdd, 0xdd, 255]);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let bitmap = BitmapData {
            width: 4,
            height: 4,
            data: vec![0; 10],
        };
        assert!(encode_bitmap_to_png(&bitmap).is_err());
    }
}
