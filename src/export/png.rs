//! PNG encoding for heightmaps (16-bit grayscale) and color maps (RGB).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma, Rgb};
use thiserror::Error;

use crate::color::ColorMap;
use crate::terrain::Heightmap;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid height range: min ({0}) >= max ({1})")]
    InvalidHeightRange(f32, f32),
}

/// Options for heightmap PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// Minimum height value for normalization.
    pub min_height: f32,
    /// Maximum height value for normalization.
    pub max_height: f32,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            min_height: 0.0,
            max_height: 1.0,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngExportOptions {
    /// Creates options spanning the heightmap's own range.
    ///
    /// A flat map (every cell equal, e.g. a zero-iteration terrain) gets
    /// a tiny synthetic range so export still succeeds.
    pub fn auto_range(map: &Heightmap) -> Self {
        let (min, max) = map.height_range();
        let max = if max > min { max } else { min + 1e-6 };
        Self {
            min_height: min,
            max_height: max,
            ..Default::default()
        }
    }
}

/// Options for color map PNG export.
#[derive(Debug, Clone)]
pub struct ColorPngOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for ColorPngOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports the extended heightmap grid as a 16-bit grayscale PNG.
///
/// Heights are normalized into `[min_height, max_height]` and scaled to
/// the u16 range; out-of-range values clamp to the endpoints.
pub fn export_heightmap_png(
    map: &Heightmap,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let min = options.min_height;
    let max = options.max_height;

    if min >= max {
        return Err(ExportError::InvalidHeightRange(min, max));
    }

    let width = map.extended_width();
    let height = map.extended_height();
    let range = max - min;

    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let normalized = ((map.get(x, y) - min) / range).clamp(0.0, 1.0);
            let value = (normalized * 65535.0) as u16;
            img.put_pixel(x, y, Luma([value]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    // The encoder consumes bytes; reinterpret the u16 pixels.
    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(byte_slice, width, height, image::ExtendedColorType::L16)?;

    Ok(())
}

/// Exports a rendered color map as an 8-bit RGB PNG.
///
/// The buffer's `x * height + y` cell order is transposed into the
/// image's row-major pixel order at encode time.
pub fn export_color_map_png(
    colors: &ColorMap,
    path: &Path,
    options: &ColorPngOptions,
) -> Result<(), ExportError> {
    let width = colors.width();
    let height = colors.height();

    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = colors.get(x, y);
            img.put_pixel(x, y, Rgb([channel_to_u8(r), channel_to_u8(g), channel_to_u8(b)]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;

    Ok(())
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
