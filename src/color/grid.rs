//! Color grid rendering from heightmaps.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::terrain::Heightmap;
use super::Palette;

/// The rendered color grid for a heightmap's interior.
///
/// Colors are stored in a flat buffer indexed by `x * height + y`, ready
/// for upload to a pixel or texture surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMap {
    width: u32,
    height: u32,
    colors: Vec<[f32; 3]>,
    palette: Palette,
    mean_height: f32,
}

impl ColorMap {
    /// Interior terrain width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Interior terrain height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The flat color buffer, length `width * height`.
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// The color of the interior cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> [f32; 3] {
        debug_assert!(x < self.width && y < self.height);
        self.colors[(x as usize) * (self.height as usize) + (y as usize)]
    }

    /// Palette chosen for this render pass.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Interior mean height this pass classified against.
    pub fn mean_height(&self) -> f32 {
        self.mean_height
    }
}

/// Renders the heightmap interior into a flat color buffer.
///
/// A palette is drawn uniformly on every call, so redrawing an unchanged
/// heightmap may change its look. The interior mean is recomputed from
/// the current heights before classification, so a stale mean is never
/// used.
pub fn render_color_map<R: Rng>(map: &Heightmap, rng: &mut R) -> ColorMap {
    let palette = Palette::sample(rng);
    let mean = map.mean_height();

    let width = map.width();
    let height = map.height();
    let mut colors = Vec::with_capacity((width as usize) * (height as usize));

    for x in 0..width {
        for y in 0..height {
            colors.push(palette.shade(map.get(x, y), mean));
        }
    }

    ColorMap {
        width,
        height,
        colors,
        palette,
        mean_height: mean,
    }
}
