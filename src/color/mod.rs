//! Height-based color classification and grid rendering.

mod palette;
mod grid;

pub use palette::Palette;
pub use grid::{render_color_map, ColorMap};
