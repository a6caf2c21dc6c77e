//! PNG export of heightmaps and color grids.

mod png;

pub use png::{
    export_color_map_png, export_heightmap_png, ColorPngOptions, ExportError, PngExportOptions,
};
