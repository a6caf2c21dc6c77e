//! Procedural terrain generation using the fault formation algorithm.
//!
//! This crate builds a terrain heightmap by accumulating randomly chosen
//! fault lines over a rectangular grid, then classifies each cell into a
//! two-color palette against the mean height to produce a renderable
//! color buffer.

pub mod geometry;
pub mod terrain;
pub mod color;
pub mod scene;
pub mod export;

pub use geometry::{fault_side, lerp};
pub use terrain::{apply_fault, generate_heightmap, generate_into, FaultConfig, FaultError, Heightmap};
pub use color::{render_color_map, ColorMap, Palette};
pub use scene::{GenerateReport, TerrainScene};
