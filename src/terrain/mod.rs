//! Terrain heightmap storage and fault formation generation.

mod heightmap;
mod fault;

pub use heightmap::Heightmap;
pub use fault::{apply_fault, generate_heightmap, generate_into, FaultConfig};

use thiserror::Error;

/// Errors that can occur during terrain generation.
#[derive(Error, Debug)]
pub enum FaultError {
    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },
    /// The random source kept producing identical fault points.
    #[error("random source failed to produce two distinct fault points after {0} attempts")]
    DegenerateFaultLine(u32),
}
