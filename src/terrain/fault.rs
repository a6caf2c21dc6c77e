//! Fault formation heightmap generation.
//!
//! Each iteration cuts the grid with a random fault line and raises every
//! cell on one side of it by a height delta that decays linearly across
//! iterations, so early faults shape the large-scale relief and later
//! faults only roughen it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{fault_side, lerp};
use super::{FaultError, Heightmap};

/// Upper bound on attempts to draw two distinct fault points per iteration.
const MAX_RESAMPLE_ATTEMPTS: u32 = 1024;

/// Configuration for fault formation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultConfig {
    /// Number of fault iterations to apply.
    pub iterations: u32,
    /// Height delta at the first iteration.
    pub max_change: f32,
    /// Height delta approached by the last iteration.
    pub min_change: f32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            max_change: 1.25,
            min_change: 0.25,
            seed: 42,
        }
    }
}

impl FaultConfig {
    /// Creates a configuration with the given seed and default parameters.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Creates a configuration producing steep, cliff-heavy terrain.
    pub fn rugged(seed: u64) -> Self {
        Self {
            iterations: 300,
            max_change: 2.0,
            min_change: 0.5,
            seed,
        }
    }

    /// Creates a configuration producing gently rolling terrain.
    pub fn smooth(seed: u64) -> Self {
        Self {
            iterations: 1000,
            max_change: 0.8,
            min_change: 0.1,
            seed,
        }
    }
}

/// Generates a heightmap by iterative fault accumulation.
///
/// Convenience entry point that seeds a ChaCha8 stream from `config.seed`;
/// the same configuration always produces the same heightmap.
///
/// # Arguments
/// * `width` - Interior terrain width (positive)
/// * `height` - Interior terrain height (positive)
/// * `config` - Fault formation parameters
pub fn generate_heightmap(
    width: u32,
    height: u32,
    config: &FaultConfig,
) -> Result<Heightmap, FaultError> {
    let mut map = Heightmap::new(width, height)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    generate_into(&mut map, config, &mut rng)?;
    Ok(map)
}

/// Runs fault accumulation into an existing heightmap using the provided
/// random source.
///
/// The map is reset to all zeros first, so no values survive from a prior
/// pass. With `config.iterations == 0` the result is the all-zero map.
pub fn generate_into<R: Rng>(
    map: &mut Heightmap,
    config: &FaultConfig,
    rng: &mut R,
) -> Result<(), FaultError> {
    map.reset();

    let extent = Vec2::new(map.extended_width() as f32, map.extended_height() as f32);
    let iterations = config.iterations;

    for i in 0..iterations {
        // Delta for this iteration, decaying linearly from max toward min.
        let delta = lerp(
            config.max_change,
            config.min_change,
            i as f32 / iterations as f32,
        );

        let (point1, point2) = sample_fault_points(extent, rng)?;
        apply_fault(map, point1, point2, delta);
    }

    Ok(())
}

/// Applies a single fault line to the heightmap.
///
/// Every extended-grid cell on the negative-perp-dot side of the directed
/// line from `point1` to `point2` gains `delta`; cells on the line or on
/// the other side are untouched. Updates are independent per cell, so
/// traversal order does not affect the result.
pub fn apply_fault(map: &mut Heightmap, point1: Vec2, point2: Vec2, delta: f32) {
    let fault = point2 - point1;

    for j in 0..map.extended_width() {
        for k in 0..map.extended_height() {
            let toward = Vec2::new(j as f32, k as f32) - point1;
            if fault_side(toward, fault) {
                map.add(j, k, delta);
            }
        }
    }
}

/// Draws two distinct uniform points in `[0, extent.x) x [0, extent.y)`.
///
/// A zero-length fault line would make the side test meaningless, so
/// duplicate draws are resampled. A source that never diverges is reported
/// as a degenerate fault line after a bounded number of attempts.
fn sample_fault_points<R: Rng>(extent: Vec2, rng: &mut R) -> Result<(Vec2, Vec2), FaultError> {
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let point1 = Vec2::new(
            rng.random::<f32>() * extent.x,
            rng.random::<f32>() * extent.y,
        );
        let point2 = Vec2::new(
            rng.random::<f32>() * extent.x,
            rng.random::<f32>() * extent.y,
        );

        if point1 != point2 {
            return Ok((point1, point2));
        }
    }

    Err(FaultError::DegenerateFaultLine(MAX_RESAMPLE_ATTEMPTS))
}
