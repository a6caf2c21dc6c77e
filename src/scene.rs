//! Host-facing generate/regenerate driver.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::color::{render_color_map, ColorMap, Palette};
use crate::terrain::{generate_into, FaultConfig, FaultError, Heightmap};

/// Summary of one generate-and-render pass.
///
/// The elapsed time is returned to the caller rather than written
/// anywhere; the host decides where, if anywhere, to persist it.
#[derive(Debug, Clone, Copy)]
pub struct GenerateReport {
    /// Wall-clock time spent in fault accumulation and rendering.
    pub elapsed: Duration,
    /// Interior mean height of the new terrain.
    pub mean_height: f32,
    /// Palette chosen by the render pass.
    pub palette: Palette,
}

/// Owns a terrain and drives its generation from host triggers.
///
/// The host calls [`initialize`](TerrainScene::initialize) once and
/// [`regenerate`](TerrainScene::regenerate) on each discrete input event
/// (a click or key press); the scene itself never polls input or frame
/// timers. Each pass runs strictly generate-then-render on the single
/// owned buffer, and all randomness comes from one seeded stream.
pub struct TerrainScene {
    config: FaultConfig,
    rng: ChaCha8Rng,
    heightmap: Heightmap,
    color_map: Option<ColorMap>,
}

impl TerrainScene {
    /// Creates a scene for a `width x height` terrain.
    ///
    /// Fails if either dimension is zero; no grid is allocated in that
    /// case.
    pub fn new(width: u32, height: u32, config: FaultConfig) -> Result<Self, FaultError> {
        let heightmap = Heightmap::new(width, height)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            rng,
            heightmap,
            color_map: None,
        })
    }

    /// First "generate" trigger: builds the terrain and renders it.
    pub fn initialize(&mut self) -> Result<GenerateReport, FaultError> {
        self.run_pass()
    }

    /// "Regenerate" trigger: fresh random draws, full overwrite of the
    /// previous terrain, then a new render pass.
    pub fn regenerate(&mut self) -> Result<GenerateReport, FaultError> {
        self.run_pass()
    }

    /// Re-renders the current heightmap without regenerating it.
    ///
    /// Draws a new palette, so the same terrain may change its look.
    pub fn redraw(&mut self) -> &ColorMap {
        let color_map = render_color_map(&self.heightmap, &mut self.rng);
        &*self.color_map.insert(color_map)
    }

    /// The current heightmap (extended grid).
    pub fn heightmap(&self) -> &Heightmap {
        &self.heightmap
    }

    /// The color map from the most recent render pass, if any.
    pub fn color_map(&self) -> Option<&ColorMap> {
        self.color_map.as_ref()
    }

    /// The fault formation configuration this scene was built with.
    pub fn config(&self) -> &FaultConfig {
        &self.config
    }

    fn run_pass(&mut self) -> Result<GenerateReport, FaultError> {
        let start = Instant::now();

        generate_into(&mut self.heightmap, &self.config, &mut self.rng)?;
        let color_map = render_color_map(&self.heightmap, &mut self.rng);

        let report = GenerateReport {
            elapsed: start.elapsed(),
            mean_height: color_map.mean_height(),
            palette: color_map.palette(),
        };

        self.color_map = Some(color_map);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_populates_outputs() {
        let mut scene = TerrainScene::new(16, 16, FaultConfig::with_seed(42)).unwrap();
        assert!(scene.color_map().is_none());

        let report = scene.initialize().unwrap();

        let colors = scene.color_map().unwrap();
        assert_eq!(colors.colors().len(), 16 * 16);
        assert_eq!(report.mean_height, scene.heightmap().mean_height());
        assert_eq!(report.palette, colors.palette());
        assert!((1..=3).contains(&report.palette.index()));
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            TerrainScene::new(0, 16, FaultConfig::default()),
            Err(FaultError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_regenerate_replaces_terrain_with_same_shape() {
        let mut scene = TerrainScene::new(16, 16, FaultConfig::with_seed(7)).unwrap();
        scene.initialize().unwrap();

        let before = scene.heightmap().clone();
        scene.regenerate().unwrap();
        let after = scene.heightmap();

        assert_eq!(before.heights().len(), after.heights().len());
        assert_eq!(after.extended_width(), 17);
        assert_eq!(after.extended_height(), 17);
        assert_ne!(
            before.heights(),
            after.heights(),
            "regeneration should draw a fresh terrain"
        );
    }

    #[test]
    fn test_redraw_keeps_heightmap() {
        let mut scene = TerrainScene::new(8, 8, FaultConfig::with_seed(3)).unwrap();
        scene.initialize().unwrap();

        let before = scene.heightmap().clone();
        scene.redraw();

        assert_eq!(before.heights(), scene.heightmap().heights());
    }

    #[test]
    fn test_same_seed_scenes_agree() {
        let mut a = TerrainScene::new(12, 12, FaultConfig::with_seed(99)).unwrap();
        let mut b = TerrainScene::new(12, 12, FaultConfig::with_seed(99)).unwrap();

        let ra = a.initialize().unwrap();
        let rb = b.initialize().unwrap();

        assert_eq!(a.heightmap().heights(), b.heightmap().heights());
        assert_eq!(ra.palette, rb.palette);
        assert_eq!(ra.mean_height, rb.mean_height);
    }
}
