//! Flat heightmap storage and interior statistics.

use serde::{Deserialize, Serialize};

use super::FaultError;

/// A rectangular terrain heightmap with one extra border row and column.
///
/// Generation works on the extended `(width + 1) x (height + 1)` grid so
/// that per-cell quads can later be drawn without a missing edge; only the
/// `width x height` interior participates in statistics and coloring.
///
/// Heights live in a single contiguous buffer indexed by
/// `x * (height + 1) + y`, keeping the iteration-heavy generation loops
/// cache-friendly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heightmap {
    width: u32,
    height: u32,
    heights: Vec<f32>,
}

impl Heightmap {
    /// Creates a zero-initialized heightmap for a `width x height` terrain.
    ///
    /// Fails before any allocation if either dimension is zero; a
    /// constructed heightmap therefore always has a well-defined interior
    /// mean.
    pub fn new(width: u32, height: u32) -> Result<Self, FaultError> {
        if width == 0 || height == 0 {
            return Err(FaultError::InvalidDimensions { width, height });
        }

        let size = ((width + 1) as usize) * ((height + 1) as usize);
        Ok(Self {
            width,
            height,
            heights: vec![0.0; size],
        })
    }

    /// Logical terrain width (interior columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical terrain height (interior rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the extended grid, including the border column.
    pub fn extended_width(&self) -> u32 {
        self.width + 1
    }

    /// Height of the extended grid, including the border row.
    pub fn extended_height(&self) -> u32 {
        self.height + 1
    }

    /// Flat buffer index of the extended-grid cell `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.extended_width() && y < self.extended_height());
        (x as usize) * (self.extended_height() as usize) + (y as usize)
    }

    /// Returns the height at the extended-grid cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.heights[self.index(x, y)]
    }

    /// Sets the height at the extended-grid cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = self.index(x, y);
        self.heights[idx] = value;
    }

    /// Adds `delta` to the height at the extended-grid cell `(x, y)`.
    ///
    /// Fault accumulation only ever composes heights by addition.
    pub fn add(&mut self, x: u32, y: u32, delta: f32) {
        let idx = self.index(x, y);
        self.heights[idx] += delta;
    }

    /// Resets every cell, border included, back to zero.
    pub fn reset(&mut self) {
        self.heights.fill(0.0);
    }

    /// The raw height buffer over the extended grid.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Arithmetic mean height over the `width x height` interior.
    ///
    /// The extended border row and column never contribute.
    pub fn mean_height(&self) -> f32 {
        let mut total = 0.0f32;
        for x in 0..self.width {
            for y in 0..self.height {
                total += self.get(x, y);
            }
        }

        total / (self.width as f32 * self.height as f32)
    }

    /// Computes the min and max height over the extended grid.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for &height in &self.heights {
            min = min.min(height);
            max = max.max(height);
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_is_zeroed_and_extended() {
        let map = Heightmap::new(128, 96).unwrap();
        assert_eq!(map.width(), 128);
        assert_eq!(map.height(), 96);
        assert_eq!(map.extended_width(), 129);
        assert_eq!(map.extended_height(), 97);
        assert_eq!(map.heights().len(), 129 * 97);
        assert!(map.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Heightmap::new(0, 10),
            Err(FaultError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            Heightmap::new(10, 0),
            Err(FaultError::InvalidDimensions { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_get_set_add() {
        let mut map = Heightmap::new(8, 8).unwrap();
        map.set(3, 5, 0.75);
        assert_eq!(map.get(3, 5), 0.75);

        map.add(3, 5, 0.25);
        assert_eq!(map.get(3, 5), 1.0);

        // The border cells are addressable too.
        map.set(8, 8, 2.0);
        assert_eq!(map.get(8, 8), 2.0);
    }

    #[test]
    fn test_mean_of_constant_interior_is_exact() {
        let mut map = Heightmap::new(4, 4).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                map.set(x, y, 2.5);
            }
        }

        assert_eq!(map.mean_height(), 2.5);
    }

    #[test]
    fn test_mean_ignores_border() {
        let mut map = Heightmap::new(2, 2).unwrap();
        for x in 0..2 {
            for y in 0..2 {
                map.set(x, y, 1.0);
            }
        }

        // Pollute the border row and column; the interior mean must not move.
        for i in 0..3 {
            map.set(2, i, 1000.0);
            map.set(i, 2, 1000.0);
        }

        assert_eq!(map.mean_height(), 1.0);
    }

    #[test]
    fn test_mean_of_mixed_interior() {
        // Interior corners [0, 0, 1, 1] average to 0.5.
        let mut map = Heightmap::new(2, 2).unwrap();
        map.set(1, 0, 1.0);
        map.set(1, 1, 1.0);

        assert_eq!(map.mean_height(), 0.5);
    }

    #[test]
    fn test_reset() {
        let mut map = Heightmap::new(4, 4).unwrap();
        map.set(1, 1, 5.0);
        map.set(4, 4, 3.0);

        map.reset();
        assert!(map.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_height_range() {
        let mut map = Heightmap::new(8, 8).unwrap();
        map.set(0, 0, -0.5);
        map.set(7, 3, 1.5);

        let (min, max) = map.height_range();
        assert_eq!(min, -0.5);
        assert_eq!(max, 1.5);
    }
}
