//! Two-color terrain palettes.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed two-color scheme that shades cells against the mean height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    /// Blue below the mean, green at or above it.
    WaterGrass,
    /// Brown below the mean, slate at or above it.
    LavaAsh,
    /// Gray below the mean, white at or above it.
    IceSnow,
}

impl Palette {
    /// Maps a numeric selector to a palette.
    ///
    /// Selectors outside {1, 2} all resolve to Ice/Snow.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Palette::WaterGrass,
            2 => Palette::LavaAsh,
            _ => Palette::IceSnow,
        }
    }

    /// Numeric selector for this palette, for diagnostic display.
    pub fn index(self) -> i32 {
        match self {
            Palette::WaterGrass => 1,
            Palette::LavaAsh => 2,
            Palette::IceSnow => 3,
        }
    }

    /// Human-readable scheme name.
    pub fn name(self) -> &'static str {
        match self {
            Palette::WaterGrass => "water/grass",
            Palette::LavaAsh => "lava/ash",
            Palette::IceSnow => "ice/snow",
        }
    }

    /// Draws one of the three schemes uniformly at random.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(1..4))
    }

    /// Shades a cell by comparing its height against the mean.
    ///
    /// The comparison is strictly `<`: a cell exactly at the mean takes
    /// the upper color. Channels are linear RGB in [0, 1].
    pub fn shade(self, height: f32, mean: f32) -> [f32; 3] {
        let below = height < mean;

        match self {
            Palette::WaterGrass => {
                if below {
                    [0.0, 0.0, 1.0]
                } else {
                    [0.0, 1.0, 0.0]
                }
            }
            Palette::LavaAsh => {
                if below {
                    [0.647, 0.165, 0.165]
                } else {
                    [0.2, 0.3, 0.4]
                }
            }
            Palette::IceSnow => {
                if below {
                    [0.5, 0.5, 0.5]
                } else {
                    [1.0, 1.0, 1.0]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_index() {
        assert_eq!(Palette::from_index(1), Palette::WaterGrass);
        assert_eq!(Palette::from_index(2), Palette::LavaAsh);
        assert_eq!(Palette::from_index(3), Palette::IceSnow);
    }

    #[test]
    fn test_unknown_selectors_fall_through_to_ice_snow() {
        for index in [0, 4, 7, -1, i32::MAX] {
            assert_eq!(Palette::from_index(index), Palette::IceSnow);
        }
    }

    #[test]
    fn test_index_round_trips() {
        for palette in [Palette::WaterGrass, Palette::LavaAsh, Palette::IceSnow] {
            assert_eq!(Palette::from_index(palette.index()), palette);
        }
    }

    #[test]
    fn test_shade_below_and_above_mean() {
        assert_eq!(Palette::WaterGrass.shade(0.0, 0.5), [0.0, 0.0, 1.0]);
        assert_eq!(Palette::WaterGrass.shade(1.0, 0.5), [0.0, 1.0, 0.0]);

        assert_eq!(Palette::LavaAsh.shade(0.0, 0.5), [0.647, 0.165, 0.165]);
        assert_eq!(Palette::LavaAsh.shade(1.0, 0.5), [0.2, 0.3, 0.4]);

        assert_eq!(Palette::IceSnow.shade(0.0, 0.5), [0.5, 0.5, 0.5]);
        assert_eq!(Palette::IceSnow.shade(1.0, 0.5), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_height_equal_to_mean_takes_upper_color() {
        for palette in [Palette::WaterGrass, Palette::LavaAsh, Palette::IceSnow] {
            assert_eq!(palette.shade(0.5, 0.5), palette.shade(1.0, 0.5));
        }
    }

    #[test]
    fn test_sample_covers_all_schemes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..64 {
            seen.insert(Palette::sample(&mut rng));
        }

        assert_eq!(seen.len(), 3, "uniform sampling should hit every scheme");
    }
}
