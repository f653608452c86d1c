//! Procedural terrain model
//!
//! A pure height field in canvas coordinates: y grows downward, so a larger
//! height value is a *lower* point on screen and a positive gradient is a
//! surface dropping away to the right (downhill). The field is total over all
//! real x - callers may probe far outside the visible course for lookahead.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Distance from a hole center back to the crest of its ramp lip
pub const RAMP_LEAD: f32 = 80.0;
/// Half-width of the ramp lip bump
pub const RAMP_WIDTH: f32 = 60.0;
/// Depth of the ramp lip bump
pub const RAMP_DEPTH: f32 = 25.0;
/// Probe distance for the finite-difference gradient
pub const GRADIENT_PROBE: f32 = 8.0;

/// A hole in the snow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub x: f32,
    pub radius: f32,
}

/// Raised-cosine bump: full `height` at `center`, smoothly zero beyond `width`
pub fn smooth_bump(x: f32, center: f32, width: f32, height: f32) -> f32 {
    let dist = (x - center).abs();
    if dist > width {
        return 0.0;
    }
    height * (1.0 + (std::f32::consts::PI * dist / width).cos()) / 2.0
}

/// Immutable terrain shape: two sine components over a linear drift, a floor
/// clamp, and the hole layout. Fixed at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Vertical offset of the base curve
    pub base: f32,
    pub primary_amp: f32,
    pub primary_freq: f32,
    pub secondary_amp: f32,
    pub secondary_freq: f32,
    /// Linear drift per unit x
    pub drift: f32,
    /// The surface never drops below this y (stays clear of the world bottom)
    pub floor: f32,
    pub holes: Vec<Hole>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            base: WORLD_HEIGHT * 0.35,
            primary_amp: 25.0,
            primary_freq: 0.006,
            secondary_amp: 40.0,
            secondary_freq: 0.003,
            drift: 0.08,
            floor: WORLD_HEIGHT - 50.0,
            holes: vec![
                Hole { x: 300.0, radius: 25.0 },
                Hole { x: 500.0, radius: 25.0 },
            ],
        }
    }
}

impl TerrainConfig {
    /// Surface y at `x`: base curve minus a ramp lip before each hole,
    /// clamped to the floor. Pure and deterministic.
    pub fn height(&self, x: f32) -> f32 {
        let mut y = self.base
            + (x * self.primary_freq).sin() * self.primary_amp
            + (x * self.secondary_freq).sin() * self.secondary_amp
            - x * self.drift;

        for hole in &self.holes {
            y -= smooth_bump(x, hole.x - RAMP_LEAD, RAMP_WIDTH, RAMP_DEPTH);
        }

        y.min(self.floor)
    }

    /// Local slope via centered finite difference. Shares the sign convention
    /// of [`height`](Self::height); the physics step relies on it.
    pub fn gradient(&self, x: f32) -> f32 {
        let h = GRADIENT_PROBE;
        (self.height(x + h) - self.height(x - h)) / (2.0 * h)
    }

    /// Deterministic random course: same shaping constants, 2-4 holes with
    /// jittered spacing and radii. Same seed, same course.
    pub fn generate(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let count: usize = rng.random_range(2..=4);

        let mut holes = Vec::with_capacity(count);
        let mut x = 150.0_f32;
        for _ in 0..count {
            x += rng.random_range(110.0..180.0);
            // Leave room for the lodge at the right edge
            if x > WORLD_WIDTH - 180.0 {
                break;
            }
            holes.push(Hole {
                x,
                radius: rng.random_range(20.0..30.0),
            });
        }

        Self {
            holes,
            ..Self::default()
        }
    }
}
