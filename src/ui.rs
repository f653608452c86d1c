//! HUD read-model for the status display
//!
//! Built once per tick from sim state; read-only formatted strings the
//! platform layer pushes into the DOM.

use crate::sim::GameState;

/// Glyph shown next to the speed readout while grounded
pub const MODE_GROUND: &str = "\u{1F3BF}"; // ski
/// Glyph shown while airborne
pub const MODE_AIR: &str = "\u{2708}\u{FE0F}"; // airplane

/// Formatted status display values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// |vx|, two decimals
    pub speed: String,
    /// Mode glyph
    pub mode: &'static str,
    /// Score, floored to an integer
    pub score: String,
    /// Control parameter, two decimals
    pub learning_rate: String,
}

impl Hud {
    pub fn build(state: &GameState) -> Self {
        Self {
            speed: format!("{:.2}", state.rider.vel.x.abs()),
            mode: if state.rider.on_ground {
                MODE_GROUND
            } else {
                MODE_AIR
            },
            score: format!("{}", state.score.floor() as i64),
            learning_rate: format!("{:.2}", state.learning_rate),
        }
    }
}
