//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only (course generation)
//! - No rendering or platform dependencies

pub mod state;
pub mod terrain;
pub mod tick;

pub use state::{GameState, Goal, Rider, TRAIL_LENGTH};
pub use terrain::{Hole, TerrainConfig, smooth_bump};
pub use tick::{FixedStepDriver, tick};
