//! Rider and game state
//!
//! All mutable simulation state lives here, owned by [`GameState`] - an
//! explicit context object rather than process-wide globals, so tests can run
//! any number of independent simulations.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::terrain::TerrainConfig;
use crate::consts::*;

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 100;

/// The rider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Kinematic mode: grounded when true, airborne when false
    pub on_ground: bool,
    /// Accumulated downhill charge, clamped to [0, MOMENTUM_MAX]
    pub momentum: f32,
    /// Position history for rendering (oldest first)
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl Rider {
    /// Rider in the spawn state: at the start marker, at rest, grounded
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(RIDER_START_X, RIDER_START_Y),
            vel: Vec2::ZERO,
            on_ground: true,
            momentum: 0.0,
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

}

/// The lodge the rider is trying to reach. Its x is fixed; its y follows the
/// terrain and is derived every frame, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            x: WORLD_WIDTH - 100.0,
            width: GOAL_WIDTH,
            height: GOAL_HEIGHT,
        }
    }
}

impl Goal {
    /// Roof anchor y: terrain surface at the lodge minus its height
    pub fn surface_y(&self, terrain: &TerrainConfig) -> f32 {
        terrain.height(self.x) - self.height
    }
}

/// Complete game state (serializable simulation context)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed at startup, never mutated
    pub terrain: TerrainConfig,
    pub rider: Rider,
    pub goal: Goal,
    /// Run score; never decreases except on reset
    pub score: f32,
    /// Sticky terminal flag: fell in a hole or left the world
    pub game_over: bool,
    /// Sticky terminal flag: reached the lodge
    pub won: bool,
    /// Control parameter ("learning rate"): propulsion multiplier set from
    /// the slider at any time between ticks
    pub learning_rate: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game on the given course
    pub fn new(terrain: TerrainConfig) -> Self {
        Self {
            terrain,
            rider: Rider::spawn(),
            goal: Goal::default(),
            score: 0.0,
            game_over: false,
            won: false,
            learning_rate: DEFAULT_LEARNING_RATE,
            time_ticks: 0,
        }
    }

    /// Back to the spawn state. The course and the learning rate are kept.
    pub fn reset(&mut self) {
        self.rider = Rider::spawn();
        self.score = 0.0;
        self.game_over = false;
        self.won = false;
        self.time_ticks = 0;
    }

    /// True once either terminal flag is set
    #[inline]
    pub fn finished(&self) -> bool {
        self.game_over || self.won
    }

    /// Update the control parameter. The value arrives pre-parsed from the
    /// input collaborator; no validation happens here.
    pub fn set_learning_rate(&mut self, rate: f32) {
        self.learning_rate = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_state() {
        let rider = Rider::spawn();
        assert_eq!(rider.pos, Vec2::new(50.0, 50.0));
        assert_eq!(rider.vel, Vec2::ZERO);
        assert!(rider.on_ground);
        assert_eq!(rider.momentum, 0.0);
        assert!(rider.trail.is_empty());
    }

    #[test]
    fn test_trail_is_fifo_capped() {
        let mut rider = Rider::spawn();
        for i in 0..250 {
            rider.pos = Vec2::new(i as f32, 0.0);
            rider.record_trail();
        }
        assert_eq!(rider.trail.len(), TRAIL_LENGTH);
        // Oldest entries were evicted first
        assert_eq!(rider.trail.front().unwrap().x, 150.0);
        assert_eq!(rider.trail.back().unwrap().x, 249.0);
    }

    #[test]
    fn test_goal_tracks_terrain() {
        let terrain = TerrainConfig::default();
        let goal = Goal::default();
        assert_eq!(goal.x, WORLD_WIDTH - 100.0);
        assert_eq!(goal.surface_y(&terrain), terrain.height(goal.x) - GOAL_HEIGHT);
    }

    #[test]
    fn test_reset_keeps_course_and_learning_rate() {
        let mut state = GameState::new(TerrainConfig::generate(7));
        let holes = state.terrain.holes.clone();
        state.set_learning_rate(0.42);
        state.rider.pos = Vec2::new(600.0, 200.0);
        state.rider.vel = Vec2::new(9.0, -3.0);
        state.rider.on_ground = false;
        state.rider.momentum = 1.5;
        state.rider.record_trail();
        state.score = 512.0;
        state.game_over = true;

        state.reset();

        assert_eq!(state.rider.pos, Vec2::new(50.0, 50.0));
        assert_eq!(state.rider.vel, Vec2::ZERO);
        assert!(state.rider.on_ground);
        assert_eq!(state.rider.momentum, 0.0);
        assert!(state.rider.trail.is_empty());
        assert_eq!(state.score, 0.0);
        assert!(!state.game_over);
        assert!(!state.won);
        assert_eq!(state.learning_rate, 0.42);
        assert_eq!(state.terrain.holes, holes);
    }

    #[test]
    fn test_state_snapshot_roundtrip() {
        let state = GameState::new(TerrainConfig::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rider.pos, state.rider.pos);
        assert_eq!(back.terrain.holes, state.terrain.holes);
        assert_eq!(back.learning_rate, state.learning_rate);
    }
}
