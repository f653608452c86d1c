//! Per-frame physics step and fixed-timestep driver
//!
//! [`tick`] advances the simulation by exactly one frame; all tuning
//! constants assume the 60 Hz cadence. Time handling lives in
//! [`FixedStepDriver`] so the sim never sees the host's frame scheduler.
//!
//! A terminal flag raised mid-frame does not abort that frame - the rest of
//! the step (integration, trail, score) still runs, and the sticky no-op
//! applies from the next call.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Advance the game state by one frame. No-op once the run is finished.
pub fn tick(state: &mut GameState) {
    if state.finished() {
        return;
    }

    let terrain_y = state.terrain.height(state.rider.pos.x);
    let gradient = state.terrain.gradient(state.rider.pos.x);
    let goal_y = state.goal.surface_y(&state.terrain);

    if state.rider.on_ground {
        step_grounded(state, terrain_y, gradient);
    } else {
        step_airborne(state, terrain_y);
    }

    // Integrate position
    state.rider.pos += state.rider.vel;

    // Circular collision against each hole's surface point
    let pos = state.rider.pos;
    let fell_in = state.terrain.holes.iter().any(|hole| {
        let center = Vec2::new(
            hole.x,
            state.terrain.height(hole.x) + HOLE_SURFACE_OFFSET,
        );
        pos.distance(center) < hole.radius - HOLE_RIM_MARGIN
    });
    if fell_in {
        state.game_over = true;
    }

    state.rider.record_trail();

    // World bounds
    if pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y > WORLD_HEIGHT {
        state.game_over = true;
    }

    // Lodge capture
    if (pos.x - state.goal.x).abs() < GOAL_CAPTURE_X && (pos.y - goal_y).abs() < GOAL_CAPTURE_Y {
        state.won = true;
        state.score += GOAL_BONUS;
    }

    // Forward progress scores; backsliding never costs points
    state.score += (state.rider.vel.x * SCORE_RATE).max(0.0);
    state.time_ticks += 1;
}

/// Grounded frame: momentum, slope force, stall-slide, takeoff check,
/// and the hole-mouth check.
fn step_grounded(state: &mut GameState, terrain_y: f32, gradient: f32) {
    // Charge momentum on downhill grades, bleed it on uphill ones.
    // Canvas convention: positive gradient is the surface dropping away.
    if gradient > MOMENTUM_GRADE {
        state.rider.momentum = (state.rider.momentum + MOMENTUM_STEP).min(MOMENTUM_MAX);
    } else if gradient < -MOMENTUM_GRADE {
        state.rider.momentum = (state.rider.momentum - MOMENTUM_STEP).max(0.0);
    }

    // Slope pull plus momentum boost, scaled by the control parameter,
    // then friction
    let pull = gradient * SLOPE_FORCE + state.rider.momentum * MOMENTUM_FORCE;
    state.rider.vel.x = state.learning_rate * pull;
    state.rider.vel.x *= FRICTION;

    // Too slow on a steep uphill: slide backward
    if gradient < STALL_GRADE && state.rider.vel.x < STALL_SPEED {
        state.rider.vel.x = gradient * STALL_SLIDE_SCALE;
    }

    // Takeoff at a crest (slope falling away ahead) or off a steep drop,
    // given enough speed; otherwise stay snapped to the surface
    let next_gradient = state.terrain.gradient(state.rider.pos.x + LAUNCH_LOOKAHEAD);
    let gradient_change = gradient - next_gradient;
    let crest_pop = gradient_change > LAUNCH_CREST_DELTA && state.rider.vel.x > LAUNCH_CREST_SPEED;
    let drop_off = gradient < LAUNCH_DROP_GRADE && state.rider.vel.x > LAUNCH_DROP_SPEED;
    if crest_pop || drop_off {
        state.rider.vel.y = -(gradient * state.rider.vel.x * LAUNCH_POP).abs();
        state.rider.on_ground = false;
    } else {
        state.rider.pos.y = terrain_y - RIDER_HEIGHT / 2.0;
        state.rider.vel.y = 0.0;
    }

    // Rolling over a hole mouth is fatal regardless of depth
    let x = state.rider.pos.x;
    let over_hole = state
        .terrain
        .holes
        .iter()
        .any(|hole| (x - hole.x).abs() < hole.radius - HOLE_RIM_MARGIN);
    if over_hole {
        state.game_over = true;
    }
}

/// Airborne frame: gravity, air resistance, landing check. Landing keeps vy
/// for this frame's integration; the next grounded frame snaps and zeroes it.
fn step_airborne(state: &mut GameState, terrain_y: f32) {
    state.rider.vel.y += GRAVITY;
    state.rider.vel.x *= AIR_RESISTANCE;

    if state.rider.pos.y + RIDER_HEIGHT / 2.0 >= terrain_y {
        state.rider.on_ground = true;
        state.rider.pos.y = terrain_y - RIDER_HEIGHT / 2.0;
        // Hard landings scrub momentum
        if state.rider.vel.y > HARD_LANDING_VY {
            state.rider.momentum *= 0.5;
        }
    }
}

/// Fixed-timestep accumulator: feeds whole ticks to the sim from a
/// variable-rate host loop (rAF, a timer, or a test harness).
#[derive(Debug, Default)]
pub struct FixedStepDriver {
    accumulator: f32,
}

impl FixedStepDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `dt` seconds of wall time, running as many whole ticks as fit
    /// (capped at `MAX_SUBSTEPS`). Returns the number of ticks executed.
    pub fn advance(&mut self, state: &mut GameState, dt: f32) -> u32 {
        // Clamp huge gaps (tab switch, debugger pause)
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}
