//! Powder Run - a side-scrolling snowboard physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, rider physics, game state)
//! - `renderer`: Platform-free scene description built from sim state
//! - `ui`: HUD read-model for the status display

pub mod renderer;
pub mod sim;
pub mod ui;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz - the cadence all per-frame constants assume)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (world units are CSS pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Rider sprite extents
    pub const RIDER_WIDTH: f32 = 30.0;
    pub const RIDER_HEIGHT: f32 = 30.0;
    /// Spawn point
    pub const RIDER_START_X: f32 = 50.0;
    pub const RIDER_START_Y: f32 = 50.0;

    /// Downward acceleration per airborne frame
    pub const GRAVITY: f32 = 0.5;
    /// Damping applied to vx each grounded frame
    pub const FRICTION: f32 = 0.95;
    /// Damping applied to vx each airborne frame
    pub const AIR_RESISTANCE: f32 = 0.98;

    /// Horizontal force per unit of slope
    pub const SLOPE_FORCE: f32 = 300.0;
    /// Horizontal force per unit of momentum
    pub const MOMENTUM_FORCE: f32 = 50.0;
    /// Momentum charge ceiling
    pub const MOMENTUM_MAX: f32 = 2.0;
    /// Momentum gained/lost per qualifying frame
    pub const MOMENTUM_STEP: f32 = 0.1;
    /// Grade magnitude above which momentum charges or drains
    pub const MOMENTUM_GRADE: f32 = 0.05;

    /// Steep-uphill grade below which a slow rider slides backward
    pub const STALL_GRADE: f32 = -0.1;
    /// Speed under which the stall-slide rule applies
    pub const STALL_SPEED: f32 = 3.0;
    /// Backslide speed per unit of slope
    pub const STALL_SLIDE_SCALE: f32 = 20.0;

    /// Slope falloff ahead that pops the rider off a crest
    pub const LAUNCH_CREST_DELTA: f32 = 0.15;
    /// Speed required for a crest pop
    pub const LAUNCH_CREST_SPEED: f32 = 5.0;
    /// Grade below which a fast rider leaves the ground on a drop
    pub const LAUNCH_DROP_GRADE: f32 = -0.25;
    /// Speed required for a drop takeoff
    pub const LAUNCH_DROP_SPEED: f32 = 8.0;
    /// Takeoff vertical speed per unit of (slope * vx)
    pub const LAUNCH_POP: f32 = 0.4;
    /// Lookahead distance for crest detection
    pub const LAUNCH_LOOKAHEAD: f32 = 10.0;
    /// Landing vy above which momentum is halved
    pub const HARD_LANDING_VY: f32 = 10.0;

    /// Hole centers sit this far below the terrain surface
    pub const HOLE_SURFACE_OFFSET: f32 = 15.0;
    /// Rim forgiveness subtracted from hole radii for collision
    pub const HOLE_RIM_MARGIN: f32 = 5.0;

    /// Lodge extents
    pub const GOAL_WIDTH: f32 = 60.0;
    pub const GOAL_HEIGHT: f32 = 50.0;
    /// Capture box around the lodge
    pub const GOAL_CAPTURE_X: f32 = 30.0;
    pub const GOAL_CAPTURE_Y: f32 = 50.0;
    /// One-time bonus for reaching the lodge
    pub const GOAL_BONUS: f32 = 1000.0;

    /// Score accrued per frame per unit of forward speed
    pub const SCORE_RATE: f32 = 0.1;

    /// Default control parameter ("learning rate")
    pub const DEFAULT_LEARNING_RATE: f32 = 0.1;
}
