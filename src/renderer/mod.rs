//! Scene description built from simulation state
//!
//! Platform-free: [`Scene::build`] turns a [`GameState`] into plain lists of
//! drawables (points, circles, one oriented sprite). The canvas layer in the
//! binary walks the scene; nothing here touches the DOM.

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// A hole drawn as a filled circle at its surface point
#[derive(Debug, Clone, Copy)]
pub struct HoleMarker {
    pub center: Vec2,
    pub radius: f32,
}

/// The rider sprite transform
#[derive(Debug, Clone, Copy)]
pub struct RiderSprite {
    pub pos: Vec2,
    /// Board orientation: slope angle on the ground, velocity angle in the air
    pub angle: f32,
    pub on_ground: bool,
}

/// Full-screen terminal banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Crashed,
    Won,
}

/// Everything the render surface needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Surface samples, one per pixel column, left to right
    pub terrain: Vec<Vec2>,
    pub holes: Vec<HoleMarker>,
    pub rider: RiderSprite,
    /// Recent positions, oldest first
    pub trail: Vec<Vec2>,
    /// Lodge anchor (top-left of its capture box)
    pub goal: Vec2,
    pub overlay: Option<Overlay>,
}

impl Scene {
    pub fn build(state: &GameState) -> Self {
        let terrain = (0..=WORLD_WIDTH as u32)
            .map(|x| {
                let x = x as f32;
                Vec2::new(x, state.terrain.height(x))
            })
            .collect();

        let holes = state
            .terrain
            .holes
            .iter()
            .map(|hole| HoleMarker {
                center: Vec2::new(
                    hole.x,
                    state.terrain.height(hole.x) + HOLE_SURFACE_OFFSET,
                ),
                radius: hole.radius,
            })
            .collect();

        let angle = if state.rider.on_ground {
            state.terrain.gradient(state.rider.pos.x).atan()
        } else {
            state.rider.vel.y.atan2(state.rider.vel.x)
        };

        let overlay = if state.game_over {
            Some(Overlay::Crashed)
        } else if state.won {
            Some(Overlay::Won)
        } else {
            None
        };

        Self {
            terrain,
            holes,
            rider: RiderSprite {
                pos: state.rider.pos,
                angle,
                on_ground: state.rider.on_ground,
            },
            trail: state.rider.trail.iter().copied().collect(),
            goal: Vec2::new(state.goal.x, state.goal.surface_y(&state.terrain)),
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TerrainConfig, tick};

    #[test]
    fn test_terrain_samples_cover_every_column() {
        let state = GameState::new(TerrainConfig::default());
        let scene = Scene::build(&state);
        assert_eq!(scene.terrain.len(), WORLD_WIDTH as usize + 1);
        assert_eq!(scene.terrain[0].x, 0.0);
        assert_eq!(scene.terrain.last().unwrap().x, WORLD_WIDTH);
        for p in &scene.terrain {
            assert_eq!(p.y, state.terrain.height(p.x));
        }
    }

    #[test]
    fn test_hole_markers_sit_below_surface() {
        let state = GameState::new(TerrainConfig::default());
        let scene = Scene::build(&state);
        assert_eq!(scene.holes.len(), 2);
        for (marker, hole) in scene.holes.iter().zip(&state.terrain.holes) {
            assert_eq!(marker.center.x, hole.x);
            assert_eq!(
                marker.center.y,
                state.terrain.height(hole.x) + HOLE_SURFACE_OFFSET
            );
            assert_eq!(marker.radius, hole.radius);
        }
    }

    #[test]
    fn test_rider_angle_follows_mode() {
        let mut state = GameState::new(TerrainConfig::default());

        let grounded = Scene::build(&state);
        let slope = state.terrain.gradient(state.rider.pos.x).atan();
        assert!((grounded.rider.angle - slope).abs() < 1e-6);

        state.rider.on_ground = false;
        state.rider.vel = glam::Vec2::new(3.0, 4.0);
        let airborne = Scene::build(&state);
        assert!((airborne.rider.angle - 4.0_f32.atan2(3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_overlay_tracks_terminal_flags() {
        let mut state = GameState::new(TerrainConfig::default());
        assert_eq!(Scene::build(&state).overlay, None);

        state.won = true;
        assert_eq!(Scene::build(&state).overlay, Some(Overlay::Won));

        state.won = false;
        state.game_over = true;
        assert_eq!(Scene::build(&state).overlay, Some(Overlay::Crashed));
    }

    #[test]
    fn test_trail_is_oldest_first() {
        let mut state = GameState::new(TerrainConfig::default());
        tick(&mut state);
        tick(&mut state);
        let scene = Scene::build(&state);
        assert_eq!(scene.trail.len(), 2);
        assert_eq!(scene.trail[1], state.rider.pos);
    }
}
