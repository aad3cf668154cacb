//! Cube Runner, an auto-running 2D physics platformer.
//!
//! Core modules:
//! - `app`: the screen state machine driving the whole game
//! - `world`: hand-authored level construction
//! - `sim`: the per-step simulation (drive, physics, contact response)
//! - `screens`: menu and play screens with Init/Release brackets
//! - `actions`: key events → game actions
//! - `settings`: volume and cube color, JSON-backed
//! - `hud`: text readouts and menu rendering

pub mod actions;
pub mod app;
pub mod audio;
pub mod hud;
pub mod screens;
pub mod settings;
pub mod sim;
pub mod world;

pub use app::CubeRunner;
pub use settings::{CubeColor, Settings};

use glam::Vec2;

/// Fixed engine parameters shared across modules.
pub mod consts {
    use super::Vec2;
    use cuberun_engine::GameConfig;

    /// Fixed simulation timestep.
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    /// Velocity solver passes per step.
    pub const VELOCITY_ITERATIONS: usize = 6;
    /// Position stabilization passes per step.
    pub const POSITION_ITERATIONS: usize = 2;
    /// World gravity (Y-up, meters).
    pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

    /// Virtual UI screen, in UI units. Menus are laid out against this.
    pub const VIRTUAL_W: f32 = 960.0;
    pub const VIRTUAL_H: f32 = 544.0;
    /// Menu camera center.
    pub const UI_CENTER: Vec2 = Vec2::new(VIRTUAL_W / 2.0, VIRTUAL_H / 2.0);

    /// Follow-camera viewport during play, in world units.
    pub const PLAY_VIEW_H: f32 = 12.0;
    pub const PLAY_VIEW_W: f32 = PLAY_VIEW_H * (VIRTUAL_W / VIRTUAL_H);
    /// Fixed camera height above the ground line.
    pub const CAMERA_EYE_HEIGHT: f32 = 2.0;

    /// The engine configuration used by the game and its tests.
    pub fn play_config() -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            world_width: VIRTUAL_W,
            world_height: VIRTUAL_H,
            gravity: GRAVITY,
            velocity_iterations: VELOCITY_ITERATIONS,
            position_iterations: POSITION_ITERATIONS,
            ..GameConfig::default()
        }
    }
}

/// Atlas 0 cell assignments; must agree with `assets/manifest.json`.
pub mod sprites {
    pub const CUBE_RED: (f32, f32) = (0.0, 0.0);
    pub const CUBE_GREEN: (f32, f32) = (1.0, 0.0);
    pub const CUBE_BLUE: (f32, f32) = (2.0, 0.0);
    pub const GROUND: (f32, f32) = (3.0, 0.0);
    pub const PLATFORM: (f32, f32) = (4.0, 0.0);
    pub const ICON_CONFIRM: (f32, f32) = (6.0, 0.0);
    pub const ICON_BACK: (f32, f32) = (7.0, 0.0);
}
