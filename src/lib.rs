//! Vectoroids - a vector-line asteroids arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//!
//! Windowing, input polling and draw calls live outside this crate. The
//! binary drives the simulation headless; a presentation layer reads the
//! [`sim::GameState`] snapshot each frame and feeds latched intents back
//! in through [`sim::TickInput`].

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum catch-up ticks per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play-field dimensions
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 1024.0;
    /// Wrap seam tolerance on each axis, so entities don't visibly pop
    /// exactly at the field edge
    pub const WRAP_BUFFER_X: f32 = 10.0;
    pub const WRAP_BUFFER_Y: f32 = 10.0;

    /// Ship tuning
    pub const SHIP_MAX_SPEED: f32 = 4.0;
    pub const SHIP_THRUST: f32 = 0.05;
    pub const SHIP_TURN_RATE: f32 = 0.05;
    /// Velocity components below this magnitude snap to zero while coasting
    pub const SHIP_STOP_EPSILON: f32 = 0.005;
    pub const SHIP_COAST_DAMPING: f32 = 0.99;
    pub const SHIP_SPEED_DAMPING: f32 = 0.9;

    /// Projectile tuning
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_LIFETIME_MS: f32 = 1500.0;
    pub const SHOT_COOLDOWN_MS: f32 = 50.0;

    /// Explosion particles reuse the projectile representation
    pub const PARTICLE_LIFETIME_MS: f32 = 500.0;
    pub const PARTICLES_PER_EXPLOSION: u32 = 10;
    pub const PARTICLE_SPEED: f32 = 2.0;

    /// Asteroid tuning
    pub const ASTEROID_SPIN: f32 = 0.02;
    pub const ASTEROID_EDGES: usize = 5;
    pub const INITIAL_ASTEROIDS: usize = 10;
}

/// Rotate a local-frame point about the origin
#[inline]
pub fn rotate_point(p: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(p)
}
