//! Entity model and the owned simulation aggregate
//!
//! All state that must survive a snapshot lives here. Nothing in this
//! file is global: the whole simulation is one [`GameState`] value that
//! the driver owns and passes to the tick and collision functions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;
use crate::consts::*;
use crate::rotate_point;

/// Discrete asteroid classes; the class fixes the shape radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// Pentagon radius in pixels
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Small => 10.0,
            AsteroidSize::Medium => 30.0,
            AsteroidSize::Large => 50.0,
        }
    }

    /// Drift speed for this class; smaller rocks drift faster
    pub fn max_speed(self) -> f32 {
        match self {
            AsteroidSize::Small => 3.0,
            AsteroidSize::Medium => 2.0,
            AsteroidSize::Large => 1.0,
        }
    }

    /// The class each child takes when a rock of this class is shot
    ///
    /// `None` means the rock is destroyed outright.
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Small => None,
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Large => Some(AsteroidSize::Medium),
        }
    }
}

/// Closed pentagon boundary stored as local-frame edges
///
/// The shape is fully determined by `(radius, angle)`; it is recomputed
/// from those every tick rather than rotated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub edges: [Segment; ASTEROID_EDGES],
}

impl Polygon {
    /// Regular pentagon of the given radius rotated by `angle`
    ///
    /// Edge `i` joins vertex `i - 1` to vertex `i`, with vertex `k` at
    /// angle `k * 2pi/5 + angle`.
    pub fn regular(radius: f32, angle: f32) -> Self {
        let step = std::f32::consts::TAU / ASTEROID_EDGES as f32;
        let vertex = |k: isize| {
            let theta = step * k as f32 + angle;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        };

        let edges =
            std::array::from_fn(|i| Segment::new(vertex(i as isize - 1), vertex(i as isize)));
        Self { edges }
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub size: AsteroidSize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    /// Signed spin, fixed magnitude
    pub angular_vel: f32,
    /// Local-frame boundary, refreshed from `(size, angle)` each tick
    pub shape: Polygon,
}

impl Asteroid {
    /// Spawn a rock at a random field position with a random heading
    ///
    /// Speed is exactly the class maximum: `vx` is drawn on `[0, max]`
    /// and `vy` takes up the remainder on the speed circle, then both
    /// axes get independent random signs. Points on a circle, not a
    /// uniform-area draw.
    pub fn spawn(rng: &mut Pcg32, size: AsteroidSize) -> Self {
        let max = size.max_speed();
        let vx = max * rng.random_range(0.0..=1.0f32);
        let vy = (max * max - vx * vx).sqrt();

        Self {
            size,
            pos: Vec2::new(
                rng.random_range(0.0..=WORLD_WIDTH),
                rng.random_range(0.0..=WORLD_HEIGHT),
            ),
            vel: Vec2::new(vx * random_sign(rng), vy * random_sign(rng)),
            angle: 0.0,
            angular_vel: ASTEROID_SPIN * random_sign(rng),
            shape: Polygon::regular(size.radius(), 0.0),
        }
    }
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Base hull in the ship's local frame, nose on the +x axis
const SHIP_SHAPE: [Segment; 3] = [
    Segment::new(Vec2::new(10.0, 0.0), Vec2::new(-8.0, -5.0)),
    Segment::new(Vec2::new(-8.0, -5.0), Vec2::new(-8.0, 5.0)),
    Segment::new(Vec2::new(-8.0, 5.0), Vec2::new(10.0, 0.0)),
];

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scalar speed while thrusting; the velocity vector is re-aimed
    /// from this and the heading on every thrust tick
    pub speed: f32,
    pub angle: f32,
    /// Milliseconds since the last shot while the trigger is held
    pub cooldown_ms: f32,
}

impl Ship {
    /// A fresh ship at rest in the middle of the play-field
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            speed: 0.0,
            angle: 0.0,
            cooldown_ms: 0.0,
        }
    }

    /// Hull edges rotated to the current heading, still in the local frame
    ///
    /// Derived fresh from the absolute angle on every query so no
    /// rotation error accumulates across ticks.
    pub fn hull_lines(&self) -> [Segment; 3] {
        SHIP_SHAPE.map(|s| {
            Segment::new(rotate_point(s.a, self.angle), rotate_point(s.b, self.angle))
        })
    }

    /// World position of the nose vertex; shots spawn here
    pub fn nose(&self) -> Vec2 {
        self.pos + rotate_point(SHIP_SHAPE[0].a, self.angle)
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// A shot in flight; also reused as an explosion particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Milliseconds since launch
    pub age_ms: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            age_ms: 0.0,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active play
    Playing,
    /// Ship destroyed; the field is frozen until restart
    Lost,
    /// Field cleared; the ship keeps drifting until restart
    Won,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Unordered; removal is swap-remove, so indices are not stable
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Projectile>,
}

impl GameState {
    /// Fresh run: one ship at the field center, ten large rocks
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::new(),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
        };
        state.spawn_field();
        state
    }

    fn spawn_field(&mut self) {
        for _ in 0..INITIAL_ASTEROIDS {
            let rock = Asteroid::spawn(&mut self.rng, AsteroidSize::Large);
            self.asteroids.push(rock);
        }
    }

    /// Clear the field and begin a fresh run, continuing the RNG stream
    pub fn restart(&mut self) {
        self.asteroids.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.ship = Ship::new();
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.spawn_field();
    }

    /// Serialize a snapshot of the full simulation state
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a snapshot produced by [`GameState::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
