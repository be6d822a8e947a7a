//! Deterministic simulation module
//!
//! All gameplay lives here: entity kinematics, segment collision, the
//! win/lose state machine and the fixed-timestep driver. The module is
//! pure and deterministic. Fixed timestep only, seeded RNG only, no
//! rendering or platform dependencies; a run is fully reproducible from
//! its seed and input script.

pub mod collision;
pub mod driver;
pub mod geometry;
pub mod state;
pub mod tick;

pub use driver::FixedTimestep;
pub use geometry::{Segment, distance, segments_intersect, wrap_position};
pub use state::{Asteroid, AsteroidSize, GamePhase, GameState, Polygon, Projectile, Ship};
pub use tick::{TickInput, tick};
