//! Fixed timestep simulation tick
//!
//! Integrates kinematics for every entity kind, hands the result to the
//! collision engine, then applies the win check. One call advances the
//! simulation by exactly one tick.

use glam::Vec2;

use super::collision::{resolve_projectile_hits, resolve_ship_hits};
use super::geometry::wrap_position;
use super::state::{Asteroid, GamePhase, GameState, Polygon, Projectile};
use crate::consts::*;

/// Player intents for a single tick
///
/// The four movement/fire intents are latched by the input layer (set on
/// press, cleared on release). `restart` is a one-shot trigger that only
/// means anything in `Lost` or `Won`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrusting: bool,
    pub shooting: bool,
    pub restart: bool,
}

/// Advance the simulation by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => {
            state.time_ticks += 1;
            update_projectiles(&mut state.projectiles, PROJECTILE_LIFETIME_MS);
            update_projectiles(&mut state.particles, PARTICLE_LIFETIME_MS);
            update_asteroids(&mut state.asteroids);
            update_ship(state, input);
            resolve_ship_hits(state);
            resolve_projectile_hits(state);
            check_win(state);
        }
        GamePhase::Lost => {
            // Frozen field; wait for the player to ask for another run
            if input.restart {
                log::info!("restarting after loss");
                state.restart();
            }
        }
        GamePhase::Won => {
            if input.restart {
                log::info!("restarting after win");
                state.restart();
                return;
            }
            // Leftover shots and sparks fly on and the ship stays
            // flyable, but nothing collides anymore
            state.time_ticks += 1;
            update_projectiles(&mut state.projectiles, PROJECTILE_LIFETIME_MS);
            update_projectiles(&mut state.particles, PARTICLE_LIFETIME_MS);
            update_ship(state, input);
        }
    }
}

fn update_asteroids(asteroids: &mut [Asteroid]) {
    for rock in asteroids {
        rock.pos = wrap_position(rock.pos + rock.vel, WRAP_BUFFER_X, WRAP_BUFFER_Y);
        rock.angle += rock.angular_vel;
        rock.shape = Polygon::regular(rock.size.radius(), rock.angle);
    }
}

fn update_ship(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.ship;

    ship.pos = wrap_position(ship.pos + ship.vel, WRAP_BUFFER_X, WRAP_BUFFER_Y);

    let mut turn = 0.0;
    if input.turn_left {
        turn -= SHIP_TURN_RATE;
    }
    if input.turn_right {
        turn += SHIP_TURN_RATE;
    }

    if input.thrusting {
        ship.speed = (ship.speed + SHIP_THRUST).min(SHIP_MAX_SPEED);
        // Thrust re-aims the whole velocity at the current heading
        ship.vel = Vec2::from_angle(ship.angle) * ship.speed;
    } else {
        ship.vel *= SHIP_COAST_DAMPING;
        ship.speed *= SHIP_SPEED_DAMPING;
        if ship.vel.x.abs() < SHIP_STOP_EPSILON {
            ship.vel.x = 0.0;
        }
        if ship.vel.y.abs() < SHIP_STOP_EPSILON {
            ship.vel.y = 0.0;
        }
    }

    ship.angle += turn;

    let mut shot = None;
    if input.shooting {
        if ship.cooldown_ms == 0.0 {
            shot = Some((ship.nose(), ship.angle));
        }
        ship.cooldown_ms += TICK_MS;
    } else {
        ship.cooldown_ms = 0.0;
    }
    if ship.cooldown_ms >= SHOT_COOLDOWN_MS {
        ship.cooldown_ms = 0.0;
    }

    if let Some((nose, angle)) = shot {
        state
            .projectiles
            .push(Projectile::new(nose, angle, PROJECTILE_SPEED));
    }
}

fn update_projectiles(projectiles: &mut Vec<Projectile>, lifetime_ms: f32) {
    for p in projectiles.iter_mut() {
        p.pos = wrap_position(p.pos + p.vel, WRAP_BUFFER_X, WRAP_BUFFER_Y);
        p.age_ms += TICK_MS;
    }
    // Swap-remove expired entries from the tail so earlier removals
    // cannot disturb indices still to be visited
    for i in (0..projectiles.len()).rev() {
        if projectiles[i].age_ms >= lifetime_ms {
            projectiles.swap_remove(i);
        }
    }
}

fn check_win(state: &mut GameState) {
    log::trace!("asteroids remaining: {}", state.asteroids.len());
    // A ship hit earlier in the same tick already decided the run; a
    // projectile clearing the last rock must not turn that loss into a win
    if state.phase == GamePhase::Playing && state.asteroids.is_empty() {
        log::info!("field cleared after {} ticks", state.time_ticks);
        state.phase = GamePhase::Won;
    }
}
