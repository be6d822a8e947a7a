//! Collision engine
//!
//! Ship-vs-asteroid and projectile-vs-asteroid tests over raw segment
//! pairs, plus the split/destroy transitions and explosion spawns they
//! trigger. Hits are collected during a scan and applied afterwards, so
//! a collection is never mutated while it is being iterated.

use glam::Vec2;

use super::geometry::{Segment, segments_intersect};
use super::state::{Asteroid, AsteroidSize, GamePhase, GameState, Projectile};
use crate::consts::*;

/// Test the ship hull against every asteroid edge
///
/// Any intersecting pair ends the run: one explosion at the ship and a
/// transition to `Lost`.
pub fn resolve_ship_hits(state: &mut GameState) {
    let hull = state.ship.hull_lines();
    let ship_pos = state.ship.pos;

    let hit = state.asteroids.iter().any(|rock| {
        rock.shape.edges.iter().any(|edge| {
            hull.iter()
                .any(|line| segments_intersect(ship_pos, rock.pos, *line, *edge))
        })
    });

    if hit {
        log::info!(
            "ship destroyed at ({:.0}, {:.0}) on tick {}",
            ship_pos.x,
            ship_pos.y,
            state.time_ticks
        );
        spawn_explosion(state, ship_pos);
        state.phase = GamePhase::Lost;
    }
}

/// Test every projectile path against every asteroid edge
///
/// A projectile's path this tick is the segment from its position back
/// to `pos - vel`; that segment is already in world coordinates, so its
/// translation origin is zero. Hits are collected first and applied
/// afterwards: each projectile is consumed by its first hit and each
/// asteroid is hit at most once per tick, but distinct pairs all resolve
/// in the same tick.
pub fn resolve_projectile_hits(state: &mut GameState) {
    let mut hits: Vec<(usize, AsteroidSize, Vec2)> = Vec::new();
    let mut spent = vec![false; state.projectiles.len()];

    'rocks: for (rock_idx, rock) in state.asteroids.iter().enumerate() {
        for edge in &rock.shape.edges {
            for (shot_idx, shot) in state.projectiles.iter().enumerate() {
                if spent[shot_idx] {
                    continue;
                }
                let path = Segment::new(shot.pos, shot.pos - shot.vel);
                if segments_intersect(Vec2::ZERO, rock.pos, path, *edge) {
                    hits.push((rock_idx, rock.size, rock.pos));
                    spent[shot_idx] = true;
                    continue 'rocks;
                }
            }
        }
    }

    for &(_, _, pos) in &hits {
        spawn_explosion(state, pos);
    }

    // Hit indices are ascending; removing from the tail keeps the
    // remaining ones valid under swap-remove
    for &(rock_idx, _, _) in hits.iter().rev() {
        state.asteroids.swap_remove(rock_idx);
    }

    for &(_, size, pos) in &hits {
        if let Some(child_size) = size.split() {
            for _ in 0..2 {
                let mut child = Asteroid::spawn(&mut state.rng, child_size);
                child.pos = pos;
                state.asteroids.push(child);
            }
        }
    }

    for i in (0..state.projectiles.len()).rev() {
        if spent[i] {
            state.projectiles.swap_remove(i);
        }
    }
}

/// Spawn a ring of short-lived particles at `pos`
pub fn spawn_explosion(state: &mut GameState, pos: Vec2) {
    let step = std::f32::consts::TAU / PARTICLES_PER_EXPLOSION as f32;
    for i in 0..PARTICLES_PER_EXPLOSION {
        state
            .particles
            .push(Projectile::new(pos, step * i as f32, PARTICLE_SPEED));
    }
}
