//! Segment geometry and the toroidal play-field
//!
//! Entity shapes are stored as segments in each entity's local frame;
//! collision tests translate them by the owning entity's world position
//! on the fly. The play-field wraps on both axes with a small buffer so
//! the seam sits just outside the visible edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// A line segment in an entity's local (unrotated) frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// The segment translated into world coordinates
    #[inline]
    pub fn translated(&self, origin: Vec2) -> Segment {
        Segment::new(self.a + origin, self.b + origin)
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    (p1 - p2).length()
}

/// Strict counter-clockwise orientation predicate
///
/// Collinear triples return false, so exact touches never register as
/// intersections.
#[inline]
fn counter_clockwise(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Test two local-frame segments for intersection
///
/// Each segment is first translated by its owning entity's world origin.
/// Segments AB and CD intersect iff C and D lie on opposite sides of the
/// line through AB and A and B lie on opposite sides of the line through
/// CD.
pub fn segments_intersect(origin1: Vec2, origin2: Vec2, s1: Segment, s2: Segment) -> bool {
    let s1 = s1.translated(origin1);
    let s2 = s2.translated(origin2);

    counter_clockwise(s1.a, s2.a, s2.b) != counter_clockwise(s1.b, s2.a, s2.b)
        && counter_clockwise(s1.a, s1.b, s2.a) != counter_clockwise(s1.a, s1.b, s2.b)
}

/// Wrap a position onto the toroidal play-field
///
/// Each axis spans `[-buffer, bound + buffer)`: a coordinate below
/// `-buffer` reappears at `bound + buffer - 1`, and one at or past
/// `bound + buffer` resets to `-buffer`.
pub fn wrap_position(mut pos: Vec2, buffer_x: f32, buffer_y: f32) -> Vec2 {
    let max_x = WORLD_WIDTH + buffer_x;
    let max_y = WORLD_HEIGHT + buffer_y;

    if pos.x < -buffer_x {
        pos.x = max_x - 1.0;
    }
    if pos.x >= max_x {
        pos.x = -buffer_x;
    }
    if pos.y < -buffer_y {
        pos.y = max_y - 1.0;
    }
    if pos.y >= max_y {
        pos.y = -buffer_y;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{WRAP_BUFFER_X, WRAP_BUFFER_Y};
    use proptest::prelude::*;

    #[test]
    fn test_crossing_segments_intersect() {
        let s1 = Segment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let s2 = Segment::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        assert!(segments_intersect(Vec2::ZERO, Vec2::ZERO, s1, s2));
    }

    #[test]
    fn test_parallel_segments_miss() {
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let s2 = Segment::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
        assert!(!segments_intersect(Vec2::ZERO, Vec2::ZERO, s1, s2));
    }

    #[test]
    fn test_origins_translate_local_frames() {
        let s1 = Segment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let s2 = Segment::new(Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0));
        assert!(segments_intersect(Vec2::ZERO, Vec2::ZERO, s1, s2));
        // Same local segments, owners pushed far apart
        assert!(!segments_intersect(Vec2::new(100.0, 0.0), Vec2::ZERO, s1, s2));
        // Both owners moved together still collide
        let far = Vec2::new(500.0, 300.0);
        assert!(segments_intersect(far, far, s1, s2));
    }

    #[test]
    fn test_collinear_touch_is_not_a_hit() {
        // Shared endpoint only; the strict orientation test rejects it
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let s2 = Segment::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
        assert!(!segments_intersect(Vec2::ZERO, Vec2::ZERO, s1, s2));
    }

    #[test]
    fn test_wrap_inside_field_is_identity() {
        let p = Vec2::new(512.0, 512.0);
        assert_eq!(wrap_position(p, WRAP_BUFFER_X, WRAP_BUFFER_Y), p);
    }

    #[test]
    fn test_wrap_at_max_edge_resets_to_min() {
        let p = Vec2::new(WORLD_WIDTH + WRAP_BUFFER_X, 100.0);
        let wrapped = wrap_position(p, WRAP_BUFFER_X, WRAP_BUFFER_Y);
        assert_eq!(wrapped.x, -WRAP_BUFFER_X);
        assert_eq!(wrapped.y, 100.0);
    }

    #[test]
    fn test_wrap_below_min_edge_reappears_near_max() {
        let p = Vec2::new(100.0, -WRAP_BUFFER_Y - 0.5);
        let wrapped = wrap_position(p, WRAP_BUFFER_X, WRAP_BUFFER_Y);
        assert_eq!(wrapped.x, 100.0);
        assert_eq!(wrapped.y, WORLD_HEIGHT + WRAP_BUFFER_Y - 1.0);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance(Vec2::new(7.0, -2.0), Vec2::new(7.0, -2.0)), 0.0);
    }

    proptest! {
        #[test]
        fn wrap_lands_in_range(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let wrapped = wrap_position(Vec2::new(x, y), WRAP_BUFFER_X, WRAP_BUFFER_Y);
            prop_assert!(wrapped.x >= -WRAP_BUFFER_X && wrapped.x < WORLD_WIDTH + WRAP_BUFFER_X);
            prop_assert!(wrapped.y >= -WRAP_BUFFER_Y && wrapped.y < WORLD_HEIGHT + WRAP_BUFFER_Y);
        }

        // Integer coordinates keep every orientation product exact in f32,
        // so the swapped-argument call must agree bit-for-bit
        #[test]
        fn intersection_is_symmetric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
            dx in -50i32..50, dy in -50i32..50,
            o1x in -20i32..20, o1y in -20i32..20,
            o2x in -20i32..20, o2y in -20i32..20,
        ) {
            let s1 = Segment::new(
                Vec2::new(ax as f32, ay as f32),
                Vec2::new(bx as f32, by as f32),
            );
            let s2 = Segment::new(
                Vec2::new(cx as f32, cy as f32),
                Vec2::new(dx as f32, dy as f32),
            );
            let o1 = Vec2::new(o1x as f32, o1y as f32);
            let o2 = Vec2::new(o2x as f32, o2y as f32);
            prop_assert_eq!(
                segments_intersect(o1, o2, s1, s2),
                segments_intersect(o2, o1, s2, s1)
            );
        }
    }
}
