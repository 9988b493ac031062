//! Property tests for the collision queries.
//!
//! Inputs are drawn on integer grids mapped to f64: every coordinate,
//! difference, and edge-slope numerator stays exactly representable, so the
//! translation-invariance properties hold with no tolerance.

use armrig::geom::{orientation, segments_intersect, Orientation};
use armrig::obstacle::Obstacle;
use armrig::Vec2;
use proptest::prelude::*;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn square() -> Obstacle {
    Obstacle::new(vec![
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(10.0, 10.0),
        v(0.0, 10.0),
    ])
}

proptest! {
    #[test]
    fn point_inside_is_translation_invariant(
        ox in -500i32..500,
        oy in -500i32..500,
        px in -20i32..30,
        py in -20i32..30,
    ) {
        let obs = square();
        let (ox, oy, px, py) = (ox as f64, oy as f64, px as f64, py as f64);
        let base = obs.point_inside(v(px, py), Vec2::zeros());
        let shifted = obs.point_inside(v(px + ox, py + oy), v(ox, oy));
        prop_assert_eq!(base, shifted);
    }

    #[test]
    fn segment_collision_is_translation_invariant(
        ox in -500i32..500,
        oy in -500i32..500,
        ax in -20i32..30,
        ay in -20i32..30,
        bx in -20i32..30,
        by in -20i32..30,
    ) {
        let obs = square();
        let (ox, oy) = (ox as f64, oy as f64);
        let a = v(ax as f64, ay as f64);
        let b = v(bx as f64, by as f64);
        let shift = v(ox, oy);
        let base = obs.collides_with_segment(a, b, Vec2::zeros());
        let shifted = obs.collides_with_segment(a + shift, b + shift, shift);
        prop_assert_eq!(base, shifted);
    }

    #[test]
    fn segments_intersect_is_symmetric(
        x1 in -50i32..50, y1 in -50i32..50,
        x2 in -50i32..50, y2 in -50i32..50,
        x3 in -50i32..50, y3 in -50i32..50,
        x4 in -50i32..50, y4 in -50i32..50,
    ) {
        let p1 = v(x1 as f64, y1 as f64);
        let p2 = v(x2 as f64, y2 as f64);
        let p3 = v(x3 as f64, y3 as f64);
        let p4 = v(x4 as f64, y4 as f64);
        prop_assert_eq!(
            segments_intersect(p1, p2, p3, p4),
            segments_intersect(p3, p4, p1, p2)
        );
    }

    #[test]
    fn orientation_swap_flips_turns(
        px in -50i32..50, py in -50i32..50,
        qx in -50i32..50, qy in -50i32..50,
        rx in -50i32..50, ry in -50i32..50,
    ) {
        let p = v(px as f64, py as f64);
        let q = v(qx as f64, qy as f64);
        let r = v(rx as f64, ry as f64);
        let a = orientation(p, q, r);
        let b = orientation(p, r, q);
        match a {
            Orientation::Collinear => prop_assert_eq!(b, Orientation::Collinear),
            Orientation::Clockwise => prop_assert_eq!(b, Orientation::CounterClockwise),
            Orientation::CounterClockwise => prop_assert_eq!(b, Orientation::Clockwise),
        }
    }
}
