use super::*;
use crate::Vec2;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn orientation_classifies_turns() {
    // Screen coords: walking +x then +y turns clockwise on screen, which is a
    // positive cross product here.
    assert_eq!(
        orientation(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(v(0.0, 0.0), v(1.0, 0.0), v(1.0, -1.0)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)),
        Orientation::Collinear
    );
}

#[test]
fn orientation_is_antisymmetric_in_last_two_args() {
    let p = v(0.0, 0.0);
    let q = v(3.0, 1.0);
    let r = v(1.0, 4.0);
    let a = orientation(p, q, r);
    let b = orientation(p, r, q);
    assert_ne!(a, Orientation::Collinear);
    assert_ne!(b, Orientation::Collinear);
    assert_ne!(a, b);
}

#[test]
fn orientation_collinear_is_exact() {
    // A point off the line by one ulp-scale nudge must not be collinear.
    assert_eq!(
        orientation(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0 + 1e-12)),
        Orientation::CounterClockwise
    );
}

#[test]
fn on_segment_is_a_bounding_box_test() {
    let p = v(0.0, 0.0);
    let r = v(10.0, 10.0);
    assert!(on_segment(p, v(5.0, 5.0), r));
    assert!(on_segment(p, v(0.0, 0.0), r));
    assert!(on_segment(p, v(10.0, 10.0), r));
    assert!(!on_segment(p, v(11.0, 5.0), r));
    // Collinearity is not verified: any point inside the box passes.
    assert!(on_segment(p, v(2.0, 9.0), r));
}

#[test]
fn segments_cross_properly() {
    assert!(segments_intersect(
        v(0.0, 0.0),
        v(10.0, 10.0),
        v(0.0, 10.0),
        v(10.0, 0.0)
    ));
}

#[test]
fn segments_disjoint() {
    assert!(!segments_intersect(
        v(0.0, 0.0),
        v(1.0, 1.0),
        v(5.0, 5.0),
        v(6.0, 5.0)
    ));
    // Parallel, never meeting.
    assert!(!segments_intersect(
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(0.0, 1.0),
        v(10.0, 1.0)
    ));
}

#[test]
fn segments_touching_at_endpoint() {
    assert!(segments_intersect(
        v(0.0, 0.0),
        v(5.0, 5.0),
        v(5.0, 5.0),
        v(10.0, 0.0)
    ));
}

#[test]
fn segments_collinear_overlap_and_gap() {
    assert!(segments_intersect(
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(5.0, 0.0),
        v(15.0, 0.0)
    ));
    assert!(!segments_intersect(
        v(0.0, 0.0),
        v(4.0, 0.0),
        v(5.0, 0.0),
        v(15.0, 0.0)
    ));
}

#[test]
fn segments_intersect_is_symmetric() {
    let cases = [
        (v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0)),
        (v(0.0, 0.0), v(1.0, 1.0), v(5.0, 5.0), v(6.0, 5.0)),
        (v(0.0, 0.0), v(10.0, 0.0), v(5.0, 0.0), v(15.0, 0.0)),
        (v(0.0, 0.0), v(5.0, 5.0), v(5.0, 5.0), v(10.0, 0.0)),
    ];
    for (p1, p2, p3, p4) in cases {
        assert_eq!(
            segments_intersect(p1, p2, p3, p4),
            segments_intersect(p3, p4, p1, p2)
        );
    }
}

#[test]
fn zero_length_segment_on_other_segment() {
    // Degenerate segment collapsing to a point on the other segment: the
    // collinear branch reports contact.
    assert!(segments_intersect(
        v(5.0, 0.0),
        v(5.0, 0.0),
        v(0.0, 0.0),
        v(10.0, 0.0)
    ));
}
