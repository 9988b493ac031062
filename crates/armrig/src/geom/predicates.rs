use crate::Vec2;

/// Turn direction of the ordered triple `(p, q, r)`.
///
/// Screen coordinates (y grows downward): a positive cross product of
/// `(q - p)` and `(r - q)` reads as a clockwise turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Sign of the cross product `(q - p) × (r - q)`.
///
/// `Collinear` only on an exact zero. Do not add a tolerance here; the
/// collinear branches of [`segments_intersect`] depend on this convention
/// (see module docs).
#[inline]
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True iff `q` lies within the axis-aligned bounding box of segment `p`–`r`.
///
/// Pre: the caller has already established that the three points are
/// collinear; this does not re-check it.
#[inline]
pub fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segments `p1`–`p2` and `p3`–`p4` intersect; touching counts.
///
/// General case: a proper crossing iff the endpoints of each segment lie on
/// opposite sides of the other. Any collinear triple falls through to the
/// corresponding bounding-box check, so touching and overlapping endpoints
/// are reported too. Boolean only; the crossing point is never computed.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    let none_collinear = o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear;
    if none_collinear && o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p3, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, p4, p2))
        || (o3 == Orientation::Collinear && on_segment(p3, p1, p4))
        || (o4 == Orientation::Collinear && on_segment(p3, p2, p4))
}
