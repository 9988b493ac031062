//! Polygonal obstacles and their collision queries.
//!
//! Purpose
//! - Model user-drawn polygons that arm segments are tested against:
//!   point containment (even-odd ray cast), segment collision, and
//!   vertex-handle hit-testing for drag edits.
//!
//! Conventions
//! - Vertices live in local coordinates; the world origin is supplied by the
//!   caller on every call and never stored, so one shape is reusable across
//!   placements.
//! - Insertion order is the winding order and the hit-test priority; it is
//!   preserved across edits.
//! - Input polygons are never validated: self-intersecting vertex lists are
//!   accepted and queried as-is.
//!
//! Code cross-refs: `geom::segments_intersect`, `surface::Surface`.

use crate::geom::segments_intersect;
use crate::surface::{palette, Surface};
use crate::Vec2;
use std::f64::consts::TAU;

/// Radius of the draggable vertex handles, world pixels.
pub const OBSTACLE_HANDLE_RADIUS: f64 = 6.0;

const PREVIEW_STROKE_WIDTH: f64 = 2.0;
const HANDLE_STROKE_WIDTH: f64 = 1.0;

/// Simple polygon in local coordinates.
///
/// Needs ≥3 vertices for a meaningful inside/outside; with fewer than 2
/// vertices segment collision is trivially false.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obstacle {
    vertices: Vec<Vec2>,
}

impl Obstacle {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Replace vertex `index` in place (drag edit). Frame and vertex count
    /// are unchanged. `index` must come from [`Obstacle::pointer_on_vertex`].
    #[inline]
    pub fn set_vertex(&mut self, index: usize, v: Vec2) {
        self.vertices[index] = v;
    }

    /// Fill the polygon placed at world `center`.
    ///
    /// Caller obligation: at least one vertex (there is no fallback for the
    /// first-vertex access).
    pub fn draw(&self, center: Vec2, surface: &mut dyn Surface) {
        debug_assert!(!self.vertices.is_empty(), "drawing a zero-vertex obstacle");
        surface.set_fill(palette::GRAY);
        surface.begin_path();
        surface.move_to(self.vertices[0] + center);
        for v in &self.vertices[1..] {
            surface.line_to(*v + center);
        }
        surface.close_path();
        surface.fill();
    }

    /// Draw the draggable vertex handles at world `origin`.
    pub fn draw_handles(&self, origin: Vec2, surface: &mut dyn Surface) {
        surface.set_stroke(palette::HANDLE_STROKE);
        surface.set_fill(palette::HANDLE_FILL);
        surface.set_line_width(HANDLE_STROKE_WIDTH);
        for v in &self.vertices {
            let world = *v + origin;
            surface.begin_path();
            surface.arc(world, OBSTACLE_HANDLE_RADIUS, 0.0, TAU);
            surface.fill();
            surface.stroke();
        }
    }

    /// Index of the first vertex whose handle contains `pointer`, if any.
    ///
    /// Linear scan in insertion order: when handles overlap, the
    /// earliest-inserted vertex wins. Squared-distance test, no square root.
    pub fn pointer_on_vertex(&self, pointer: Vec2, origin: Vec2) -> Option<usize> {
        self.vertices.iter().position(|v| {
            let d = pointer - (*v + origin);
            d.norm_squared() <= OBSTACLE_HANDLE_RADIUS * OBSTACLE_HANDLE_RADIUS
        })
    }

    /// Even-odd ray cast: does the polygon placed at `origin` contain the
    /// world point?
    ///
    /// A horizontal ray through `point` toggles the inside flag at each edge
    /// it crosses. A ray passing exactly through a vertex inherits the
    /// classic ambiguity of the algorithm; not specially handled.
    pub fn point_inside(&self, point: Vec2, origin: Vec2) -> bool {
        let n = self.vertices.len();
        if n == 0 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i] + origin;
            let vj = self.vertices[j] + origin;
            let crosses = (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Does the world segment `a`–`b` collide with the polygon placed at
    /// `origin`?
    ///
    /// True when the segment intersects any polygon edge (consecutive
    /// vertices, wrapping last→first), or when its midpoint lies inside —
    /// the fallback that catches a segment fully contained in the polygon.
    /// The containment check only runs with ≥3 vertices; fewer than 2
    /// vertices can never collide.
    pub fn collides_with_segment(&self, a: Vec2, b: Vec2, origin: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 2 {
            return false;
        }
        for i in 0..n {
            let p = self.vertices[i] + origin;
            let q = self.vertices[(i + 1) % n] + origin;
            if segments_intersect(a, b, p, q) {
                return true;
            }
        }
        n >= 3 && self.point_inside((a + b) * 0.5, origin)
    }
}

/// Live preview of an obstacle still being placed.
///
/// Renders the in-progress `points` (local) at world `center` in the
/// translucent preview style: outline plus a handle circle per point,
/// closing the outline only once three or more points exist. Empty input
/// draws nothing. Free function: the points are not an [`Obstacle`] yet.
pub fn draw_preview(points: &[Vec2], center: Vec2, surface: &mut dyn Surface) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    let first_world = first + center;
    let handle_offset = Vec2::new(OBSTACLE_HANDLE_RADIUS, 0.0);

    surface.set_fill(palette::PREVIEW_FILL);
    surface.set_stroke(palette::PREVIEW_STROKE);
    surface.set_line_width(PREVIEW_STROKE_WIDTH);

    surface.begin_path();
    surface.move_to(first_world);
    surface.arc(first_world, OBSTACLE_HANDLE_RADIUS, 0.0, TAU);
    for p in rest {
        let world = *p + center;
        surface.line_to(world);
        surface.move_to(world + handle_offset);
        surface.arc(world, OBSTACLE_HANDLE_RADIUS, 0.0, TAU);
        surface.move_to(world);
    }
    if points.len() > 2 {
        surface.line_to(first_world);
    }
    surface.stroke();

    surface.begin_path();
    for p in points {
        let world = *p + center;
        surface.move_to(world + handle_offset);
        surface.arc(world, OBSTACLE_HANDLE_RADIUS, 0.0, TAU);
    }
    surface.fill();
}
