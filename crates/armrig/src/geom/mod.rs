//! Exact orientation and intersection predicates over 2D points.
//!
//! Purpose
//! - Provide the minimal primitives the collision queries are built from:
//!   `orientation`, `on_segment`, `segments_intersect`.
//!
//! Why exact comparisons
//! - `orientation` classifies `Collinear` on an exact zero cross product.
//!   The collinear branches of `segments_intersect` and the even-odd ray
//!   cast in `obstacle` are tuned to that convention; a tolerance here would
//!   silently change which configurations count as collisions. The flip side
//!   is accepted: touching or exactly-collinear inputs may classify
//!   inconsistently under floating rounding.
//!
//! Code cross-refs: `obstacle::Obstacle::collides_with_segment`.

mod predicates;

pub use predicates::{on_segment, orientation, segments_intersect, Orientation};

#[cfg(test)]
mod tests;
