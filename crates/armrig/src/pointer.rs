//! Pointer-coordinate helpers.
//!
//! The host UI turns raw device events into finished points before calling
//! into the core; these helpers do that conversion. Two frames are used:
//! relative to the surface's top-left corner, and relative to its center —
//! the natural root for the arm chain and for obstacle placement.

use crate::Vec2;

/// Bounding rectangle of the drawing surface in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Surface center in the surface's own (top-left) frame.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Client position relative to the surface's top-left corner.
#[inline]
pub fn pointer_pos(rect: SurfaceRect, client: Vec2) -> Vec2 {
    Vec2::new(client.x - rect.left, client.y - rect.top)
}

/// Client position relative to the surface center.
#[inline]
pub fn pointer_pos_from_center(rect: SurfaceRect, client: Vec2) -> Vec2 {
    pointer_pos(rect, client) - rect.center()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_pos_subtracts_rect_corner() {
        let rect = SurfaceRect::new(100.0, 50.0, 800.0, 600.0);
        let p = pointer_pos(rect, Vec2::new(130.0, 70.0));
        assert_eq!(p, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn pointer_pos_from_center_is_zero_at_center() {
        let rect = SurfaceRect::new(100.0, 50.0, 800.0, 600.0);
        let p = pointer_pos_from_center(rect, Vec2::new(500.0, 350.0));
        assert_eq!(p, Vec2::new(0.0, 0.0));
        let q = pointer_pos_from_center(rect, Vec2::new(100.0, 50.0));
        assert_eq!(q, Vec2::new(-400.0, -300.0));
    }
}
