//! Singly-linked arm chain with forward-kinematics layout.
//!
//! Purpose
//! - Model a chain of rigid links rooted at a fixed point. Angles are the
//!   only persistent configuration; every layout or draw pass re-roots the
//!   chain from the parent position downward, so link origins are derived
//!   state, never authoritative.
//!
//! Ownership
//! - Each link exclusively owns its child (`Option<Box<Arm>>`). The chain is
//!   acyclic by construction and is never mutated into a cycle.
//!
//! Code cross-refs: `surface::Surface`, `obstacle::Obstacle::collides_with_segment`.

use crate::surface::{palette, Rgba, Surface};
use crate::Vec2;
use std::f64::consts::{FRAC_PI_4, TAU};

/// Default link length, pixels.
pub const DEFAULT_ARM_LENGTH: f64 = 100.0;
/// Default link angle, radians CCW from the positive x axis.
pub const DEFAULT_ARM_ANGLE: f64 = FRAC_PI_4;
/// Radius of the draggable joint handle at a link's midpoint.
pub const JOINT_HANDLE_RADIUS: f64 = 10.0;
/// Radius of the end-effector marker at a link's tip.
pub const END_MARKER_RADIUS: f64 = 5.0;

const LINK_STROKE_WIDTH: f64 = 3.0;

/// Construction parameters for one link.
#[derive(Clone, Debug)]
pub struct ArmParams {
    pub color: Rgba,
    pub origin: Vec2,
    pub length: f64,
    pub angle: f64,
    pub child: Option<Box<Arm>>,
}

impl Default for ArmParams {
    fn default() -> Self {
        Self {
            color: palette::GREEN,
            origin: Vec2::zeros(),
            length: DEFAULT_ARM_LENGTH,
            angle: DEFAULT_ARM_ANGLE,
            child: None,
        }
    }
}

/// One rigid link; owns the rest of the chain below it.
#[derive(Clone, Debug)]
pub struct Arm {
    color: Rgba,
    origin: Vec2,
    length: f64,
    angle: f64,
    child: Option<Box<Arm>>,
}

impl Arm {
    pub fn new(params: ArmParams) -> Self {
        Self {
            color: params.color,
            origin: params.origin,
            length: params.length,
            angle: params.angle,
            child: params.child,
        }
    }

    /// Chain with one link per entry of `lengths` (root first), default
    /// color and angle. `None` on empty input.
    pub fn from_lengths(lengths: &[f64]) -> Option<Self> {
        let (&root_len, rest) = lengths.split_first()?;
        let mut child: Option<Box<Arm>> = None;
        for &length in rest.iter().rev() {
            child = Some(Box::new(Arm::new(ArmParams {
                length,
                child,
                ..ArmParams::default()
            })));
        }
        Some(Arm::new(ArmParams {
            length: root_len,
            child,
            ..ArmParams::default()
        }))
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Base of this link. Derived: rewritten by the parent on every
    /// `layout`/`draw` pass.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the link angle. Any real is accepted, including values outside
    /// `[0, 2π)`; no clamping happens here or anywhere downstream.
    #[inline]
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    #[inline]
    pub fn child(&self) -> Option<&Arm> {
        self.child.as_deref()
    }

    #[inline]
    pub fn child_mut(&mut self) -> Option<&mut Arm> {
        self.child.as_deref_mut()
    }

    /// Tip of this link: `(x + L·cos θ, y − L·sin θ)`. The y inversion maps
    /// the CCW angle convention onto screen coordinates.
    #[inline]
    pub fn end_position(&self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.length * self.angle.cos(),
            self.origin.y - self.length * self.angle.sin(),
        )
    }

    /// Re-root this link at `parent` and propagate origins down the chain.
    ///
    /// Same traversal as [`Arm::draw`], without a surface; collision sweeps
    /// run this before reading [`Arm::segments`].
    pub fn layout(&mut self, parent: Vec2) {
        self.origin = parent;
        let end = self.end_position();
        if let Some(child) = self.child.as_deref_mut() {
            child.layout(end);
        }
    }

    /// Draw this link and its children, root→leaf.
    ///
    /// Re-roots the origin at `parent`, strokes the link, fills the joint
    /// handle at the midpoint and the end-effector marker at the tip, then
    /// recurses. There is no backward pass.
    pub fn draw(&mut self, parent: Vec2, surface: &mut dyn Surface) {
        self.origin = parent;
        let end = self.end_position();

        surface.set_stroke(palette::BLACK);
        surface.set_line_width(LINK_STROKE_WIDTH);
        surface.begin_path();
        surface.move_to(self.origin);
        surface.line_to(end);
        surface.stroke();

        // Joint handle: the drag target for this link's angle.
        surface.begin_path();
        surface.arc(self.arc_pos(), JOINT_HANDLE_RADIUS, 0.0, TAU);
        surface.set_fill(self.color);
        surface.fill();

        // End-effector marker.
        surface.begin_path();
        surface.arc(end, END_MARKER_RADIUS, 0.0, TAU);
        surface.set_fill(palette::BLACK);
        surface.fill();

        if let Some(child) = self.child.as_deref_mut() {
            child.draw(end, surface);
        }
    }

    /// Midpoint of the link — the canonical joint-handle location.
    #[inline]
    pub fn arc_pos(&self) -> Vec2 {
        (self.origin + self.end_position()) * 0.5
    }

    /// Whether `pointer` is on this link's joint handle (squared-distance
    /// test against [`JOINT_HANDLE_RADIUS`]).
    #[inline]
    pub fn is_inside_joint(&self, pointer: Vec2) -> bool {
        let d = pointer - self.arc_pos();
        d.norm_squared() <= JOINT_HANDLE_RADIUS * JOINT_HANDLE_RADIUS
    }

    /// Links root→leaf.
    pub fn links(&self) -> Links<'_> {
        Links { next: Some(self) }
    }

    /// First link, root→leaf, whose joint handle contains `pointer`.
    ///
    /// Handle positions are as of the last `layout`/`draw` pass; run one
    /// first if angles changed since.
    pub fn grabbed_joint(&mut self, pointer: Vec2) -> Option<&mut Arm> {
        if self.is_inside_joint(pointer) {
            return Some(self);
        }
        self.child.as_deref_mut()?.grabbed_joint(pointer)
    }

    /// `(origin, end)` of every link, root→leaf, as of the last layout pass.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        self.links()
            .map(|link| (link.origin, link.end_position()))
            .collect()
    }
}

/// Root→leaf iterator over a chain's links.
pub struct Links<'a> {
    next: Option<&'a Arm>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Arm;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next.take()?;
        self.next = link.child.as_deref();
        Some(link)
    }
}
