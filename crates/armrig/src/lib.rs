//! Core geometry and kinematics for a 2D arm sandbox.
//!
//! The crate is the headless half of an interactive sandbox: a chain of rigid
//! links rooted at a fixed point, polygonal obstacles that can be edited
//! vertex-by-vertex, and the collision queries between the two. Pointer
//! wiring and the real canvas belong to the host; it calls in with finished
//! coordinates and draws through the [`surface::Surface`] capability trait,
//! so everything here runs and tests without a display.
//!
//! Coordinate conventions
//! - Screen space: y grows downward. Link angles are measured CCW from the
//!   positive x axis and applied with inverted y (`arm::Arm::end_position`).
//! - Points are used both as absolute (world) and relative (local)
//!   coordinates; callers track which frame a value is in.

pub mod arm;
pub mod geom;
pub mod obstacle;
pub mod pointer;
pub mod scene;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2D point/vector, in whichever frame the caller is working in.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arm::{
        Arm, ArmParams, DEFAULT_ARM_ANGLE, DEFAULT_ARM_LENGTH, END_MARKER_RADIUS,
        JOINT_HANDLE_RADIUS,
    };
    pub use crate::geom::{on_segment, orientation, segments_intersect, Orientation};
    pub use crate::obstacle::{draw_preview, Obstacle, OBSTACLE_HANDLE_RADIUS};
    pub use crate::pointer::{pointer_pos, pointer_pos_from_center, SurfaceRect};
    pub use crate::scene::{
        sample_chain, sample_obstacle, ChainCfg, CountDist, RadialObstacleCfg, ReplayToken,
    };
    pub use crate::surface::{palette, DrawOp, Recording, Rgba, Surface};
    pub use crate::Vec2;
}
