//! Geometry engine for freehand-drawn orthogonal slabs.
//!
//! An [`OrthogonalPathBuilder`] turns pointer motion into a closed, axis-aligned ribbon
//! polygon. Edges of the resulting [`Shape`] can then be decorated with
//! [`EdgeModification`]s and its corners with [`CornerModification`]s, which are resolved into
//! concrete boundary points on demand.

#[macro_use]
mod point;

mod builder;
mod caps;
mod config;
mod determinant;
mod error;
mod outline;
mod segment;
mod shape;
mod tolerance;
mod viewport;

pub mod corner;
pub mod modification;

pub use self::builder::{Direction, OrthogonalPathBuilder, PreviewShape};
pub use self::caps::{CapEdges, resolve_start_end_edges};
pub use self::config::{Config, DEFAULT_HALF_WIDTH, PIXELS_PER_INCH};
pub use self::corner::{CornerModification, CornerOffsets};
pub use self::error::{Error, Result};
pub use self::modification::{
    EdgeModification, ModificationKind, Placement, PlacementError, generate_edge_points,
};
pub use self::outline::{Outline, edge_display_length};
pub use self::point::Point;
pub use self::segment::{Frame, Segment};
pub use self::shape::Shape;
pub use self::tolerance::{IsClose, Tolerance};
pub use self::viewport::Viewport;

/// The direction a closed boundary winds in, as seen with the y axis pointing up.
///
/// Ribbons drawn by the [`OrthogonalPathBuilder`] are always [`Orientation::Clockwise`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A geometry whose orientation is defined by the right-hand rule.
pub trait RightHanded {
    /// Returns true if, and only if, this geometry is oriented clockwise.
    fn is_clockwise(&self) -> bool;
}

/// A type whose distance to other instances of itself is defined.
pub trait Distance {
    /// The distance type.
    type Distance;

    /// Returns the distance between self and rhs.
    fn distance(&self, rhs: &Self) -> Self::Distance;
}
