//! Convenience types and operations for 2D geometry.
//!
//! The crate is built around the [`BiComponent`] trait, a capability shared
//! by every value that is fully described by two independent scalar axes.
//! Concrete types ([`Point2`], [`Vector2`], [`Size`]) get component-wise
//! arithmetic, clamping and approximate equality from the trait's default
//! methods, so the operations work across concrete types.
//!
//! [`Rect`] layers derived geometry on top: centers, corners, edge
//! midpoints, anchor points in a normalized unit square, per-axis alignment,
//! inset/outset by directed edges and rigid rotation.
//!
//! All types are plain `Copy` values. Nothing here performs I/O, holds
//! state, or fails with an error: the only fallible operations return
//! `Option`, and all arithmetic follows native floating point semantics
//! (division by zero produces infinity or NaN, never a panic).

pub mod traits;
pub use traits::BiComponent;

mod point;
pub use point::Point2;

mod vector;
pub use vector::Vector2;

mod size;
pub use size::Size;

mod rect;
pub use rect::{Alignment, Bound, Rect};

mod edges;
pub use edges::Edges;

pub mod angle;
pub use angle::Angle;

mod slope;
pub use slope::Slope;

mod ratio;
pub use ratio::Ratio;

mod orient;
pub use orient::Orientation;

mod context;
pub use context::{LayoutContext, LayoutDirection};
