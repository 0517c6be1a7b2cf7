//! Boundary oracle: the visible area that spawns are placed just outside of.

use crate::geometry::Bounds;

/// Supplies the rectangle used by boundary-relative spawn placement.
pub trait BoundaryOracle: Send + Sync {
    /// Current visible area in world coordinates, or `None` if the host has no
    /// valid spawn boundary (e.g. no camera).
    fn bounds(&self) -> Option<Bounds>;
}

/// A boundary that never moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedBoundary(pub Bounds);

impl BoundaryOracle for FixedBoundary {
    fn bounds(&self) -> Option<Bounds> {
        Some(self.0)
    }
}
