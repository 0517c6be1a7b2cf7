//! Boundary-relative spawn placement.
//!
//! Positions are picked in normalized viewport coordinates, just outside one
//! of the four edges, and then mapped into world space.

use crate::env::RngOracle;
use crate::geometry::{Bounds, Point};

/// Viewport edge a spawn is placed beyond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::EnumCount)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Top,
        }
    }

    /// Normalized `(u, v)` for a point `along` the edge, pushed `margin`
    /// outside the unit square.
    pub fn normalized(self, along: f32, margin: f32) -> (f32, f32) {
        match self {
            Self::Left => (-margin, along),
            Self::Right => (1.0 + margin, along),
            Self::Bottom => (along, -margin),
            Self::Top => (along, 1.0 + margin),
        }
    }
}

/// Picks an edge and a point along it, then maps into `bounds`.
pub fn edge_position(
    rng: &dyn RngOracle,
    edge_seed: u64,
    along_seed: u64,
    bounds: &Bounds,
    margin: f32,
) -> Point {
    let edge = Edge::from_index(rng.index(edge_seed, 4));
    let (u, v) = edge.normalized(rng.unit(along_seed), margin);
    bounds.from_normalized(u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, compute_seed};
    use strum::IntoEnumIterator;

    #[test]
    fn edges_sit_outside_unit_square() {
        for edge in Edge::iter() {
            let (u, v) = edge.normalized(0.5, 0.1);
            let inside = (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v);
            assert!(!inside, "{edge:?} produced an interior point");
        }
        assert_eq!(Edge::Left.normalized(0.25, 0.1), (-0.1, 0.25));
        assert_eq!(Edge::Top.normalized(0.25, 0.1), (0.25, 1.1));
    }

    #[test]
    fn positions_land_in_margin_band() {
        let bounds = Bounds::new(Point::new(-8.0, -4.5), Point::new(8.0, 4.5));
        let rng = PcgRng;
        for nonce in 0..200 {
            let point = edge_position(
                &rng,
                compute_seed(5, nonce, 0, 0),
                compute_seed(5, nonce, 0, 1),
                &bounds,
                0.1,
            );
            assert!(bounds.contains_with_margin(point, 0.1 + 1e-4));
            assert!(!bounds.contains_with_margin(point, 0.1 - 1e-3));
        }
    }
}
