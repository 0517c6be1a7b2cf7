use horde_core::{BoundaryOracle, Bounds, Point};

/// Camera-sized rectangle that follows the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Point,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            center: Point::ORIGIN,
            width,
            height,
        }
    }

    pub fn follow(&mut self, center: Point) {
        self.center = center;
    }
}

impl BoundaryOracle for Viewport {
    /// `None` for a collapsed camera, which disables boundary placement.
    fn bounds(&self) -> Option<Bounds> {
        let bounds = Bounds::centered(self.center, self.width, self.height);
        bounds.is_valid().then_some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_viewport_has_no_bounds() {
        assert!(Viewport::new(0.0, 10.0).bounds().is_none());

        let mut viewport = Viewport::new(20.0, 10.0);
        viewport.follow(Point::new(5.0, 5.0));
        let bounds = viewport.bounds();
        assert_eq!(bounds.map(|b| b.min), Some(Point::new(-5.0, 0.0)));
    }
}
