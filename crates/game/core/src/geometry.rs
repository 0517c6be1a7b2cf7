//! Minimal 2D geometry used for spawn placement.

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world space, typically the visible viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min: Point::new(center.x - half_w, center.y - half_h),
            max: Point::new(center.x + half_w, center.y + half_h),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// A boundary is usable for placement when it is finite and non-degenerate.
    pub fn is_valid(&self) -> bool {
        let finite = [self.min.x, self.min.y, self.max.x, self.max.y]
            .iter()
            .all(|v| v.is_finite());
        finite && self.width() > 0.0 && self.height() > 0.0
    }

    /// Maps normalized viewport coordinates (0..1 on both axes, values outside
    /// are allowed) into world space.
    pub fn from_normalized(&self, u: f32, v: f32) -> Point {
        Point::new(
            self.min.x + u * self.width(),
            self.min.y + v * self.height(),
        )
    }

    /// Inverse of [`Bounds::from_normalized`].
    pub fn to_normalized(&self, point: Point) -> (f32, f32) {
        (
            (point.x - self.min.x) / self.width(),
            (point.y - self.min.y) / self.height(),
        )
    }

    /// True when `point` lies inside the rectangle expanded by `margin`
    /// (a fraction of the viewport on each side).
    pub fn contains_with_margin(&self, point: Point, margin: f32) -> bool {
        let (u, v) = self.to_normalized(point);
        (-margin..=1.0 + margin).contains(&u) && (-margin..=1.0 + margin).contains(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_mapping_covers_corners() {
        let bounds = Bounds::new(Point::new(-10.0, -5.0), Point::new(10.0, 5.0));
        assert_eq!(bounds.from_normalized(0.0, 0.0), Point::new(-10.0, -5.0));
        assert_eq!(bounds.from_normalized(1.0, 1.0), Point::new(10.0, 5.0));
        assert_eq!(bounds.from_normalized(0.5, 0.5), Point::ORIGIN);
    }

    #[test]
    fn degenerate_bounds_are_invalid() {
        let flat = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(!flat.is_valid());
        let nan = Bounds::new(Point::new(f32::NAN, 0.0), Point::new(10.0, 10.0));
        assert!(!nan.is_valid());
        assert!(Bounds::centered(Point::ORIGIN, 16.0, 9.0).is_valid());
    }

    #[test]
    fn margin_containment() {
        let bounds = Bounds::new(Point::ORIGIN, Point::new(10.0, 10.0));
        assert!(bounds.contains_with_margin(Point::new(-0.5, 5.0), 0.1));
        assert!(!bounds.contains_with_margin(Point::new(-2.0, 5.0), 0.1));
    }
}
