//! Geometric primitives for radar layout and positioning.
//!
//! This module provides the geometric types the placement engine works with
//! when it turns rings and quadrants into concrete dot coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`AngleRange`] - A closed angular interval, in radians
//! - [`RadialRange`] - A closed radius interval measured from the diagram center
//!
//! # Coordinate System
//!
//! Techradar uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! Because Y grows downward, an angle of `0` points right and `-π/2` points
//! straight up. Angles grow clockwise on screen.

use std::f32::consts::TAU;

/// Angular span of a full circle, in radians.
pub const FULL_CIRCLE: f32 = TAU;

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates and convert to and from polar form around
/// an arbitrary center.
///
/// # Examples
///
/// ```
/// # use techradar_core::geometry::Point;
/// let center = Point::new(100.0, 100.0);
/// let p = center.add_polar(10.0, 0.0);
///
/// assert_eq!(p.x(), 110.0);
/// assert_eq!(p.y(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the point reached by travelling `radius` from this point
    /// in the direction of `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar_core::geometry::Point;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let top = Point::new(50.0, 50.0).add_polar(20.0, -FRAC_PI_2);
    ///
    /// assert!((top.x() - 50.0).abs() < 1e-4);
    /// assert!((top.y() - 30.0).abs() < 1e-4);
    /// ```
    pub fn add_polar(self, radius: f32, angle: f32) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }

    /// Returns `(radius, angle)` of this point relative to `center`.
    ///
    /// The angle lies in `(-π, π]`, as returned by [`f32::atan2`].
    pub fn polar_from(self, center: Point) -> (f32, f32) {
        let (dx, dy) = (self.x - center.x, self.y - center.y);
        (dx.hypot(dy), dy.atan2(dx))
    }
}

/// Dimensions of the drawing canvas.
///
/// # Examples
///
/// ```
/// # use techradar_core::geometry::{Point, Size};
/// let canvas = Size::square(980.0);
/// assert_eq!(canvas.center(), Point::new(490.0, 490.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a square size with both sides equal to `side`
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the point at the center of a box of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A closed angular interval `[start, end]`, in radians.
///
/// Ranges are expected to be ordered (`start <= end`); the placement engine
/// only produces ordered ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    start: f32,
    end: f32,
}

impl AngleRange {
    /// Creates a new angle range from `start` to `end`
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Creates a range of total width `2 * half_span` centered on `mid`
    pub fn around(mid: f32, half_span: f32) -> Self {
        Self::new(mid - half_span, mid + half_span)
    }

    /// Returns the start angle
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the end angle
    pub fn end(self) -> f32 {
        self.end
    }

    /// Returns the angular width of the range
    pub fn span(self) -> f32 {
        self.end - self.start
    }

    /// Returns the angle halfway between start and end
    pub fn midpoint(self) -> f32 {
        (self.start + self.end) * 0.5
    }

    /// Returns `true` if the range has collapsed to zero or negative width
    pub fn is_collapsed(self) -> bool {
        self.end <= self.start
    }

    /// Returns the angle at fraction `t` of the range
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar_core::geometry::AngleRange;
    /// let range = AngleRange::new(0.0, 2.0);
    /// assert_eq!(range.lerp(0.25), 0.5);
    /// ```
    pub fn lerp(self, t: f32) -> f32 {
        self.start + self.span() * t
    }

    /// Shrinks the range by `padding` on both ends
    pub fn inset(self, padding: f32) -> Self {
        Self::new(self.start + padding, self.end - padding)
    }

    /// Returns `true` if `angle` lies within the range, inclusive of both ends
    pub fn contains(self, angle: f32) -> bool {
        angle >= self.start && angle <= self.end
    }
}

/// A closed radius interval `[inner, outer]` measured from the diagram center.
///
/// Construction always yields `inner <= outer`: inverted bounds are swapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialRange {
    inner: f32,
    outer: f32,
}

impl RadialRange {
    /// Creates a new radial range, swapping the bounds if they are inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar_core::geometry::RadialRange;
    /// let range = RadialRange::new(80.0, 20.0);
    /// assert_eq!(range.inner(), 20.0);
    /// assert_eq!(range.outer(), 80.0);
    /// ```
    pub fn new(inner: f32, outer: f32) -> Self {
        Self {
            inner: inner.min(outer),
            outer: inner.max(outer),
        }
    }

    /// Returns the inner (smaller) radius
    pub fn inner(self) -> f32 {
        self.inner
    }

    /// Returns the outer (larger) radius
    pub fn outer(self) -> f32 {
        self.outer
    }

    /// Returns the radial width of the range
    pub fn width(self) -> f32 {
        self.outer - self.inner
    }

    /// Returns the radius halfway between inner and outer
    pub fn midpoint(self) -> f32 {
        (self.inner + self.outer) * 0.5
    }

    /// Raises the inner radius to at least `floor`, never past the outer radius
    pub fn with_inner_floor(self, floor: f32) -> Self {
        Self {
            inner: self.outer.min(self.inner.max(floor)),
            outer: self.outer,
        }
    }

    /// Returns `true` if `radius` lies within the range, inclusive of both ends
    pub fn contains(self, radius: f32) -> bool {
        radius >= self.inner && radius <= self.outer
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_polar_from_axis_aligned_offsets() {
        let center = Point::new(10.0, 20.0);
        assert_eq!(Point::new(13.0, 24.0).polar_from(center).0, 5.0);
        assert_eq!(Point::new(10.0, 20.0).polar_from(center), (0.0, 0.0));
        let (_, up) = Point::new(10.0, 0.0).polar_from(center);
        assert!(approx_eq!(f32, up, -FRAC_PI_2, epsilon = 1e-6));
    }

    #[test]
    fn test_add_polar_points_down_for_positive_quarter_turn() {
        let p = Point::default().add_polar(10.0, FRAC_PI_2);
        assert!(approx_eq!(f32, p.x(), 0.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, p.y(), 10.0, epsilon = 1e-4));
    }

    #[test]
    fn test_polar_from_center() {
        let center = Point::new(490.0, 490.0);
        let p = center.add_polar(120.0, -PI / 4.0);
        let (radius, angle) = p.polar_from(center);
        assert!(approx_eq!(f32, radius, 120.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, angle, -PI / 4.0, epsilon = 1e-4));
    }

    #[test]
    fn test_size_center() {
        let size = Size::square(980.0);
        assert_eq!(size.center(), Point::new(490.0, 490.0));
        assert_eq!(size.width(), size.height());
    }

    #[test]
    fn test_angle_range_basics() {
        let range = AngleRange::new(-FRAC_PI_2, 0.0);
        assert!(approx_eq!(f32, range.span(), FRAC_PI_2));
        assert!(approx_eq!(f32, range.midpoint(), -PI / 4.0));
        assert!(range.contains(-FRAC_PI_2));
        assert!(range.contains(0.0));
        assert!(!range.contains(0.1));
    }

    #[test]
    fn test_angle_range_inset_and_collapse() {
        let range = AngleRange::new(0.0, 1.0).inset(0.25);
        assert_eq!(range, AngleRange::new(0.25, 0.75));
        assert!(!range.is_collapsed());
        assert!(AngleRange::new(0.0, 0.4).inset(0.3).is_collapsed());
    }

    #[test]
    fn test_angle_range_around() {
        let range = AngleRange::around(1.0, 0.04);
        assert!(approx_eq!(f32, range.span(), 0.08, epsilon = 1e-6));
        assert!(approx_eq!(f32, range.midpoint(), 1.0));
    }

    #[test]
    fn test_radial_range_swaps_inverted_bounds() {
        let range = RadialRange::new(50.0, 10.0);
        assert_eq!(range.inner(), 10.0);
        assert_eq!(range.outer(), 50.0);
        assert_eq!(range.width(), 40.0);
        assert_eq!(range.midpoint(), 30.0);
    }

    #[test]
    fn test_radial_range_inner_floor() {
        let range = RadialRange::new(22.5, 74.5);
        assert_eq!(range.with_inner_floor(46.0).inner(), 46.0);
        assert_eq!(range.with_inner_floor(10.0).inner(), 22.5);
        // Never pushed past the outer radius
        assert_eq!(range.with_inner_floor(100.0).inner(), 74.5);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #[test]
        fn polar_roundtrip_preserves_radius(
            center in point_strategy(),
            radius in 1.0f32..500.0,
            angle in -3.1f32..3.1,
        ) {
            let (r, a) = center.add_polar(radius, angle).polar_from(center);
            prop_assert!(approx_eq!(f32, r, radius, epsilon = 1e-2));
            prop_assert!(approx_eq!(f32, a, angle, epsilon = 1e-3));
        }

        #[test]
        fn radial_range_is_always_ordered(a in -500.0f32..500.0, b in -500.0f32..500.0) {
            let range = RadialRange::new(a, b);
            prop_assert!(range.inner() <= range.outer());
            prop_assert!(range.contains(range.midpoint()));
        }

        #[test]
        fn lerp_stays_inside_range(start in -4.0f32..0.0, width in 0.0f32..4.0, t in 0.0f32..1.0) {
            let range = AngleRange::new(start, start + width);
            let angle = range.lerp(t);
            prop_assert!(angle >= range.start() - 1e-5 && angle <= range.end() + 1e-5);
        }
    }
}
