//! Point arithmetic in display space
//!
//! Coordinates are integer pixels with the origin at the top-left corner
//! and y growing downward, which is why [`polar_offset`] negates the
//! cosine term: angle 0 points "up" on screen.

use core::ops::{Add, Neg, Sub};

use crate::trig::{cos_lookup, scale, sin_lookup, Angle};

/// A point (or offset vector) in display space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point from coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Offset vector of `magnitude` pixels toward `angle` (0 = up on screen).
pub fn polar_offset(angle: Angle, magnitude: i32) -> Point {
    Point::new(
        scale(sin_lookup(angle), magnitude),
        -scale(cos_lookup(angle), magnitude),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::QUARTER_TURN;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3, -4);
        let b = Point::new(1, 2);
        assert_eq!(a + b, Point::new(4, -2));
        assert_eq!(a - b, Point::new(2, -6));
        assert_eq!(-a, Point::new(-3, 4));
    }

    #[test]
    fn test_polar_offset_cardinals() {
        // Angle 0 points up, quarter turn points right
        assert_eq!(polar_offset(0, 10), Point::new(0, -10));
        assert_eq!(polar_offset(QUARTER_TURN, 10), Point::new(10, 0));
        assert_eq!(polar_offset(2 * QUARTER_TURN, 10), Point::new(0, 10));
        assert_eq!(polar_offset(3 * QUARTER_TURN, 10), Point::new(-10, 0));
    }

    #[test]
    fn test_polar_offset_negative_magnitude_reverses() {
        for angle in (0..360).step_by(30) {
            assert_eq!(polar_offset(angle, -25), -polar_offset(angle, 25));
        }
    }
}
