//! Drawing surface abstraction
//!
//! The render pipeline draws through this trait so the same code runs
//! against the firmware framebuffer and against host-side test surfaces.
//! Implementations clip to their own bounds; callers may hand over
//! coordinates outside the visible area.

use crate::geometry::Point;
use crate::settings::Color;

/// Errors a drawing surface can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// A primitive was given parameters the surface cannot represent,
    /// such as a polygon with too many vertices.
    Unrepresentable,
}

/// A fixed-size pixel surface the renderer can draw on.
pub trait DrawSurface {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u16, u16);

    /// Fill the whole surface with one color.
    fn fill_screen(&mut self, color: Color);

    /// Draw a 1-pixel line between two points, inclusive of both.
    fn draw_line(&mut self, a: Point, b: Point, color: Color);

    /// Fill a disc of the given radius.
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color);

    /// Stroke a circle with the given stroke width, centered on the
    /// radius.
    fn draw_circle(&mut self, center: Point, radius: i32, width: i32, color: Color);

    /// Fill a closed polygon given its vertices in order.
    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError>;

    /// Stroke a closed polygon outline, 1 pixel wide.
    fn draw_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError>;

    /// Center of the surface.
    fn center(&self) -> Point {
        let (w, h) = self.dimensions();
        Point::new(i32::from(w) / 2, i32::from(h) / 2)
    }
}
