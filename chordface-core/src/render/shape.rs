//! Minute-shape renderer
//!
//! The minute bucket selects exactly one shape per redraw. Selection is
//! a pure function so it can be tested without a surface; drawing
//! dispatches on the selected variant.

use heapless::Vec;

use crate::geometry::{polar_offset, Point};
use crate::settings::Settings;
use crate::surface::{DrawError, DrawSurface};
use crate::trig::TURN;

/// Stroke width of the ring shape.
pub const RING_STROKE_WIDTH: i32 = 15;

/// Largest vertex count a bucket can produce (bucket 11).
pub const MAX_POLYGON_POINTS: usize = 11;

/// The minute indicator drawn at the display center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MinuteShape {
    /// Bucket 0: nothing
    Blank,
    /// Bucket 1: filled circle
    Dot,
    /// Bucket 2: background-colored annulus punched out of the lines
    Ring,
    /// Buckets 3..=11: regular polygon with `sides` vertices
    Polygon { sides: u8 },
}

impl MinuteShape {
    /// Select the shape for a minute bucket (0..=11).
    pub fn select(bucket: u8) -> Self {
        match bucket {
            0 => MinuteShape::Blank,
            1 => MinuteShape::Dot,
            2 => MinuteShape::Ring,
            sides => MinuteShape::Polygon { sides },
        }
    }
}

/// Vertices of a regular polygon, first vertex pointing up.
///
/// Rebuilt every redraw; the previous frame's path is dropped when the
/// returned vector goes out of scope.
pub fn polygon_vertices(
    center: Point,
    circumradius: i32,
    sides: u8,
) -> Result<Vec<Point, MAX_POLYGON_POINTS>, DrawError> {
    if !(3..=MAX_POLYGON_POINTS as u8).contains(&sides) {
        return Err(DrawError::Unrepresentable);
    }

    let mut path = Vec::new();
    for i in 0..i32::from(sides) {
        // Per-vertex division spreads the rounding when sides does not
        // divide a full turn
        let angle = i * TURN / i32::from(sides);
        // Cannot overflow: sides was bounds-checked
        let _ = path.push(center + polar_offset(angle, circumradius));
    }
    Ok(path)
}

/// Draw the selected shape at the display center.
pub fn draw<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    shape: MinuteShape,
) -> Result<(), DrawError> {
    let center = surface.center();
    let size = i32::from(settings.shape_size);

    match shape {
        MinuteShape::Blank => Ok(()),
        MinuteShape::Dot => {
            surface.fill_circle(center, size, settings.line);
            if settings.outline_shape {
                surface.draw_circle(center, size, 1, settings.line);
            }
            Ok(())
        }
        MinuteShape::Ring => {
            // The thick stroke in background color straddles the radius,
            // leaving guide lines visible inside and outside the annulus
            surface.draw_circle(
                center,
                size - RING_STROKE_WIDTH / 2,
                RING_STROKE_WIDTH,
                settings.background,
            );
            if settings.outline_shape {
                surface.draw_circle(center, size - RING_STROKE_WIDTH, 1, settings.line);
                surface.draw_circle(center, size, 1, settings.line);
            }
            Ok(())
        }
        MinuteShape::Polygon { sides } => {
            let path = polygon_vertices(center, size, sides)?;
            surface.fill_polygon(&path, settings.line)?;
            if settings.outline_shape {
                surface.draw_polygon(&path, settings.line)?;
            }
            Ok(())
        }
    }
}
