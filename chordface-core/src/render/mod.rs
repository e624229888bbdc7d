//! Frame rendering pipeline
//!
//! One call to [`render_frame`] produces a complete face: the guide-line
//! pass paints the background and the chord family for the hour, then
//! the shape pass draws the minute indicator on top.

pub mod guides;
pub mod shape;

pub use shape::MinuteShape;

use crate::clock::{HandPosition, TimeSample};
use crate::settings::Settings;
use crate::surface::{DrawError, DrawSurface};

/// Render one complete frame for the given time sample.
pub fn render_frame<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    sample: TimeSample,
) -> Result<(), DrawError> {
    let hand = HandPosition::from_time(sample, settings.swap_hour_min);
    guides::draw(surface, settings, hand.hour_angle);
    shape::draw(surface, settings, MinuteShape::select(hand.bucket))
}

#[cfg(test)]
pub(crate) mod testing {
    use heapless::Vec;

    use crate::geometry::Point;
    use crate::settings::Color;
    use crate::surface::{DrawError, DrawSurface};

    /// A draw call captured by [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        FillScreen(Color),
        Line {
            a: Point,
            b: Point,
            color: Color,
        },
        FillCircle {
            center: Point,
            radius: i32,
            color: Color,
        },
        StrokeCircle {
            center: Point,
            radius: i32,
            width: i32,
            color: Color,
        },
        FillPolygon {
            points: Vec<Point, 16>,
            color: Color,
        },
        StrokePolygon {
            points: Vec<Point, 16>,
            color: Color,
        },
    }

    /// Surface that records every draw call instead of rasterizing.
    pub struct RecordingSurface {
        pub width: u16,
        pub height: u16,
        pub ops: Vec<Op, 256>,
    }

    impl RecordingSurface {
        pub fn new(width: u16, height: u16) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }

        fn record(&mut self, op: Op) {
            self.ops.push(op).unwrap();
        }
    }

    impl DrawSurface for RecordingSurface {
        fn dimensions(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn fill_screen(&mut self, color: Color) {
            self.record(Op::FillScreen(color));
        }

        fn draw_line(&mut self, a: Point, b: Point, color: Color) {
            self.record(Op::Line { a, b, color });
        }

        fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
            self.record(Op::FillCircle {
                center,
                radius,
                color,
            });
        }

        fn draw_circle(&mut self, center: Point, radius: i32, width: i32, color: Color) {
            self.record(Op::StrokeCircle {
                center,
                radius,
                width,
                color,
            });
        }

        fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError> {
            let points = Vec::from_slice(points).map_err(|_| DrawError::Unrepresentable)?;
            self.record(Op::FillPolygon { points, color });
            Ok(())
        }

        fn draw_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError> {
            let points = Vec::from_slice(points).map_err(|_| DrawError::Unrepresentable)?;
            self.record(Op::StrokePolygon { points, color });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Op, RecordingSurface};
    use super::*;

    #[test]
    fn test_frame_starts_with_background_fill() {
        let mut surface = RecordingSurface::new(160, 128);
        let settings = Settings::default();

        render_frame(&mut surface, &settings, TimeSample::new(10, 0)).unwrap();

        assert_eq!(surface.ops[0], Op::FillScreen(settings.background));
    }

    #[test]
    fn test_bucket_zero_draws_only_guides() {
        let mut surface = RecordingSurface::new(160, 128);
        let settings = Settings::default();

        // Minute 0..=4 is bucket 0: no shape on top of the lines
        render_frame(&mut surface, &settings, TimeSample::new(7, 3)).unwrap();

        assert!(surface.ops.iter().all(|op| matches!(
            op,
            Op::FillScreen(_) | Op::Line { .. }
        )));
    }

    #[test]
    fn test_swap_mode_changes_selected_shape() {
        let settings = Settings {
            swap_hour_min: true,
            ..Settings::default()
        };

        // 4:20 swapped: effective minute = 20, bucket 4, a square
        let mut surface = RecordingSurface::new(160, 128);
        render_frame(&mut surface, &settings, TimeSample::new(4, 20)).unwrap();

        let polygon = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::FillPolygon { points, .. } => Some(points.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(polygon, 4);
    }
}
