//! Guide-line (chord family) renderer
//!
//! The hour hand is drawn as a family of parallel chords perpendicular
//! to the hour angle. Each chord spans the display diagonal, so every
//! chord crosses the full visible area no matter how it is offset.

use crate::geometry::{polar_offset, Point};
use crate::settings::Settings;
use crate::surface::DrawSurface;
use crate::trig::{isqrt, Angle, QUARTER_TURN};

/// One guide line, endpoints in display space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub a: Point,
    pub b: Point,
}

/// Rounded length of the display diagonal.
pub fn diagonal(width: u16, height: u16) -> i32 {
    let w = u32::from(width);
    let h = u32::from(height);
    isqrt(w * w + h * h) as i32
}

/// Iterator over the chord family for one hour angle.
///
/// Yields `ceil(diagonal / spacing)` chords with perpendicular shifts
/// `-diagonal/2 + i * spacing`. Each chord is `center ± half_span`
/// translated by its shift, so every chord is symmetric about its own
/// midpoint on the perpendicular axis through the center.
pub struct ChordFamily {
    center: Point,
    axis: Angle,
    half_span: Point,
    diagonal: i32,
    spacing: i32,
    index: i32,
    count: i32,
}

impl ChordFamily {
    /// `spacing` must be positive; the settings model guarantees this.
    pub fn new(center: Point, hour_angle: Angle, diagonal: i32, spacing: i32) -> Self {
        Self {
            center,
            axis: hour_angle,
            half_span: polar_offset(hour_angle, diagonal / 2),
            diagonal,
            spacing,
            index: 0,
            count: (diagonal + spacing - 1) / spacing,
        }
    }

    /// Total number of chords this family yields.
    pub fn count_total(&self) -> usize {
        self.count as usize
    }
}

impl Iterator for ChordFamily {
    type Item = Chord;

    fn next(&mut self) -> Option<Chord> {
        if self.index >= self.count {
            return None;
        }

        let shift = -self.diagonal / 2 + self.index * self.spacing;
        let offset = polar_offset(self.axis + QUARTER_TURN, shift);
        self.index += 1;

        Some(Chord {
            a: self.center + self.half_span + offset,
            b: self.center - self.half_span + offset,
        })
    }
}

/// Fill the background and draw the chord family.
pub fn draw<S: DrawSurface>(surface: &mut S, settings: &Settings, hour_angle: Angle) {
    surface.fill_screen(settings.background);

    let (width, height) = surface.dimensions();
    let family = ChordFamily::new(
        surface.center(),
        hour_angle,
        diagonal(width, height),
        i32::from(settings.line_spacing),
    );
    for chord in family {
        surface.draw_line(chord.a, chord.b, settings.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{Op, RecordingSurface};
    use proptest::prelude::*;

    #[test]
    fn test_diagonal_rounds_to_nearest() {
        // 3-4-5 triangle scaled up
        assert_eq!(diagonal(96, 128), 160);
        // sqrt(160^2 + 128^2) = 204.90...
        assert_eq!(diagonal(160, 128), 205);
    }

    #[test]
    fn test_chord_count_matches_contract() {
        for spacing in [1, 3, 5, 7, 30, 205, 300] {
            let d = 205;
            let family = ChordFamily::new(Point::new(80, 64), 0, d, spacing);
            let expected = (d as usize).div_ceil(spacing as usize);
            assert_eq!(family.count_total(), expected);
            assert_eq!(family.count(), expected);
        }
    }

    #[test]
    fn test_angle_zero_chords_are_vertical() {
        let center = Point::new(80, 64);
        let d = 205;
        for chord in ChordFamily::new(center, 0, d, 5) {
            assert_eq!(chord.a.x, chord.b.x);
            assert_eq!(chord.a.y - chord.b.y, -(d / 2) - d / 2);
        }
    }

    #[test]
    fn test_draw_fills_background_then_lines() {
        let mut surface = RecordingSurface::new(160, 128);
        let settings = Settings::default();

        draw(&mut surface, &settings, 90);

        assert_eq!(surface.ops[0], Op::FillScreen(settings.background));
        let lines = surface.ops[1..]
            .iter()
            .filter(|op| matches!(op, Op::Line { color, .. } if *color == settings.line))
            .count();
        assert_eq!(lines, 205usize.div_ceil(5));
        assert_eq!(surface.ops.len(), 1 + lines);
    }

    proptest! {
        #[test]
        fn prop_chord_midpoints_lie_on_perpendicular_axis(
            hour_angle in (0..12i32).prop_map(|h| h * 30),
            spacing in 1i32..40,
        ) {
            let center = Point::new(80, 64);
            let d = 205;
            for (i, chord) in ChordFamily::new(center, hour_angle, d, spacing).enumerate() {
                let shift = -d / 2 + i as i32 * spacing;
                let expected = center + polar_offset(hour_angle + QUARTER_TURN, shift);
                // Midpoint in doubled coordinates to avoid halving loss
                prop_assert_eq!(chord.a.x + chord.b.x, 2 * expected.x);
                prop_assert_eq!(chord.a.y + chord.b.y, 2 * expected.y);
            }
        }

        #[test]
        fn prop_endpoints_symmetric_about_midpoint(
            hour_angle in 0i32..360,
            spacing in 1i32..40,
        ) {
            let center = Point::new(80, 64);
            for chord in ChordFamily::new(center, hour_angle, 205, spacing) {
                let half = polar_offset(hour_angle, 205 / 2);
                prop_assert_eq!(chord.a - chord.b, half + half);
            }
        }
    }
}
