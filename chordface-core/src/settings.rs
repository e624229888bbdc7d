//! Style settings model and persisted record
//!
//! Exactly one [`Settings`] instance exists at runtime, owned by the
//! render task. It starts from built-in defaults, is overwritten by a
//! valid persisted record when one exists, and afterwards mutated
//! field-by-field by host updates. The whole six-field record is
//! persisted (postcard-encoded) after every applied update.

use serde::{Deserialize, Serialize};

use chordface_protocol::SettingsUpdate;

/// An RGB565 display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);

    /// Pack 8-bit channels into RGB565.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Convert a 0xRRGGBB wire value (host color picker format).
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb888((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Smallest accepted value for `line_spacing` and `shape_size`.
///
/// The chord loop steps by `line_spacing`, so zero would never make
/// progress; clamping happens here at the update boundary rather than in
/// the render path.
pub const MIN_DIMENSION: u16 = 1;

/// The six user-configurable style parameters.
///
/// This struct is also the persistence record; field order is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Face background color
    pub background: Color,
    /// Guide line and shape color
    pub line: Color,
    /// Exchange the sampled hour and minute before mapping
    pub swap_hour_min: bool,
    /// Stroke an extra 1-unit outline around minute shapes
    pub outline_shape: bool,
    /// Pixel distance between adjacent guide lines
    pub line_spacing: u16,
    /// Radius / half-size of the minute shape
    pub shape_size: u16,
}

/// Upper bound on the postcard-encoded record size.
pub const MAX_RECORD_SIZE: usize = 16;

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            line: Color::from_rgb888(205, 34, 49),
            swap_hour_min: false,
            outline_shape: false,
            line_spacing: 5,
            shape_size: 30,
        }
    }
}

impl Settings {
    /// Apply a partial update; absent fields keep their current value.
    ///
    /// Dimension fields clamp to [`MIN_DIMENSION`]. Applying the same
    /// update twice is a no-op the second time.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(hex) = update.background_color {
            self.background = Color::from_hex(hex);
        }
        if let Some(hex) = update.line_color {
            self.line = Color::from_hex(hex);
        }
        if let Some(swap) = update.swap_hour_min {
            self.swap_hour_min = swap;
        }
        if let Some(outline) = update.outline_shape {
            self.outline_shape = outline;
        }
        if let Some(spacing) = update.line_spacing {
            self.line_spacing = spacing.max(MIN_DIMENSION);
        }
        if let Some(size) = update.shape_size {
            self.shape_size = size.max(MIN_DIMENSION);
        }
    }

    /// Encode the full record into `buf`, returning the written slice.
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Decode a record; `Err` covers both truncated and corrupt data.
    pub fn decode(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background, Color::WHITE);
        assert_eq!(settings.line, Color::from_hex(0xCD2231));
        assert!(!settings.swap_hour_min);
        assert!(!settings.outline_shape);
        assert_eq!(settings.line_spacing, 5);
        assert_eq!(settings.shape_size, 30);
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(Color::from_rgb888(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb888(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_hex(0xFF0000), Color(0xF800));
        assert_eq!(Color::from_hex(0x00FF00), Color(0x07E0));
        assert_eq!(Color::from_hex(0x0000FF), Color(0x001F));
        assert_eq!(Color::from_hex(0xCD2231), Color::from_rgb888(0xCD, 0x22, 0x31));
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut settings = Settings::default();
        let before = settings;

        settings.apply(&SettingsUpdate {
            shape_size: Some(50),
            ..Default::default()
        });

        assert_eq!(settings.shape_size, 50);
        assert_eq!(settings.background, before.background);
        assert_eq!(settings.line, before.line);
        assert_eq!(settings.swap_hour_min, before.swap_hour_min);
        assert_eq!(settings.outline_shape, before.outline_shape);
        assert_eq!(settings.line_spacing, before.line_spacing);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let update = SettingsUpdate {
            background_color: Some(0x112233),
            line_spacing: Some(9),
            swap_hour_min: Some(true),
            ..Default::default()
        };

        let mut once = Settings::default();
        once.apply(&update);
        let mut twice = once;
        twice.apply(&update);

        assert_eq!(once, twice);

        let mut buf_a = [0u8; MAX_RECORD_SIZE];
        let mut buf_b = [0u8; MAX_RECORD_SIZE];
        assert_eq!(
            once.encode(&mut buf_a).unwrap(),
            twice.encode(&mut buf_b).unwrap()
        );
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut settings = Settings::default();
        settings.apply(&SettingsUpdate::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_degenerate_dimensions_clamped() {
        let mut settings = Settings::default();
        settings.apply(&SettingsUpdate {
            line_spacing: Some(0),
            shape_size: Some(0),
            ..Default::default()
        });
        assert_eq!(settings.line_spacing, MIN_DIMENSION);
        assert_eq!(settings.shape_size, MIN_DIMENSION);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut settings = Settings::default();
        settings.apply(&SettingsUpdate {
            background_color: Some(0x000000),
            line_color: Some(0x00FF00),
            swap_hour_min: Some(true),
            outline_shape: Some(true),
            line_spacing: Some(12),
            shape_size: Some(44),
        });

        let mut buf = [0u8; MAX_RECORD_SIZE];
        let record = settings.encode(&mut buf).unwrap();
        let restored = Settings::decode(record).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_corrupt_record_rejected() {
        assert!(Settings::decode(&[]).is_err());
        assert!(Settings::decode(&[0xFF]).is_err());
    }
}
