//! Message types pushed by the configuration host
//!
//! Settings updates carry any subset of the six style fields as
//! `[id][length][value]` entries. Unknown field ids and entries with an
//! unexpected length are skipped individually, so one bad field never
//! fails the whole update; a truncated tail simply ends decoding.

use heapless::Vec;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

/// Message type: partial settings update
pub const MSG_SETTINGS: u8 = 0x10;
/// Message type: wall-clock synchronization
pub const MSG_TIME: u8 = 0x11;

// Settings field ids
pub const FIELD_BACKGROUND_COLOR: u8 = 1;
pub const FIELD_LINE_COLOR: u8 = 2;
pub const FIELD_SWAP_HOUR_MIN: u8 = 3;
pub const FIELD_OUTLINE_SHAPE: u8 = 4;
pub const FIELD_LINE_SPACING: u8 = 5;
pub const FIELD_SHAPE_SIZE: u8 = 6;

/// A partial style update; absent fields leave the current value alone.
///
/// Colors are raw 0xRRGGBB wire values; the core settings model converts
/// them to its display color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsUpdate {
    pub background_color: Option<u32>,
    pub line_color: Option<u32>,
    pub swap_hour_min: Option<bool>,
    pub outline_shape: Option<bool>,
    pub line_spacing: Option<u16>,
    pub shape_size: Option<u16>,
}

impl SettingsUpdate {
    /// True when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decode an update from a settings frame payload.
    ///
    /// Never fails: unrecognized or missized entries are skipped and a
    /// truncated tail ends the walk, keeping whatever decoded cleanly.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut update = Self::default();

        let mut i = 0;
        while i + 2 <= payload.len() {
            let id = payload[i];
            let len = payload[i + 1] as usize;
            let Some(value) = payload.get(i + 2..i + 2 + len) else {
                break;
            };

            match (id, value) {
                (FIELD_BACKGROUND_COLOR, &[b0, b1, b2, b3]) => {
                    update.background_color = Some(u32::from_le_bytes([b0, b1, b2, b3]));
                }
                (FIELD_LINE_COLOR, &[b0, b1, b2, b3]) => {
                    update.line_color = Some(u32::from_le_bytes([b0, b1, b2, b3]));
                }
                (FIELD_SWAP_HOUR_MIN, &[flag]) => {
                    update.swap_hour_min = Some(flag != 0);
                }
                (FIELD_OUTLINE_SHAPE, &[flag]) => {
                    update.outline_shape = Some(flag != 0);
                }
                (FIELD_LINE_SPACING, &[lo, hi]) => {
                    update.line_spacing = Some(u16::from_le_bytes([lo, hi]));
                }
                (FIELD_SHAPE_SIZE, &[lo, hi]) => {
                    update.shape_size = Some(u16::from_le_bytes([lo, hi]));
                }
                _ => {} // unknown field or wrong length: skip
            }

            i += 2 + len;
        }

        update
    }

    /// Encode this update into a frame (host side and tests).
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();

        let mut put = |id: u8, value: &[u8]| -> Result<(), FrameError> {
            payload.push(id).map_err(|_| FrameError::PayloadTooLarge)?;
            payload
                .push(value.len() as u8)
                .map_err(|_| FrameError::PayloadTooLarge)?;
            payload
                .extend_from_slice(value)
                .map_err(|_| FrameError::PayloadTooLarge)
        };

        if let Some(color) = self.background_color {
            put(FIELD_BACKGROUND_COLOR, &color.to_le_bytes())?;
        }
        if let Some(color) = self.line_color {
            put(FIELD_LINE_COLOR, &color.to_le_bytes())?;
        }
        if let Some(swap) = self.swap_hour_min {
            put(FIELD_SWAP_HOUR_MIN, &[swap as u8])?;
        }
        if let Some(outline) = self.outline_shape {
            put(FIELD_OUTLINE_SHAPE, &[outline as u8])?;
        }
        if let Some(spacing) = self.line_spacing {
            put(FIELD_LINE_SPACING, &spacing.to_le_bytes())?;
        }
        if let Some(size) = self.shape_size {
            put(FIELD_SHAPE_SIZE, &size.to_le_bytes())?;
        }

        Frame::new(MSG_SETTINGS, &payload)
    }
}

/// Wall-clock synchronization from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSync {
    /// Hour of day, 0..=23
    pub hour: u8,
    /// Minute of hour, 0..=59
    pub minute: u8,
}

impl TimeSync {
    /// Decode from a time frame payload, rejecting out-of-range values.
    pub fn from_payload(payload: &[u8]) -> Result<Self, FrameError> {
        let [hour, minute] = *payload else {
            return Err(FrameError::InvalidFrame);
        };
        if hour >= 24 || minute >= 60 {
            return Err(FrameError::InvalidFrame);
        }
        Ok(Self { hour, minute })
    }

    /// Encode into a frame.
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        Frame::new(MSG_TIME, &[self.hour, self.minute])
    }
}

/// Any message the host can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostMessage {
    /// Partial settings update
    Settings(SettingsUpdate),
    /// Wall-clock synchronization
    Time(TimeSync),
}

impl HostMessage {
    /// Parse a message from a decoded frame.
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_SETTINGS => Ok(HostMessage::Settings(SettingsUpdate::from_payload(
                &frame.payload,
            ))),
            MSG_TIME => Ok(HostMessage::Time(TimeSync::from_payload(&frame.payload)?)),
            _ => Err(FrameError::UnknownMessage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_update_roundtrip() {
        let update = SettingsUpdate {
            background_color: Some(0xFFFFFF),
            line_color: Some(0xCD2231),
            swap_hour_min: Some(true),
            outline_shape: Some(false),
            line_spacing: Some(5),
            shape_size: Some(30),
        };

        let frame = update.to_frame().unwrap();
        match HostMessage::from_frame(&frame).unwrap() {
            HostMessage::Settings(decoded) => assert_eq!(decoded, update),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_partial_update_leaves_other_fields_absent() {
        let update = SettingsUpdate {
            shape_size: Some(50),
            ..Default::default()
        };

        let frame = update.to_frame().unwrap();
        let decoded = SettingsUpdate::from_payload(&frame.payload);

        assert_eq!(decoded.shape_size, Some(50));
        assert!(decoded.background_color.is_none());
        assert!(decoded.line_color.is_none());
        assert!(decoded.swap_hour_min.is_none());
        assert!(decoded.outline_shape.is_none());
        assert!(decoded.line_spacing.is_none());
    }

    #[test]
    fn test_color_field_decodes_little_endian() {
        let payload = [FIELD_LINE_COLOR, 4, 0x31, 0x22, 0xCD, 0x00];
        let decoded = SettingsUpdate::from_payload(&payload);
        assert_eq!(decoded.line_color, Some(0x00CD2231));
    }

    #[test]
    fn test_empty_payload_is_empty_update() {
        let decoded = SettingsUpdate::from_payload(&[]);
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_unknown_field_skipped() {
        // id 99 (3 bytes), then a valid shape size entry
        let payload = [99, 3, 0xAA, 0xBB, 0xCC, FIELD_SHAPE_SIZE, 2, 40, 0];
        let decoded = SettingsUpdate::from_payload(&payload);
        assert_eq!(decoded.shape_size, Some(40));
    }

    #[test]
    fn test_wrong_length_field_skipped() {
        // swap flag with a 2-byte value is malformed; spacing after it still decodes
        let payload = [FIELD_SWAP_HOUR_MIN, 2, 1, 0, FIELD_LINE_SPACING, 2, 7, 0];
        let decoded = SettingsUpdate::from_payload(&payload);
        assert!(decoded.swap_hour_min.is_none());
        assert_eq!(decoded.line_spacing, Some(7));
    }

    #[test]
    fn test_truncated_tail_keeps_decoded_fields() {
        // spacing decodes, then an entry that claims 4 bytes but has 1
        let payload = [FIELD_LINE_SPACING, 2, 9, 0, FIELD_BACKGROUND_COLOR, 4, 0x12];
        let decoded = SettingsUpdate::from_payload(&payload);
        assert_eq!(decoded.line_spacing, Some(9));
        assert!(decoded.background_color.is_none());
    }

    #[test]
    fn test_time_sync_validation() {
        assert_eq!(
            TimeSync::from_payload(&[13, 37]),
            Ok(TimeSync { hour: 13, minute: 37 })
        );
        assert_eq!(
            TimeSync::from_payload(&[24, 0]),
            Err(FrameError::InvalidFrame)
        );
        assert_eq!(
            TimeSync::from_payload(&[0, 60]),
            Err(FrameError::InvalidFrame)
        );
        assert_eq!(TimeSync::from_payload(&[1]), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_unknown_message_type() {
        let frame = Frame::empty(0x7F);
        assert_eq!(
            HostMessage::from_frame(&frame),
            Err(FrameError::UnknownMessage)
        );
    }

    proptest! {
        #[test]
        fn prop_update_roundtrip(
            background in proptest::option::of(0u32..=0xFFFFFF),
            line in proptest::option::of(0u32..=0xFFFFFF),
            swap in proptest::option::of(proptest::bool::ANY),
            outline in proptest::option::of(proptest::bool::ANY),
            spacing in proptest::option::of(proptest::num::u16::ANY),
            size in proptest::option::of(proptest::num::u16::ANY),
        ) {
            let update = SettingsUpdate {
                background_color: background,
                line_color: line,
                swap_hour_min: swap,
                outline_shape: outline,
                line_spacing: spacing,
                shape_size: size,
            };
            let frame = update.to_frame().unwrap();
            prop_assert_eq!(SettingsUpdate::from_payload(&frame.payload), update);
        }
    }
}
