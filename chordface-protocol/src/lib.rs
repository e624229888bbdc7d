//! Host Configuration Protocol
//!
//! This crate defines the UART-based protocol between a configuration
//! host (phone app or serial tool) and the watchface. The host pushes
//! partial style updates and wall-clock synchronization; the watch never
//! needs to talk back.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–64B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Settings payloads are field-tagged so hosts can send any subset of
//! fields and newer hosts can add fields without breaking old firmware.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{HostMessage, SettingsUpdate, TimeSync};
