//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use chordface_protocol::{SettingsUpdate, TimeSync};

/// Channel capacity for settings updates from the host
const UPDATE_CHANNEL_SIZE: usize = 4;

/// Request a redraw of the face
///
/// A Signal coalesces bursts: multiple requests before the render task
/// wakes produce one frame.
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Settings updates decoded from host frames
pub static UPDATE_CHANNEL: Channel<CriticalSectionRawMutex, SettingsUpdate, UPDATE_CHANNEL_SIZE> =
    Channel::new();

/// Wall-clock synchronization from the host
pub static TIME_SET: Signal<CriticalSectionRawMutex, TimeSync> = Signal::new();
