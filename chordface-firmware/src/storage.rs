//! Settings persistence in flash
//!
//! Uses sequential-storage for wear-leveled key-value storage in the
//! last 64KB of flash. The whole six-field settings record is written
//! on every applied update and read back once at boot.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use chordface_core::settings::{Settings, MAX_RECORD_SIZE};

/// Flash size of the target board (2MB)
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;
/// Partition reserved for settings at the end of flash
pub const SETTINGS_PARTITION_SIZE: usize = 64 * 1024;

/// Flash range for the settings partition
pub const SETTINGS_RANGE: core::ops::Range<u32> =
    ((FLASH_SIZE - SETTINGS_PARTITION_SIZE) as u32)..(FLASH_SIZE as u32);

/// Working buffer size for sequential-storage operations
const PAGE_BUFFER_SIZE: usize = 128;

/// Storage keys for persisted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StorageKey {
    /// The settings record (binary postcard format)
    Settings = 0,
}

impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = *self as u8;
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        match buffer.first() {
            Some(0) => Ok((StorageKey::Settings, 1)),
            Some(_) => Err(sequential_storage::map::SerializationError::InvalidFormat),
            None => Err(sequential_storage::map::SerializationError::BufferTooSmall),
        }
    }
}

/// Errors from settings persistence
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Storage operation failed
    Storage,
    /// No record stored yet
    NotFound,
    /// Stored record did not decode
    Corrupted,
}

/// Flash-backed settings store
pub struct SettingsStore {
    flash: Flash<'static, FLASH, Async, FLASH_SIZE>,
}

impl SettingsStore {
    /// Take ownership of the flash peripheral.
    pub fn new(flash: Peri<'static, FLASH>, dma: Peri<'static, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Load the persisted settings record.
    ///
    /// `NotFound` is the expected result on first boot.
    pub async fn load(&mut self) -> Result<Settings, StorageError> {
        let mut page_buffer = [0u8; PAGE_BUFFER_SIZE];

        let result = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut page_buffer,
            &StorageKey::Settings,
        )
        .await;

        match result {
            Ok(Some(data)) => Settings::decode(data).map_err(|_| StorageError::Corrupted),
            Ok(None) => Err(StorageError::NotFound),
            Err(_) => Err(StorageError::Storage),
        }
    }

    /// Persist the full settings record.
    pub async fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        let mut record = [0u8; MAX_RECORD_SIZE];
        let data: &[u8] = settings
            .encode(&mut record)
            .map_err(|_| StorageError::Storage)?;

        let mut page_buffer = [0u8; PAGE_BUFFER_SIZE];
        map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut page_buffer,
            &StorageKey::Settings,
            &data,
        )
        .await
        .map_err(|_| StorageError::Storage)
    }
}
