//! Chordface - abstract analog watchface firmware
//!
//! Main firmware binary for RP2040 boards driving an ST7735 TFT.
//! The hour is a family of parallel guide lines across the screen, the
//! five-minute bucket a shape at the center. A configuration host on
//! UART0 pushes style updates and time syncs; settings persist to
//! flash.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use chordface_core::settings::Settings;

use crate::panel::St7735;
use crate::storage::{SettingsStore, StorageError};

mod channels;
mod clock;
mod panel;
mod storage;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chordface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Settings: defaults first, then whatever flash has
    let mut store = SettingsStore::new(p.FLASH, p.DMA_CH2);
    let settings = match store.load().await {
        Ok(stored) => {
            info!("Settings restored from flash");
            stored
        }
        Err(StorageError::NotFound) => {
            info!("No stored settings, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!("Settings restore failed: {:?}, using defaults", e);
            Settings::default()
        }
    };

    // UART0 for host configuration messages; the watch never talks back
    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!("UART initialized for host communication");

    // SPI0 to the ST7735 panel
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new(
        p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, p.DMA_CH0, p.DMA_CH1, spi_config,
    );
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::Low);

    let mut panel = St7735::new(spi, dc, rst);
    match panel.init().await {
        Ok(()) => info!("Panel initialized"),
        Err(e) => error!("Panel init failed: {:?}", e),
    }

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::host_rx_task(rx)).unwrap();
    spawner
        .spawn(tasks::render_task(panel, store, settings))
        .unwrap();

    // First frame without waiting for a bucket boundary
    channels::REDRAW.signal(());

    info!("All tasks spawned, entering idle loop");
    loop {
        Timer::after(Duration::from_secs(60)).await;
        trace!("Heartbeat");
    }
}
