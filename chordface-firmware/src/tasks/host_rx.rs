//! Host UART receive task
//!
//! Receives frames from the configuration host and dispatches them to
//! the render and tick tasks.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use chordface_protocol::{FrameParser, HostMessage};

use crate::channels::{TIME_SET, UPDATE_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn host_rx_task(mut rx: BufferedUartRx) {
    info!("Host RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match HostMessage::from_frame(&frame) {
                            Ok(msg) => handle_message(msg),
                            Err(e) => warn!("Failed to parse host message: {:?}", e),
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_message(msg: HostMessage) {
    match msg {
        HostMessage::Settings(update) => {
            debug!("Settings update: {:?}", update);
            // Drop if the render task is far behind; the host resends
            if UPDATE_CHANNEL.try_send(update).is_err() {
                warn!("Update channel full, dropping update");
            }
        }
        HostMessage::Time(sync) => {
            debug!("Time sync: {}:{}", sync.hour, sync.minute);
            TIME_SET.signal(sync);
        }
    }
}
