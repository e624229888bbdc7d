//! ST7735 TFT panel driver (160x128 RGB565)
//!
//! Minimal write-only driver: init sequence plus a full-frame flush
//! that streams the framebuffer row by row over SPI.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Spi};
use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

use chordface_display::{FaceBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

// ST7735 command set (subset)
const CMD_SWRESET: u8 = 0x01;
const CMD_SLPOUT: u8 = 0x11;
const CMD_NORON: u8 = 0x13;
const CMD_DISPON: u8 = 0x29;
const CMD_CASET: u8 = 0x2A;
const CMD_RASET: u8 = 0x2B;
const CMD_RAMWR: u8 = 0x2C;
const CMD_MADCTL: u8 = 0x36;
const CMD_COLMOD: u8 = 0x3A;

/// MADCTL value for landscape orientation (row/column exchange)
const MADCTL_LANDSCAPE: u8 = 0xA0;
/// COLMOD value for 16-bit color
const COLMOD_RGB565: u8 = 0x05;

/// The panel as wired on the target board.
pub type FacePanel = St7735<Spi<'static, SPI0, spi::Async>, Output<'static>, Output<'static>>;

/// Errors from panel communication
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// SPI transfer failed
    Spi,
    /// Control pin failed
    Pin,
}

/// Write-only ST7735 driver over an SPI bus with D/C and reset pins.
pub struct St7735<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> St7735<SPI, DC, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Hardware reset and init sequence. Leaves the display on.
    pub async fn init(&mut self) -> Result<(), PanelError> {
        self.rst.set_low().map_err(|_| PanelError::Pin)?;
        Timer::after(Duration::from_millis(10)).await;
        self.rst.set_high().map_err(|_| PanelError::Pin)?;
        Timer::after(Duration::from_millis(120)).await;

        self.command(CMD_SWRESET, &[]).await?;
        Timer::after(Duration::from_millis(150)).await;
        self.command(CMD_SLPOUT, &[]).await?;
        Timer::after(Duration::from_millis(120)).await;

        self.command(CMD_COLMOD, &[COLMOD_RGB565]).await?;
        self.command(CMD_MADCTL, &[MADCTL_LANDSCAPE]).await?;
        self.command(CMD_NORON, &[]).await?;
        self.command(CMD_DISPON, &[]).await?;
        Ok(())
    }

    /// Stream a full frame to the panel.
    pub async fn flush(&mut self, frame: &FaceBuffer) -> Result<(), PanelError> {
        let right = (DISPLAY_WIDTH - 1) as u8;
        let bottom = (DISPLAY_HEIGHT - 1) as u8;
        self.command(CMD_CASET, &[0, 0, 0, right]).await?;
        self.command(CMD_RASET, &[0, 0, 0, bottom]).await?;
        self.command(CMD_RAMWR, &[]).await?;

        self.dc.set_high().map_err(|_| PanelError::Pin)?;
        let mut row_bytes = [0u8; DISPLAY_WIDTH * 2];
        for y in 0..DISPLAY_HEIGHT {
            for (i, pixel) in frame.row(y).iter().enumerate() {
                let [hi, lo] = pixel.to_be_bytes();
                row_bytes[2 * i] = hi;
                row_bytes[2 * i + 1] = lo;
            }
            self.spi
                .write(&row_bytes)
                .await
                .map_err(|_| PanelError::Spi)?;
        }
        Ok(())
    }

    async fn command(&mut self, cmd: u8, args: &[u8]) -> Result<(), PanelError> {
        self.dc.set_low().map_err(|_| PanelError::Pin)?;
        self.spi.write(&[cmd]).await.map_err(|_| PanelError::Spi)?;
        if !args.is_empty() {
            self.dc.set_high().map_err(|_| PanelError::Pin)?;
            self.spi.write(args).await.map_err(|_| PanelError::Spi)?;
        }
        Ok(())
    }
}
