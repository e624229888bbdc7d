//! Render task
//!
//! Owns the settings record, the framebuffer and the panel. Settings
//! updates are applied and persisted here; redraw requests rasterize
//! the face for the current time and stream it out.

use defmt::*;
use embassy_futures::select::{select, Either};
use static_cell::StaticCell;

use chordface_core::render::render_frame;
use chordface_core::settings::Settings;
use chordface_display::FaceBuffer;

use crate::channels::{REDRAW, UPDATE_CHANNEL};
use crate::clock;
use crate::panel::FacePanel;
use crate::storage::SettingsStore;

// The 40KB framebuffer lives in a static, not on the task stack
static FRAME: StaticCell<FaceBuffer> = StaticCell::new();

#[embassy_executor::task]
pub async fn render_task(mut panel: FacePanel, mut store: SettingsStore, mut settings: Settings) {
    info!("Render task started");

    let frame = FRAME.init(FaceBuffer::new());

    loop {
        match select(REDRAW.wait(), UPDATE_CHANNEL.receive()).await {
            Either::First(()) => {
                let sample = clock::now();
                debug!("Rendering frame for {}:{}", sample.hour, sample.minute);

                if let Err(e) = render_frame(frame, &settings, sample) {
                    warn!("Render failed: {:?}", e);
                    continue;
                }
                if let Err(e) = panel.flush(frame).await {
                    warn!("Panel flush failed: {:?}", e);
                }
            }
            Either::Second(update) => {
                settings.apply(&update);

                // In-memory settings stay authoritative even if the
                // write fails
                if let Err(e) = store.save(&settings).await {
                    warn!("Settings persist failed: {:?}", e);
                }

                REDRAW.signal(());
            }
        }
    }
}
