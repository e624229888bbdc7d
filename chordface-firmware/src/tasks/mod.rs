//! Embassy tasks
//!
//! - `tick_task`: advances the wall clock and requests redraws at
//!   five-minute bucket boundaries
//! - `host_rx_task`: parses frames from the configuration host
//! - `render_task`: applies settings updates, persists them, and draws
//!   frames to the panel

mod host_rx;
mod render;
mod tick;

pub use host_rx::host_rx_task;
pub use render::render_task;
pub use tick::tick_task;
