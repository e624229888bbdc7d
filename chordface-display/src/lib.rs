//! Framebuffer rasterizer for the Chordface watchface
//!
//! This crate turns the core renderer's vector draw calls into RGB565
//! pixels. The firmware renders a whole frame into a [`Framebuffer`]
//! and then streams it to the panel row by row; nothing here touches
//! hardware, so the rasterizer is fully testable on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod framebuffer;

pub use framebuffer::Framebuffer;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: usize = 160;
/// Panel height in pixels.
pub const DISPLAY_HEIGHT: usize = 128;

/// Framebuffer sized for the target panel.
pub type FaceBuffer = Framebuffer<DISPLAY_WIDTH, DISPLAY_HEIGHT>;
