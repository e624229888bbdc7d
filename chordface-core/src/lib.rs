//! Display-agnostic core logic for the Chordface watchface
//!
//! This crate contains everything that does not depend on a concrete
//! display or board:
//!
//! - Fixed-point trigonometry in a whole-turn angle unit
//! - Time-of-day to hour-angle / minute-bucket mapping
//! - The guide-line (chord family) and minute-shape renderers
//! - The settings model and its persisted record format
//! - The `DrawSurface` trait the renderers draw against

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod geometry;
pub mod render;
pub mod settings;
pub mod surface;
pub mod trig;
