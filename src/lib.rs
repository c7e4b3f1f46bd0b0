//! Library exports for the sketchpad drawing core.
//!
//! Exposes the drawing engine, tool controller and session context alongside
//! rendering, export and configuration so that a UI shell (or the bundled
//! replay binary) can drive the same state machine.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::{InputEvent, Sketchpad};
