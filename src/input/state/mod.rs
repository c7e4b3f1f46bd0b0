mod core;

pub use core::{EventOutcome, Sketchpad};
