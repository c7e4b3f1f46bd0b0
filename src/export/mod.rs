//! Snapshot export of the canvas to image files.
//!
//! This module provides:
//! - Rendering the primitive list to PNG, EPS, PostScript, SVG or PDF
//! - All-or-nothing file writes (temporary sibling + rename)
//! - Generated file names for exports without a destination

pub mod file;
pub mod snapshot;
pub mod types;

pub use file::{
    CreatedDirectories, ExportSettings, ensure_directory_exists, generate_filename, write_atomically,
};
pub use snapshot::{FileSnapshotSaver, SnapshotSaver, export_snapshot, render_snapshot};
pub use types::{ExportError, ExportFormat};
