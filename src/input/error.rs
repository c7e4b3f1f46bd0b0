//! Errors raised at the input boundary.

use crate::export::ExportError;
use thiserror::Error;

/// Rejected setting values.
///
/// Inside the crate tools, pen types and sizes are closed types; these errors
/// surface only where raw text or numbers are converted into them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown tool '{0}' (expected pen or eraser)")]
    UnknownTool(String),

    #[error("unknown pen type '{0}' (expected line, round, square, arrow or diamond)")]
    UnknownPenType(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

/// Failure while handling a single [`InputEvent`](super::InputEvent).
#[derive(Debug, Error)]
pub enum EventError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
