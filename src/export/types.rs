//! Snapshot formats and export errors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File format a snapshot is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster image
    Png,
    /// Encapsulated PostScript, the page-description snapshot (default)
    #[default]
    Eps,
    /// Plain PostScript document
    Ps,
    /// Scalable vector graphics
    Svg,
    /// Portable document
    Pdf,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Eps => "eps",
            ExportFormat::Ps => "ps",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Picks the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(ExportFormat::Png),
            "eps" => Some(ExportFormat::Eps),
            "ps" => Some(ExportFormat::Ps),
            "svg" => Some(ExportFormat::Svg),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Errors that can occur while exporting a snapshot.
///
/// A failed export never touches the canvas and never leaves a partial file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported snapshot format for {} (expected .png, .eps, .ps, .svg or .pdf)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Rendering failed: {0}")]
    Render(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Vector output could not be finished: {0}")]
    Stream(String),

    #[error("Failed to write snapshot to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(
            ExportFormat::from_path(Path::new("a/b/Drawing.PNG")),
            Some(ExportFormat::Png)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("snapshot.eps")),
            Some(ExportFormat::Eps)
        );
        assert_eq!(ExportFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(ExportFormat::from_path(Path::new("snapshot")), None);
    }

    #[test]
    fn extension_round_trips_through_from_path() {
        for format in [
            ExportFormat::Png,
            ExportFormat::Eps,
            ExportFormat::Ps,
            ExportFormat::Svg,
            ExportFormat::Pdf,
        ] {
            let path = PathBuf::from(format!("out.{format}"));
            assert_eq!(ExportFormat::from_path(&path), Some(format));
        }
    }
}
