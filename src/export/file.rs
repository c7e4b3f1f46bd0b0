//! Snapshot file naming and all-or-nothing writes.

use super::types::{ExportError, ExportFormat};
use chrono::Local;
use log::{debug, info, warn};
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Where snapshots go when no destination is given.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Directory generated names are placed in.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Format of generated names.
    pub format: ExportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename_template: "snapshot_%Y-%m-%d_%H%M%S".to_string(),
            format: ExportFormat::Eps,
        }
    }
}

impl ExportSettings {
    /// Builds a fresh destination from the template. Nothing is created on disk.
    pub fn generated_path(&self) -> PathBuf {
        let filename = generate_filename(&self.filename_template, self.format);
        self.directory.join(filename)
    }
}

/// Generate a filename based on the template and current time.
///
/// Templates with invalid specifiers fall back to `snapshot`.
pub fn generate_filename(template: &str, format: ExportFormat) -> String {
    let now = Local::now();
    let mut filename = String::new();
    if write!(filename, "{}", now.format(template)).is_err() {
        warn!("Invalid filename template '{template}', using 'snapshot'");
        filename = "snapshot".to_string();
    }
    format!("{}.{}", filename, format.extension())
}

/// Directory levels created for an export, deepest first.
#[derive(Debug, Default)]
#[must_use = "created directories must be kept or rolled back"]
pub struct CreatedDirectories {
    levels: Vec<PathBuf>,
}

impl CreatedDirectories {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Removes the directories again, stopping at the first one that is not empty.
    pub fn rollback(self) {
        for dir in self.levels {
            match fs::remove_dir(&dir) {
                Ok(()) => debug!("Removed snapshot directory {}", dir.display()),
                Err(err) => {
                    warn!("Could not remove snapshot directory {}: {err}", dir.display());
                    break;
                }
            }
        }
    }
}

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the levels that did not exist before, so a failed export can remove them.
pub fn ensure_directory_exists(directory: &Path) -> Result<CreatedDirectories, ExportError> {
    let levels: Vec<PathBuf> = directory
        .ancestors()
        .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .map(Path::to_path_buf)
        .collect();

    if !levels.is_empty() {
        info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|source| ExportError::Write {
            path: directory.to_path_buf(),
            source,
        })?;
    }
    Ok(CreatedDirectories { levels })
}

/// Writes `data` to `path` so that readers see either the old file or the complete new one.
///
/// The bytes go to a hidden sibling first and are renamed into place; on any
/// failure the sibling is removed and `path` is left as it was.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<PathBuf, ExportError> {
    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path.file_name().ok_or_else(|| {
        write_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "destination has no file name",
        ))
    })?;
    let partial = path.with_file_name(format!(".{}.partial", file_name.to_string_lossy()));

    debug!(
        "Writing {} bytes to {} via {}",
        data.len(),
        path.display(),
        partial.display()
    );

    if let Err(source) = write_synced(&partial, data).and_then(|()| fs::rename(&partial, path)) {
        // The partial file may not exist if the first write failed.
        let _ = fs::remove_file(&partial);
        return Err(write_error(source));
    }

    Ok(path.to_path_buf())
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}
