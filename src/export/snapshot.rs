//! Rendering the canvas into snapshot bytes.

use super::file::write_atomically;
use super::types::{ExportError, ExportFormat};
use crate::draw::{CanvasSettings, Primitive, render_canvas};
use log::info;
use std::path::{Path, PathBuf};

/// Abstraction over where snapshots are written, so failing sinks can be tested.
pub trait SnapshotSaver {
    fn save(
        &self,
        path: &Path,
        canvas: &CanvasSettings,
        primitives: &[Primitive],
    ) -> Result<PathBuf, ExportError>;
}

/// Writes snapshots to the filesystem with [`export_snapshot`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSnapshotSaver;

impl SnapshotSaver for FileSnapshotSaver {
    fn save(
        &self,
        path: &Path,
        canvas: &CanvasSettings,
        primitives: &[Primitive],
    ) -> Result<PathBuf, ExportError> {
        export_snapshot(path, canvas, primitives)
    }
}

/// Renders the canvas and writes it to `path`, choosing the format from the extension.
///
/// # Errors
/// Fails on an unknown extension, a rendering error or an unwritable
/// destination; in every case nothing is left at `path` that was not there before.
pub fn export_snapshot(
    path: &Path,
    canvas: &CanvasSettings,
    primitives: &[Primitive],
) -> Result<PathBuf, ExportError> {
    let format =
        ExportFormat::from_path(path).ok_or_else(|| ExportError::UnsupportedFormat(path.to_path_buf()))?;

    let data = render_snapshot(format, canvas, primitives)?;
    let saved = write_atomically(path, &data)?;

    info!(
        "Snapshot saved: {} ({} primitives, {} bytes, {format})",
        saved.display(),
        primitives.len(),
        data.len()
    );
    Ok(saved)
}

/// Renders the background and primitives into an in-memory file of the given format.
pub fn render_snapshot(
    format: ExportFormat,
    canvas: &CanvasSettings,
    primitives: &[Primitive],
) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (canvas.width as f64, canvas.height as f64);
    match format {
        ExportFormat::Png => {
            let surface = cairo::ImageSurface::create(
                cairo::Format::ARgb32,
                canvas.width as i32,
                canvas.height as i32,
            )?;
            draw_into(&surface, canvas, primitives)?;

            let mut data = Vec::new();
            surface.write_to_png(&mut data)?;
            Ok(data)
        }
        ExportFormat::Eps | ExportFormat::Ps => {
            let surface = cairo::PsSurface::for_stream(width, height, Vec::<u8>::new())?;
            surface.set_eps(format == ExportFormat::Eps);
            finish_stream(&surface, canvas, primitives)
        }
        ExportFormat::Svg => {
            let surface = cairo::SvgSurface::for_stream(width, height, Vec::<u8>::new())?;
            finish_stream(&surface, canvas, primitives)
        }
        ExportFormat::Pdf => {
            let surface = cairo::PdfSurface::for_stream(width, height, Vec::<u8>::new())?;
            finish_stream(&surface, canvas, primitives)
        }
    }
}

fn draw_into(
    surface: &cairo::Surface,
    canvas: &CanvasSettings,
    primitives: &[Primitive],
) -> Result<(), ExportError> {
    // The context must be gone before the surface is finished or encoded.
    let ctx = cairo::Context::new(surface)?;
    render_canvas(&ctx, canvas, primitives)?;
    ctx.status()?;
    Ok(())
}

fn finish_stream(
    surface: &cairo::Surface,
    canvas: &CanvasSettings,
    primitives: &[Primitive],
) -> Result<Vec<u8>, ExportError> {
    draw_into(surface, canvas, primitives)?;

    let stream = surface
        .finish_output_stream()
        .map_err(|err| ExportError::Stream(err.error.to_string()))?;
    let data = stream
        .downcast::<Vec<u8>>()
        .map_err(|_| ExportError::Stream("unexpected output stream type".to_string()))?;
    Ok(*data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};
    use std::fs;
    use tempfile::TempDir;

    fn small_canvas() -> CanvasSettings {
        CanvasSettings {
            width: 64,
            height: 48,
            ..CanvasSettings::default()
        }
    }

    fn sample_primitives() -> Vec<Primitive> {
        vec![
            Primitive::LineSegment {
                x1: 2,
                y1: 2,
                x2: 60,
                y2: 40,
                color: BLACK,
                width: 2,
            },
            Primitive::FilledPolygon {
                points: vec![(10, 20), (20, 10), (30, 20), (20, 30)],
                color: RED,
            },
        ]
    }

    #[test]
    fn png_snapshot_has_png_signature() {
        let data = render_snapshot(ExportFormat::Png, &small_canvas(), &sample_primitives()).unwrap();
        assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn eps_snapshot_is_encapsulated_postscript() {
        let data = render_snapshot(ExportFormat::Eps, &small_canvas(), &sample_primitives()).unwrap();
        let header = String::from_utf8_lossy(&data[..data.len().min(64)]);
        assert!(header.starts_with("%!PS-Adobe-3.0 EPSF-3.0"), "{header}");
    }

    #[test]
    fn vector_formats_produce_their_headers() {
        let svg = render_snapshot(ExportFormat::Svg, &small_canvas(), &[]).unwrap();
        assert!(String::from_utf8_lossy(&svg).contains("<svg"));

        let pdf = render_snapshot(ExportFormat::Pdf, &small_canvas(), &[]).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));

        let ps = render_snapshot(ExportFormat::Ps, &small_canvas(), &[]).unwrap();
        assert!(ps.starts_with(b"%!PS-Adobe-3.0"));
    }

    #[test]
    fn export_writes_file_named_by_caller() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("drawing.png");

        let saved = export_snapshot(&path, &small_canvas(), &sample_primitives()).unwrap();
        assert_eq!(saved, path);
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_is_rejected_before_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("drawing.bmp");

        let err = export_snapshot(&path, &small_canvas(), &[]).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }
}
