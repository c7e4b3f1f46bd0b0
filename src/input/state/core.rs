//! Session context dispatching events to the controller, engine and exporter.

use crate::config::Config;
use crate::draw::{CanvasSettings, DirtyTracker, Primitive};
use crate::export::{
    CreatedDirectories, ExportError, ExportSettings, FileSnapshotSaver, SnapshotSaver,
    ensure_directory_exists,
};
use crate::input::engine::DrawingEngine;
use crate::input::error::EventError;
use crate::input::events::InputEvent;
use crate::input::settings::{ToolController, ToolSettings};
use crate::util::Rect;
use log::{debug, error, info};
use std::fmt;
use std::path::{Path, PathBuf};

/// What handling an event produced, beyond state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State (possibly) changed; nothing else to report
    Handled,
    /// A snapshot was written to this path
    Exported(PathBuf),
}

/// Single owner of all drawing state for one canvas.
///
/// Events are handled one at a time, to completion, in the order they arrive.
/// The tool controller and the drawing engine never see each other directly:
/// the session passes the current settings to the engine on every drag sample.
pub struct Sketchpad {
    canvas_settings: CanvasSettings,
    controller: ToolController,
    engine: DrawingEngine,
    export_settings: ExportSettings,
    saver: Box<dyn SnapshotSaver>,
    dirty_tracker: DirtyTracker,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sketchpad")
            .field("canvas_settings", &self.canvas_settings)
            .field("settings", self.controller.settings())
            .field("primitives", &self.engine.snapshot().len())
            .field("dragging", &self.engine.is_dragging())
            .finish()
    }
}

impl Sketchpad {
    /// Creates a session from configuration, exporting to the filesystem.
    pub fn new(config: &Config) -> Self {
        Self::with_saver(config, Box::new(FileSnapshotSaver))
    }

    /// Creates a session that hands snapshots to a custom saver.
    pub fn with_saver(config: &Config, saver: Box<dyn SnapshotSaver>) -> Self {
        let canvas_settings = config.canvas_settings();
        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();

        Self {
            controller: ToolController::new(config.tool_settings(), canvas_settings.background),
            canvas_settings,
            engine: DrawingEngine::new(),
            export_settings: config.export_settings(),
            saver,
            dirty_tracker,
        }
    }

    /// Handles one event.
    ///
    /// # Errors
    /// - [`EventError::Input`] for a color that does not resolve; settings are unchanged
    /// - [`EventError::Export`] when a snapshot cannot be written; the canvas is unchanged
    pub fn handle(&mut self, event: InputEvent) -> Result<EventOutcome, EventError> {
        match event {
            InputEvent::DragStart => self.engine.on_drag_start(),
            InputEvent::DragSample { x, y } => {
                if let Some(primitive) = self.engine.on_drag_sample(x, y, self.controller.settings()) {
                    self.dirty_tracker.mark_primitive(primitive);
                }
            }
            InputEvent::DragEnd => self.engine.on_drag_end(),
            InputEvent::ToolSelected { tool } => self.controller.select_tool(tool),
            InputEvent::ColorSelected { color } => {
                let resolved = color.to_color()?;
                self.controller.select_color(resolved);
            }
            InputEvent::SizeSelected { size } => self.controller.select_size(size),
            InputEvent::PenTypeSelected { pen_type } => self.controller.select_pen_type(pen_type),
            InputEvent::Clear => self.clear(),
            InputEvent::Undo => self.undo(),
            InputEvent::ExportSnapshot { path } => {
                let saved = self.export(path.as_deref())?;
                return Ok(EventOutcome::Exported(saved));
            }
        }
        Ok(EventOutcome::Handled)
    }

    /// Handles events in order, stopping at the first failure.
    ///
    /// Returns the paths of every snapshot written.
    pub fn replay<I>(&mut self, events: I) -> Result<Vec<PathBuf>, EventError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut exported = Vec::new();
        for event in events {
            if let EventOutcome::Exported(path) = self.handle(event)? {
                exported.push(path);
            }
        }
        Ok(exported)
    }

    /// Removes every primitive.
    pub fn clear(&mut self) {
        debug!("Clearing {} primitives", self.engine.snapshot().len());
        self.engine.clear();
        self.dirty_tracker.mark_full();
    }

    /// Removes the most recent primitive, if any.
    pub fn undo(&mut self) {
        match self.engine.undo() {
            Some(removed) => {
                debug!("Undo removed {:?}", removed);
                self.dirty_tracker.mark_primitive(&removed);
            }
            None => debug!("Undo on empty canvas ignored"),
        }
    }

    /// Writes the current canvas to `path`, or to a generated name when `None`.
    ///
    /// A generated name may need the configured directory to be created; if the
    /// export then fails, the directories created for it are removed again.
    pub fn export(&self, path: Option<&Path>) -> Result<PathBuf, ExportError> {
        let (target, created) = match path {
            Some(path) => (path.to_path_buf(), CreatedDirectories::default()),
            None => (
                self.export_settings.generated_path(),
                ensure_directory_exists(&self.export_settings.directory)?,
            ),
        };

        match self
            .saver
            .save(&target, &self.canvas_settings, self.engine.snapshot())
        {
            Ok(saved) => {
                info!("Exported canvas to {}", saved.display());
                Ok(saved)
            }
            Err(err) => {
                error!("Export to {} failed: {err}", target.display());
                created.rollback();
                Err(err)
            }
        }
    }

    /// Primitives in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        self.engine.snapshot()
    }

    pub fn settings(&self) -> &ToolSettings {
        self.controller.settings()
    }

    pub fn canvas_settings(&self) -> &CanvasSettings {
        &self.canvas_settings
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Whether anything changed on the canvas since the last [`take_dirty_regions`](Self::take_dirty_regions).
    pub fn needs_redraw(&self) -> bool {
        self.dirty_tracker.is_dirty()
    }

    /// Drains the regions a renderer must repaint.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.canvas_settings.width.min(i32::MAX as u32) as i32;
        let height = self.canvas_settings.height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }
}
