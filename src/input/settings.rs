//! Tool settings and the controller that mutates them.

use super::tool::{PenType, Tool};
use crate::draw::{BLACK, Color};
use crate::util;
use log::{debug, warn};
use std::num::NonZeroU32;

/// Default brush size in pixels.
pub const DEFAULT_SIZE: NonZeroU32 = NonZeroU32::new(2).unwrap();

/// Current drawing parameters, read by the engine on every drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    tool: Tool,
    color: Color,
    size: NonZeroU32,
    pen_type: PenType,
    /// Pen color remembered while the eraser is active
    saved_color: Option<Color>,
}

impl Default for ToolSettings {
    /// Pen, black, size 2, line.
    fn default() -> Self {
        Self::new(BLACK, DEFAULT_SIZE, PenType::Line)
    }
}

impl ToolSettings {
    /// Creates pen settings with the given defaults and no saved color.
    pub fn new(color: Color, size: NonZeroU32, pen_type: PenType) -> Self {
        Self {
            tool: Tool::Pen,
            color,
            size,
            pen_type,
            saved_color: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> NonZeroU32 {
        self.size
    }

    pub fn pen_type(&self) -> PenType {
        self.pen_type
    }

    /// Color that [`ToolController::select_pen`] will restore, if any.
    pub fn saved_color(&self) -> Option<Color> {
        self.saved_color
    }
}

/// Applies setting changes, including the eraser's color save/restore.
///
/// The eraser paints with the canvas background, so the controller needs to
/// know that color; it never changes after construction.
#[derive(Debug, Clone)]
pub struct ToolController {
    settings: ToolSettings,
    background: Color,
}

impl ToolController {
    pub fn new(settings: ToolSettings, background: Color) -> Self {
        Self {
            settings,
            background,
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Dispatches to [`select_pen`](Self::select_pen) or [`select_eraser`](Self::select_eraser).
    pub fn select_tool(&mut self, tool: Tool) {
        match tool {
            Tool::Pen => self.select_pen(),
            Tool::Eraser => self.select_eraser(),
        }
    }

    /// Switches to the pen, restoring the color that was active before the eraser.
    pub fn select_pen(&mut self) {
        self.settings.tool = Tool::Pen;
        if let Some(saved) = self.settings.saved_color.take() {
            self.settings.color = saved;
        }
        debug!(
            "Pen selected, color {}",
            util::color_to_name(&self.settings.color)
        );
    }

    /// Switches to the eraser, remembering the current color for the next pen selection.
    ///
    /// Selecting the eraser again while erasing keeps the remembered pen color.
    pub fn select_eraser(&mut self) {
        if self.settings.tool != Tool::Eraser {
            self.settings.saved_color = Some(self.settings.color);
        }
        self.settings.tool = Tool::Eraser;
        self.settings.color = self.background;
        debug!("Eraser selected");
    }

    /// Sets the brush size. Presets are a UI concern; any positive size is accepted.
    pub fn select_size(&mut self, size: NonZeroU32) {
        self.settings.size = size;
        debug!("Brush size set to {size}");
    }

    /// Sets the drawing color directly.
    ///
    /// Honored even while the eraser is active, in which case the eraser paints
    /// this color until a tool is selected again.
    pub fn select_color(&mut self, color: Color) {
        if self.settings.tool == Tool::Eraser {
            warn!("Color changed while the eraser is active; eraser no longer matches background");
        }
        self.settings.color = color;
        debug!("Color set to {}", util::color_to_name(&color));
    }

    pub fn select_pen_type(&mut self, pen_type: PenType) {
        self.settings.pen_type = pen_type;
        debug!("Pen type set to {pen_type}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED, WHITE};

    fn controller() -> ToolController {
        ToolController::new(ToolSettings::default(), WHITE)
    }

    fn size(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn defaults_match_startup_state() {
        let settings = ToolSettings::default();
        assert_eq!(settings.tool(), Tool::Pen);
        assert_eq!(settings.color(), BLACK);
        assert_eq!(settings.size().get(), 2);
        assert_eq!(settings.pen_type(), PenType::Line);
        assert_eq!(settings.saved_color(), None);
    }

    #[test]
    fn eraser_then_pen_restores_previous_color() {
        let mut controller = controller();
        controller.select_color(RED);

        controller.select_eraser();
        assert_eq!(controller.settings().tool(), Tool::Eraser);
        assert_eq!(controller.settings().color(), WHITE);
        assert_eq!(controller.settings().saved_color(), Some(RED));

        controller.select_pen();
        assert_eq!(controller.settings().tool(), Tool::Pen);
        assert_eq!(controller.settings().color(), RED);
        assert_eq!(controller.settings().saved_color(), None);
    }

    #[test]
    fn pen_without_eraser_keeps_color() {
        let mut controller = controller();
        controller.select_color(BLUE);
        controller.select_pen();
        controller.select_pen();
        assert_eq!(controller.settings().color(), BLUE);
        assert_eq!(controller.settings().tool(), Tool::Pen);
    }

    #[test]
    fn repeated_eraser_selection_keeps_saved_color() {
        let mut controller = controller();
        controller.select_color(RED);
        controller.select_eraser();
        let once = *controller.settings();
        controller.select_eraser();
        assert_eq!(*controller.settings(), once);

        controller.select_pen();
        assert_eq!(controller.settings().color(), RED);
    }

    #[test]
    fn eraser_tracks_configured_background() {
        let dark = Color::new(0.1, 0.1, 0.1, 1.0);
        let mut controller = ToolController::new(ToolSettings::default(), dark);
        controller.select_tool(Tool::Eraser);
        assert_eq!(controller.settings().color(), dark);
        assert_eq!(controller.background(), dark);
    }

    #[test]
    fn color_change_while_erasing_is_honored() {
        let mut controller = controller();
        controller.select_eraser();
        controller.select_color(BLUE);
        assert_eq!(controller.settings().color(), BLUE);
        assert_eq!(controller.settings().tool(), Tool::Eraser);

        controller.select_pen();
        assert_eq!(controller.settings().color(), BLACK);
    }

    #[test]
    fn size_and_pen_type_are_plain_assignments() {
        let mut controller = controller();
        controller.select_size(size(8));
        controller.select_size(size(8));
        controller.select_pen_type(PenType::Arrow);
        assert_eq!(controller.settings().size(), size(8));
        assert_eq!(controller.settings().pen_type(), PenType::Arrow);
    }
}
