//! Cairo-based rendering functions for primitives.
//!
//! Interactive renderers may ignore the returned errors and simply redraw on
//! the next frame; snapshot export propagates them.

use super::canvas::CanvasSettings;
use super::color::Color;
use super::primitive::Primitive;

/// Outline width for filled stamps.
const STAMP_OUTLINE_WIDTH: f64 = 1.0;

/// Paints the whole surface with the canvas background color.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    set_source(ctx, color);
    ctx.paint()?;
    ctx.restore()
}

/// Renders the background followed by every primitive in paint order.
pub fn render_canvas(
    ctx: &cairo::Context,
    settings: &CanvasSettings,
    primitives: &[Primitive],
) -> Result<(), cairo::Error> {
    render_background(ctx, settings.background)?;
    render_primitives(ctx, primitives)
}

/// Renders all primitives in order (first primitive = bottom layer).
pub fn render_primitives(ctx: &cairo::Context, primitives: &[Primitive]) -> Result<(), cairo::Error> {
    for primitive in primitives {
        render_primitive(ctx, primitive)?;
    }
    Ok(())
}

/// Renders a single primitive.
pub fn render_primitive(ctx: &cairo::Context, primitive: &Primitive) -> Result<(), cairo::Error> {
    match primitive {
        Primitive::LineSegment {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => render_line(ctx, *x1, *y1, *x2, *y2, *color, *width as f64),
        Primitive::FilledOval {
            x1,
            y1,
            x2,
            y2,
            color,
        } => render_oval(ctx, *x1, *y1, *x2, *y2, *color),
        Primitive::FilledRect {
            x1,
            y1,
            x2,
            y2,
            color,
        } => {
            let (x, w) = span(*x1, *x2);
            let (y, h) = span(*y1, *y2);
            ctx.rectangle(x, y, w, h);
            fill_and_outline(ctx, *color)
        }
        Primitive::FilledPolygon { points, color } => {
            let Some((&(x0, y0), rest)) = points.split_first() else {
                return Ok(());
            };
            ctx.move_to(x0 as f64, y0 as f64);
            for &(x, y) in rest {
                ctx.line_to(x as f64, y as f64);
            }
            ctx.close_path();
            fill_and_outline(ctx, *color)
        }
    }
}

/// Render a straight segment with round caps so consecutive segments join smoothly
fn render_line(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    set_source(ctx, color);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    ctx.stroke()
}

/// Render an ellipse inscribed in the box using Cairo's arc with scaling
fn render_oval(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) -> Result<(), cairo::Error> {
    let (x, w) = span(x1, x2);
    let (y, h) = span(y1, y2);
    if w == 0.0 || h == 0.0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.translate(x + w / 2.0, y + h / 2.0);
    ctx.scale(w / 2.0, h / 2.0);
    ctx.new_sub_path();
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore()?;

    fill_and_outline(ctx, color)
}

/// Fills the current path and strokes its outline in the same color.
fn fill_and_outline(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    set_source(ctx, color);
    ctx.fill_preserve()?;
    ctx.set_line_width(STAMP_OUTLINE_WIDTH);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.stroke()
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

/// Normalizes a pair of edges into (origin, extent).
fn span(a: i32, b: i32) -> (f64, f64) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo as f64, hi as f64 - lo as f64)
}
