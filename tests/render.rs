use cairo::{Context, ImageSurface};
use sketchpad::config::ColorSpec;
use sketchpad::draw::{CanvasSettings, render_canvas};
use sketchpad::input::{PenType, Tool};
use sketchpad::{Config, InputEvent, Sketchpad};
use std::num::NonZeroU32;

fn render_to_surface(pad: &Sketchpad) -> ImageSurface {
    let settings: &CanvasSettings = pad.canvas_settings();
    let surface = ImageSurface::create(
        cairo::Format::ARgb32,
        settings.width as i32,
        settings.height as i32,
    )
    .unwrap();
    let ctx = Context::new(&surface).unwrap();
    render_canvas(&ctx, settings, pad.primitives()).unwrap();
    drop(ctx);
    surface
}

/// Returns (r, g, b) of an opaque pixel.
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    // ARgb32 is stored as native-endian u32, i.e. BGRA on little-endian hosts
    let value = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

fn small_pad() -> Sketchpad {
    let config = Config::from_toml_str("[canvas]\nwidth = 100\nheight = 80\n").unwrap();
    Sketchpad::new(&config)
}

fn stroke(pad: &mut Sketchpad, points: &[(i32, i32)]) {
    let mut events = vec![InputEvent::DragStart];
    events.extend(points.iter().map(|&(x, y)| InputEvent::DragSample { x, y }));
    events.push(InputEvent::DragEnd);
    pad.replay(events).unwrap();
}

#[test]
fn empty_canvas_renders_background() {
    let pad = small_pad();
    let mut surface = render_to_surface(&pad);
    assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255));
    assert_eq!(pixel(&mut surface, 99, 79), (255, 255, 255));
}

#[test]
fn square_stamp_paints_in_selected_color() {
    let mut pad = small_pad();
    pad.replay([
        InputEvent::ColorSelected {
            color: ColorSpec::from("blue"),
        },
        InputEvent::SizeSelected {
            size: NonZeroU32::new(6).unwrap(),
        },
        InputEvent::PenTypeSelected {
            pen_type: PenType::Square,
        },
    ])
    .unwrap();
    stroke(&mut pad, &[(10, 10), (40, 40)]);

    let mut surface = render_to_surface(&pad);
    assert_eq!(pixel(&mut surface, 40, 40), (0, 0, 255));
    assert_eq!(pixel(&mut surface, 10, 10), (255, 255, 255));
}

#[test]
fn eraser_stroke_restores_background() {
    let mut pad = small_pad();
    pad.handle(InputEvent::SizeSelected {
        size: NonZeroU32::new(8).unwrap(),
    })
    .unwrap();
    stroke(&mut pad, &[(10, 40), (90, 40)]);
    assert_eq!(pixel(&mut render_to_surface(&pad), 50, 40), (0, 0, 0));

    pad.handle(InputEvent::ToolSelected { tool: Tool::Eraser })
        .unwrap();
    pad.handle(InputEvent::SizeSelected {
        size: NonZeroU32::new(20).unwrap(),
    })
    .unwrap();
    stroke(&mut pad, &[(10, 40), (90, 40)]);

    assert_eq!(pixel(&mut render_to_surface(&pad), 50, 40), (255, 255, 255));
    assert_eq!(pad.primitives().len(), 2);
}

#[test]
fn undo_removes_last_painted_shape() {
    let mut pad = small_pad();
    pad.handle(InputEvent::PenTypeSelected {
        pen_type: PenType::Round,
    })
    .unwrap();
    pad.handle(InputEvent::SizeSelected {
        size: NonZeroU32::new(5).unwrap(),
    })
    .unwrap();
    stroke(&mut pad, &[(0, 0), (20, 20), (60, 60)]);
    assert_eq!(pixel(&mut render_to_surface(&pad), 60, 60), (0, 0, 0));

    pad.handle(InputEvent::Undo).unwrap();
    let mut surface = render_to_surface(&pad);
    assert_eq!(pixel(&mut surface, 60, 60), (255, 255, 255));
    assert_eq!(pixel(&mut surface, 20, 20), (0, 0, 0));
}

#[test]
fn clear_leaves_only_background() {
    let mut pad = small_pad();
    stroke(&mut pad, &[(0, 0), (99, 79)]);
    pad.handle(InputEvent::Clear).unwrap();

    let mut surface = render_to_surface(&pad);
    assert_eq!(pixel(&mut surface, 50, 40), (255, 255, 255));
}
