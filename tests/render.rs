use cairo::{Context, ImageSurface};
use roughboard::draw::{self, Coords, RoughGenerator, ShapeKind, ShapeStore, StrokeStyle};
use roughboard::draw::color;
use roughboard::input::{EditorState, PointerEvent, Tool};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Alpha of the pixel at (x, y) in an ARGB32 surface.
fn alpha_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    // Native-endian ARGB32: alpha is the high byte of each u32
    let offset = y * stride + x * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (pixel >> 24) as u8
}

fn pen() -> StrokeStyle {
    StrokeStyle {
        color: color::BLACK,
        width: 3.0,
    }
}

#[test]
fn empty_store_paints_nothing() {
    let (mut surface, ctx) = surface_with_context(64, 64);
    draw::render_store(&ctx, &ShapeStore::new(), pen());
    drop(ctx);
    assert!(!surface_has_pixels(&mut surface));
}

#[test]
fn background_fills_canvas() {
    let (mut surface, ctx) = surface_with_context(32, 32);
    draw::render_background(&ctx, color::WHITE);
    drop(ctx);
    assert_eq!(alpha_at(&mut surface, 0, 0), 255);
    assert_eq!(alpha_at(&mut surface, 31, 31), 255);
}

#[test]
fn precise_rectangle_strokes_its_outline_only() {
    let renderer = RoughGenerator::precise();
    let mut store = ShapeStore::new();
    store.push(
        ShapeKind::Rectangle,
        Coords::new(10.0, 10.0, 50.0, 40.0),
        &renderer,
    );

    let (mut surface, ctx) = surface_with_context(64, 64);
    draw::render_store(&ctx, &store, pen());
    drop(ctx);

    assert!(alpha_at(&mut surface, 30, 10) > 0, "top edge");
    assert!(alpha_at(&mut surface, 10, 25) > 0, "left edge");
    assert!(alpha_at(&mut surface, 50, 25) > 0, "right edge");
    assert_eq!(alpha_at(&mut surface, 30, 25), 0, "interior stays empty");
    assert_eq!(alpha_at(&mut surface, 60, 60), 0, "outside stays empty");
}

#[test]
fn editor_store_renders_after_drawing() {
    let mut editor = EditorState::with_defaults(RoughGenerator::default(), Tool::Segment, 0);
    for event in [
        PointerEvent::down(5.0, 5.0),
        PointerEvent::moved(90.0, 60.0),
        PointerEvent::up(90.0, 60.0),
    ] {
        editor.handle_event(event).unwrap();
    }
    assert!(editor.needs_redraw);

    let (mut surface, ctx) = surface_with_context(100, 100);
    draw::render_store(&ctx, editor.store(), pen());
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
