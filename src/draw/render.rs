//! Cairo-based painting of render primitives.

use super::color::Color;
use super::primitive::RenderPrimitive;
use super::store::ShapeStore;

/// Pen settings applied to every stroke of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// Fills the whole canvas with the board background.
///
/// Should be called before painting shapes so each redraw starts clean.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // A failed paint leaves the previous frame visible
}

/// Paints every primitive in order (first = bottom layer).
pub fn draw_all<'a, I>(ctx: &cairo::Context, primitives: I, style: StrokeStyle)
where
    I: IntoIterator<Item = &'a RenderPrimitive>,
{
    for primitive in primitives {
        render_primitive(ctx, primitive, style);
    }
}

/// Paints the full contents of a shape store.
pub fn render_store(ctx: &cairo::Context, store: &ShapeStore, style: StrokeStyle) {
    draw_all(ctx, store.iter().map(|shape| shape.primitive()), style);
}

/// Paints a single primitive as open polylines with round caps.
pub fn render_primitive(ctx: &cairo::Context, primitive: &RenderPrimitive, style: StrokeStyle) {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    for stroke in primitive.strokes() {
        let mut points = stroke.iter();
        let Some(&(x, y)) = points.next() else {
            continue;
        };
        ctx.move_to(x, y);
        for &(x, y) in points {
            ctx.line_to(x, y);
        }
        let _ = ctx.stroke();
    }
}
