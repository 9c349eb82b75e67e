use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::animation::{WebField, with_alpha};

/// Colors read from the theme once per mount.
#[derive(Clone, Debug)]
pub struct WebPalette {
	pub line: String,
	pub node: String,
	pub ring: String,
}

pub fn render(field: &WebField, palette: &WebPalette, reduced: bool, ctx: &CanvasRenderingContext2d) {
	if reduced {
		draw_dots(field, &palette.node, 0.6, 1.2, ctx);
		return;
	}

	for strand in field.strands() {
		ctx.set_stroke_style_str(&with_alpha(&palette.line, strand.alpha));
		ctx.set_line_width(strand.width);
		ctx.begin_path();
		ctx.move_to(strand.from.x, strand.from.y);
		ctx.line_to(strand.to.x, strand.to.y);
		ctx.stroke();
	}

	draw_dots(field, &palette.node, 0.9, 1.4, ctx);

	ctx.set_line_width(1.5);
	for ring in field.rings() {
		ctx.set_stroke_style_str(&with_alpha(&palette.ring, ring.alpha));
		ctx.begin_path();
		let _ = ctx.arc(ring.center.x, ring.center.y, ring.radius, 0.0, TAU);
		ctx.stroke();
	}
}

fn draw_dots(field: &WebField, color: &str, alpha: f64, radius: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&with_alpha(color, alpha));
	for node in field.nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.position.x, node.position.y, radius, 0.0, TAU);
		ctx.fill();
	}
}
