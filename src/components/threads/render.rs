use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::animation::{Thread, hsla};
use crate::geometry::Point;

/// One stroke pass over a curve.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layer {
	pub width: f64,
	pub hue_shift: f64,
	pub lightness: f64,
	pub alpha: f64,
	pub glow: bool,
}

impl Layer {
	const fn glow(width: f64, hue_shift: f64, lightness: f64, alpha: f64) -> Self {
		Self {
			width,
			hue_shift,
			lightness,
			alpha,
			glow: true,
		}
	}
}

/// Triadic glow under a bright core.
const WEAVE: [Layer; 4] = [
	Layer::glow(6.0, 260.0, 65.0, 0.42),
	Layer::glow(4.0, 160.0, 60.0, 0.32),
	Layer::glow(3.0, 40.0, 64.0, 0.28),
	Layer {
		width: 1.4,
		hue_shift: 0.0,
		lightness: 95.0,
		alpha: 0.95,
		glow: false,
	},
];

/// Strokes `thread` once per layer with additive blending.
pub(crate) fn trace(ctx: &CanvasRenderingContext2d, thread: &Thread, layers: &[Layer]) {
	ctx.begin_path();
	ctx.move_to(thread.from.x, thread.from.y);
	ctx.bezier_curve_to(thread.c1.x, thread.c1.y, thread.c2.x, thread.c2.y, thread.to.x, thread.to.y);
	for layer in layers {
		let color = hsla(thread.hue + layer.hue_shift, 100.0, layer.lightness, layer.alpha);
		ctx.set_line_width(layer.width);
		ctx.set_stroke_style_str(&color);
		if layer.glow {
			ctx.set_shadow_blur(layer.width * 1.25);
			ctx.set_shadow_color(&color);
		} else {
			ctx.set_shadow_blur(0.0);
		}
		ctx.stroke();
	}
	ctx.set_shadow_blur(0.0);
}

/// Soft radial glow fading from `inner` to transparent.
pub(crate) fn glow_orb(ctx: &CanvasRenderingContext2d, at: Point, radius: f64, inner: &str, outer: &str) {
	let Ok(gradient) = ctx.create_radial_gradient(at.x, at.y, 0.0, at.x, at.y, radius) else {
		return;
	};
	if gradient.add_color_stop(0.0, inner).is_err() || gradient.add_color_stop(1.0, outer).is_err() {
		return;
	}
	ctx.set_fill_style_canvas_gradient(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, radius, 0.0, TAU);
	ctx.fill();
}

pub fn render(anchors: &[Point], threads: &[Thread], ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_global_composite_operation("lighter");
	for &anchor in anchors {
		glow_orb(ctx, anchor, 12.0, "rgba(160,200,255,0.75)", "rgba(160,200,255,0)");
	}
	for thread in threads {
		trace(ctx, thread, &WEAVE);
		for &orb in &thread.orbs {
			glow_orb(
				ctx,
				orb,
				20.0,
				&hsla(thread.hue, 100.0, 80.0, 0.95),
				&hsla(thread.hue, 100.0, 80.0, 0.0),
			);
		}
	}
	let _ = ctx.set_global_composite_operation("source-over");
}
