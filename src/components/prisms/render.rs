use web_sys::CanvasRenderingContext2d;

use crate::animation::{Prism, PrismField, with_alpha};
use crate::components::threads::{Layer, trace};

const LINKS: [Layer; 2] = [
	Layer {
		width: 2.2,
		hue_shift: 0.0,
		lightness: 75.0,
		alpha: 0.4,
		glow: true,
	},
	Layer {
		width: 1.1,
		hue_shift: 0.0,
		lightness: 95.0,
		alpha: 0.9,
		glow: false,
	},
];

pub fn render(field: &PrismField, now: f64, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_global_composite_operation("lighter");
	for thread in field.threads(now) {
		trace(ctx, &thread, &LINKS);
	}
	let _ = ctx.set_global_composite_operation("source-over");

	for (i, prism) in field.prisms().iter().enumerate() {
		draw_prism(prism, field.hovered() == Some(i), ctx);
	}
}

fn draw_prism(prism: &Prism, hovered: bool, ctx: &CanvasRenderingContext2d) {
	let (w, h) = prism.half_extents();
	if w <= 0.0 {
		return;
	}
	let color = prism.seed.color.as_str();
	ctx.save();
	let _ = ctx.translate(prism.position.x, prism.position.y);

	ctx.begin_path();
	ctx.rect(-w, -h, w * 2.0, h * 2.0);
	ctx.set_fill_style_str(&with_alpha(color, 0.1));
	ctx.fill();
	ctx.set_line_width(2.0);
	ctx.set_stroke_style_str(&with_alpha(color, 0.8));
	ctx.set_shadow_blur(8.0);
	ctx.set_shadow_color(&with_alpha(color, 0.53));
	ctx.stroke();
	ctx.set_shadow_blur(0.0);

	ctx.set_fill_style_str("#e5e7eb");
	ctx.set_font(&format!("{}px Bangers, system-ui, sans-serif", prism.font_px()));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&prism.seed.label, 0.0, 0.0);

	if hovered {
		ctx.set_line_width(2.5);
		ctx.set_stroke_style_str("rgba(255,255,255,0.8)");
		ctx.stroke_rect(-w - 6.0, -h - 6.0, w * 2.0 + 12.0, h * 2.0 + 12.0);
	}
	ctx.restore();
}
