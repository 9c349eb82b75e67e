use web_sys::CanvasRenderingContext2d;

use crate::animation::{VerseField, hsla};
use crate::components::threads::glow_orb;

pub fn render(field: &VerseField, now: f64, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_global_composite_operation("lighter");

	for link in field.links(now) {
		ctx.begin_path();
		ctx.move_to(link.from.x, link.from.y);
		ctx.quadratic_curve_to(link.control.x, link.control.y, link.to.x, link.to.y);

		let glow = hsla(link.hue + 220.0, 100.0, 65.0, 0.28);
		ctx.set_line_width(3.0);
		ctx.set_stroke_style_str(&glow);
		ctx.set_shadow_blur(10.0);
		ctx.set_shadow_color(&glow);
		ctx.stroke();

		ctx.set_line_width(1.2);
		ctx.set_stroke_style_str(&hsla(link.hue, 100.0, 95.0, 0.9));
		ctx.set_shadow_blur(0.0);
		ctx.stroke();
	}

	for spark in field.sparks() {
		glow_orb(ctx, spark.position, 10.0, "rgba(220,240,255,0.8)", "rgba(220,240,255,0)");
	}

	for shard in field.shards(now) {
		let [a, b, c] = shard.corners;
		ctx.set_fill_style_str(&hsla(shard.hue, 100.0, 62.0, 0.35));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.line_to(c.x, c.y);
		ctx.close_path();
		ctx.fill();
	}

	let _ = ctx.set_global_composite_operation("source-over");
}
