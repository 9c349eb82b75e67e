/// Fast start, soft landing. `t` is clamped to `0..=1`.
pub fn ease_out_cubic(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	1.0 - (1.0 - t).powi(3)
}

/// One coordinate of a cubic Bezier at parameter `t`.
pub fn cubic_at(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
	let it = 1.0 - t;
	it * it * it * p0 + 3.0 * it * it * t * p1 + 3.0 * it * t * t * p2 + t * t * t * p3
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn easing_hits_endpoints() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
		assert_eq!(ease_out_cubic(2.0), 1.0);
		assert!(ease_out_cubic(0.5) > 0.5);
	}

	#[test]
	fn cubic_passes_through_endpoints() {
		assert_eq!(cubic_at(1.0, 5.0, -3.0, 7.0, 0.0), 1.0);
		assert_eq!(cubic_at(1.0, 5.0, -3.0, 7.0, 1.0), 7.0);
	}
}
