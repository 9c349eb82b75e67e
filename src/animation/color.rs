/// Rewrites a CSS color with a new alpha.
///
/// Understands `rgba(...)`, `rgb(...)` and `#rrggbb`; anything else (named
/// colors, `hsl`) is returned unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
	let color = color.trim();
	let channels = color
		.strip_prefix("rgba(")
		.or_else(|| color.strip_prefix("rgb("))
		.and_then(|rest| rest.strip_suffix(')'));
	if let Some(inner) = channels {
		let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
		if parts.len() >= 3 {
			return format!("rgba({},{},{},{})", parts[0], parts[1], parts[2], alpha);
		}
		return color.to_string();
	}
	let hex = color.trim_start_matches('#');
	if hex.len() >= 6 && hex.is_ascii() {
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
		if let (Some(r), Some(g), Some(b)) = (channel(0), channel(2), channel(4)) {
			return format!("rgba({r},{g},{b},{alpha})");
		}
	}
	color.to_string()
}

/// `hsla()` string with the hue wrapped into `0..360`.
pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> String {
	format!(
		"hsla({:.1}, {}%, {}%, {})",
		hue.rem_euclid(360.0),
		saturation,
		lightness,
		alpha
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replaces_alpha_of_rgb_forms() {
		assert_eq!(with_alpha("rgba(1, 2, 3, 1)", 0.5), "rgba(1,2,3,0.5)");
		assert_eq!(with_alpha("rgb(10,20,30)", 0.25), "rgba(10,20,30,0.25)");
	}

	#[test]
	fn converts_hex() {
		assert_eq!(with_alpha("#5bb6ff", 0.18), "rgba(91,182,255,0.18)");
		assert_eq!(with_alpha(" e5e7eb ", 0.9), "rgba(229,231,235,0.9)");
	}

	#[test]
	fn passes_unknown_forms_through() {
		assert_eq!(with_alpha("tomato", 0.3), "tomato");
	}

	#[test]
	fn wraps_hue() {
		assert_eq!(hsla(370.0, 100.0, 65.0, 0.4), "hsla(10.0, 100%, 65%, 0.4)");
	}
}
