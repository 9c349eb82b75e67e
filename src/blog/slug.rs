/// The ECMAScript whitespace and line terminator set: Unicode `Zs` plus
/// tab, the line breaks, and the byte order mark. Unlike
/// [`char::is_whitespace`] it excludes U+0085 and includes U+FEFF.
fn is_space(c: char) -> bool {
	matches!(
		c,
		'\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
			| '\u{2000}'..='\u{200A}'
			| '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
	)
}

/// URL-safe identity for a label.
///
/// Lowercases, drops everything but ASCII letters, digits, whitespace and
/// hyphens, trims, then turns each whitespace run into one hyphen. Every
/// slug in the blog (post, category, tag) goes through here.
pub fn slugify(s: &str) -> String {
	let kept: String = s
		.to_lowercase()
		.chars()
		.filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_space(c) || c == '-')
		.collect();
	kept.split(is_space).filter(|w| !w.is_empty()).collect::<Vec<_>>().join("-")
}

/// Human label back from a slug; hyphens become spaces.
pub fn unslug(slug: &str) -> String {
	slug.replace('-', " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugifies_labels() {
		assert_eq!(slugify("AI & Machine Learning"), "ai-machine-learning");
		assert_eq!(slugify("  Hello,   World!  "), "hello-world");
		assert_eq!(slugify("Rust 2024 - Edition"), "rust-2024---edition");
		assert_eq!(slugify("Café Über"), "caf-ber");
		assert_eq!(slugify(""), "");
	}

	#[test]
	fn whitespace_follows_the_web_set() {
		assert_eq!(slugify("a\u{FEFF}b"), "a-b");
		assert_eq!(slugify("a\u{85}b"), "ab");
		assert_eq!(slugify("\u{3000}wide\u{A0}gap\u{2028}"), "wide-gap");
	}

	#[test]
	fn unslug_restores_spaces() {
		assert_eq!(unslug("ai-ml"), "ai ml");
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod props {
		use proptest::prelude::*;

		use super::*;

		proptest! {
			#[test]
			fn slugify_is_idempotent(s in any::<String>()) {
				let once = slugify(&s);
				prop_assert_eq!(slugify(&once), once.clone());
				prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
			}
		}
	}
}
