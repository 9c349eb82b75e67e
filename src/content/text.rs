//! Small text helpers for card copy.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Body text with its trailing `Key Skills Built:` list split off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeySkills {
	/// Text before the marker, trimmed.
	pub body: String,
	/// Comma-separated entries after the marker.
	pub skills: Vec<String>,
}

static MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
	Regex::new(r"(?i)key\s*skills\s*built:\s*")
		.inspect_err(|e| log::warn!("key skills marker did not compile: {e}"))
		.ok()
});

/// Splits `text` at the first `Key Skills Built:` marker.
pub fn split_key_skills(text: &str) -> KeySkills {
	let text = text.trim();
	let Some(found) = MARKER.as_ref().and_then(|re| re.find(text)) else {
		return KeySkills {
			body: text.to_string(),
			skills: Vec::new(),
		};
	};
	let skills = text[found.end()..]
		.replace('\n', " ")
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect();
	KeySkills {
		body: text[..found.start()].trim().to_string(),
		skills,
	}
}

/// Text up to and including the first `.` followed by whitespace.
pub fn first_sentence(text: &str) -> &str {
	let mut chars = text.char_indices().peekable();
	while let Some((i, c)) = chars.next() {
		if c == '.' && chars.peek().is_some_and(|(_, n)| n.is_whitespace()) {
			return &text[..=i];
		}
	}
	text
}

/// First blank-line separated paragraph.
pub fn first_paragraph(text: &str) -> &str {
	text.split("\n\n").next().unwrap_or(text)
}

/// Spaced hyphens as en dashes, spaced double hyphens as em dashes.
pub fn typeset_dashes(text: &str) -> String {
	text.replace(" -- ", " \u{2014} ").replace(" - ", " \u{2013} ")
}

/// Up to two initials of `name`, or a bullet when it has none.
pub fn initials(name: &str) -> String {
	let letters: String = name
		.split_whitespace()
		.take(2)
		.filter_map(|w| w.chars().next())
		.flat_map(char::to_uppercase)
		.collect();
	if letters.is_empty() { "\u{2022}".into() } else { letters }
}

/// Shows at most `limit` chips and the count of the rest.
pub fn chip_overflow(items: &[String], limit: usize) -> (&[String], usize) {
	let shown = &items[..items.len().min(limit)];
	(shown, items.len() - shown.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_key_skills() {
		let split = split_key_skills("Built a thing.\n\nKey Skills Built:  CNNs, feature extraction,\naugmentation, ");
		assert_eq!(split.body, "Built a thing.");
		assert_eq!(split.skills, ["CNNs", "feature extraction", "augmentation"]);

		let loose = split_key_skills("Did work. key skillsbuilt: a");
		assert_eq!(loose.skills, ["a"]);

		let shouted = split_key_skills("Shipped it.\tKEY\nSKILLS  BUILT:\tRust,WASM");
		assert_eq!(shouted.body, "Shipped it.");
		assert_eq!(shouted.skills, ["Rust", "WASM"]);

		let none = split_key_skills("  No marker here.  ");
		assert_eq!(none.body, "No marker here.");
		assert!(none.skills.is_empty());
	}

	#[test]
	fn first_sentence_needs_trailing_space() {
		assert_eq!(first_sentence("One. Two."), "One.");
		assert_eq!(first_sentence("v1.2 shipped. Then"), "v1.2 shipped.");
		assert_eq!(first_sentence("No stop"), "No stop");
	}

	#[test]
	fn dashes_and_initials() {
		assert_eq!(typeset_dashes("a - b -- c well-known"), "a \u{2013} b \u{2014} c well-known");
		assert_eq!(initials("Stanford Deliberative Democracy Lab"), "SD");
		assert_eq!(initials("  "), "\u{2022}");
		assert_eq!(first_paragraph("a\n\nb"), "a");
	}

	#[test]
	fn overflow_counts_hidden_chips() {
		let items: Vec<String> = (0..7).map(|i| i.to_string()).collect();
		let (shown, more) = chip_overflow(&items, 5);
		assert_eq!(shown.len(), 5);
		assert_eq!(more, 2);
		assert_eq!(chip_overflow(&items[..2], 5).1, 0);
	}
}
