//! `#exp=<id>` and `#project=<id>` fragments that open a card on load.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// A card that can be opened from the URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
	/// Experience timeline entry, `#exp=`.
	Experience,
	/// Project card, `#project=`.
	Project,
}

impl CardKind {
	fn key(self) -> &'static str {
		match self {
			Self::Experience => "exp",
			Self::Project => "project",
		}
	}

	/// Section anchor restored when the card closes.
	pub fn section(self) -> &'static str {
		match self {
			Self::Experience => "about",
			Self::Project => "projects",
		}
	}
}

/// Decoded id of the `kind` card named in `fragment`, if any.
pub fn opened_card(fragment: &str, kind: CardKind) -> Option<String> {
	let needle = format!("{}=", kind.key());
	let bare = fragment.strip_prefix('#').unwrap_or(fragment);
	let start = bare
		.match_indices(&needle)
		.map(|(i, _)| i)
		.find(|&i| i == 0 || matches!(bare.as_bytes()[i - 1], b'&' | b'?' | b'#'))?;
	let raw = bare[start + needle.len()..].split('&').next()?;
	if raw.is_empty() {
		return None;
	}
	Some(percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Fragment to write when `open` changes: the card link, or its section when closed.
pub fn card_fragment(kind: CardKind, open: Option<&str>) -> String {
	match open {
		Some(id) => format!("#{}={}", kind.key(), utf8_percent_encode(id, COMPONENT)),
		None => format!("#{}", kind.section()),
	}
}
