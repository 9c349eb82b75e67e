//! Image candidate lists and the fallback walk over them.

/// Shipped cover used when nothing better loads.
pub const PLACEHOLDER_COVER: &str = "/images/projects/placeholder.svg";

const COVER_DIR: &str = "/images/projects";
const LOGO_DIR: &str = "/images/logos";

/// Ordered cover URLs for `key`, ending on the placeholder.
pub fn cover_candidates(key: Option<&str>) -> Vec<String> {
	let Some(key) = key.filter(|k| !k.is_empty()) else {
		return vec![PLACEHOLDER_COVER.to_string()];
	};
	let mut out: Vec<String> = ["webp", "jpg", "jpeg", "png"]
		.iter()
		.map(|ext| format!("{COVER_DIR}/{key}.{ext}"))
		.collect();
	out.push(PLACEHOLDER_COVER.to_string());
	out
}

/// Ordered logo URLs for `key`; empty when there is no logo.
pub fn logo_candidates(key: Option<&str>) -> Vec<String> {
	let Some(key) = key.filter(|k| !k.is_empty()) else {
		return Vec::new();
	};
	["webp", "png", "jpg", "jpeg"]
		.iter()
		.map(|ext| format!("{LOGO_DIR}/{key}.{ext}"))
		.collect()
}

/// Walks image candidates, one step per load error.
///
/// Never advances past the last candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackChain {
	candidates: Vec<String>,
	index: usize,
}

impl FallbackChain {
	/// Chain starting at the first candidate.
	pub fn new(candidates: Vec<String>) -> Self {
		Self { candidates, index: 0 }
	}

	/// URL to show now; `None` for an empty chain.
	pub fn current(&self) -> Option<&str> {
		self.candidates.get(self.index).map(String::as_str)
	}

	/// Moves to the next candidate. Returns whether the URL changed.
	pub fn advance(&mut self) -> bool {
		if self.index + 1 < self.candidates.len() {
			self.index += 1;
			true
		} else {
			false
		}
	}

	/// Whether the chain sits on its last candidate.
	pub fn is_last(&self) -> bool {
		self.index + 1 >= self.candidates.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cover_chain_ends_on_placeholder_and_stays() {
		let mut chain = FallbackChain::new(cover_candidates(Some("MARS")));
		assert_eq!(chain.current(), Some("/images/projects/MARS.webp"));
		let mut moves = 0;
		while chain.advance() {
			moves += 1;
		}
		assert_eq!(moves, 4);
		assert_eq!(chain.current(), Some(PLACEHOLDER_COVER));
		assert!(!chain.advance());
		assert_eq!(chain.current(), Some(PLACEHOLDER_COVER));
	}

	#[test]
	fn missing_keys() {
		assert_eq!(cover_candidates(None), [PLACEHOLDER_COVER]);
		assert_eq!(cover_candidates(Some("")), [PLACEHOLDER_COVER]);
		assert!(logo_candidates(None).is_empty());
		let empty = FallbackChain::new(Vec::new());
		assert_eq!(empty.current(), None);
		assert!(empty.is_last());
	}

	#[test]
	fn logos_try_webp_first() {
		let logos = logo_candidates(Some("mlt"));
		assert_eq!(logos.first().map(String::as_str), Some("/images/logos/mlt.webp"));
		assert_eq!(logos.len(), 4);
	}
}
