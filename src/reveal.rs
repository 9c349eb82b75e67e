//! One-shot entrance reveals, staggered sequencing, and section tracking.

use crate::config::RevealConfig;

/// Hands out cascading delays to blocks revealed within one scope.
///
/// A scope is a plain value owned by whoever provides it (the page provides
/// one per mount), so counters never leak across page loads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealSequencer {
	config: RevealConfig,
	issued: u32,
}

impl RevealSequencer {
	/// A fresh scope.
	pub fn new(config: RevealConfig) -> Self {
		Self {
			config: config.validated(),
			issued: 0,
		}
	}

	/// Delay for the next reveal: `min(n * interval, max)`.
	pub fn next_delay(&mut self) -> u32 {
		let delay = self
			.issued
			.saturating_mul(self.config.interval_ms)
			.min(self.config.max_delay_ms);
		self.issued = self.issued.saturating_add(1);
		delay
	}

	/// Reveals handed out so far.
	pub fn issued(&self) -> u32 {
		self.issued
	}

	/// Starts the scope over.
	pub fn reset(&mut self) {
		self.issued = 0;
	}

	/// Threshold configured for this scope.
	pub fn threshold(&self) -> f64 {
		self.config.threshold
	}
}

/// Per-block reveal state. Fires once; later visibility changes are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
	delay_ms: Option<u32>,
}

impl RevealLatch {
	/// Feeds a visibility ratio. Returns the sequence delay the first time
	/// the ratio reaches the scope's threshold, `None` otherwise.
	pub fn observe(&mut self, ratio: f64, seq: &mut RevealSequencer) -> Option<u32> {
		if self.delay_ms.is_some() || ratio < seq.threshold() {
			return None;
		}
		let delay = seq.next_delay();
		self.delay_ms = Some(delay);
		Some(delay)
	}

	/// Whether the block has been revealed.
	pub fn is_revealed(&self) -> bool {
		self.delay_ms.is_some()
	}

	/// Delay assigned at reveal time.
	pub fn delay_ms(&self) -> Option<u32> {
		self.delay_ms
	}
}

/// Entrance delay for the `index`th entry of a list: `min(index * step, cap)`.
pub fn stagger_delay(index: usize, step_ms: u32, cap_ms: u32) -> u32 {
	u32::try_from(index)
		.unwrap_or(u32::MAX)
		.saturating_mul(step_ms)
		.min(cap_ms)
}

/// One observed section in an intersection batch.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSighting<'a> {
	/// Section element id.
	pub id: &'a str,
	/// Visible fraction.
	pub ratio: f64,
	/// Whether it intersects the root at all.
	pub intersecting: bool,
}

/// The section the header highlights: the most visible one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSection {
	current: Option<String>,
}

impl ActiveSection {
	/// Starts with `initial` highlighted.
	pub fn new(initial: Option<&str>) -> Self {
		Self {
			current: initial.map(str::to_owned),
		}
	}

	/// Folds a batch of sightings. Returns the new id when it changed.
	pub fn update(&mut self, batch: &[SectionSighting<'_>]) -> Option<&str> {
		let top = batch
			.iter()
			.filter(|s| s.intersecting)
			.max_by(|a, b| a.ratio.total_cmp(&b.ratio))?;
		if self.current.as_deref() == Some(top.id) {
			return None;
		}
		self.current = Some(top.id.to_owned());
		self.current.as_deref()
	}

	/// Highlighted id.
	pub fn current(&self) -> Option<&str> {
		self.current.as_deref()
	}
}

/// Character-at-a-time heading reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
	chars: Vec<char>,
	shown: usize,
	active: bool,
}

impl TypewriterState {
	/// Idle typewriter for `text`.
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			shown: 0,
			active: false,
		}
	}

	/// Starts typing from scratch, or clears when `trigger` is false.
	pub fn set_trigger(&mut self, trigger: bool) {
		self.active = trigger;
		self.shown = 0;
	}

	/// Reveals one more character. Returns whether typing continues.
	pub fn tick(&mut self) -> bool {
		if !self.active {
			return false;
		}
		self.shown = (self.shown + 1).min(self.chars.len());
		self.shown < self.chars.len()
	}

	/// Text shown so far.
	pub fn displayed(&self) -> String {
		self.chars[..self.shown].iter().collect()
	}

	/// Whether characters are still being added.
	pub fn is_typing(&self) -> bool {
		self.active && self.shown < self.chars.len()
	}

	/// Whether the cursor is shown (while triggered).
	pub fn shows_cursor(&self) -> bool {
		self.active
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latch_fires_once() {
		let mut seq = RevealSequencer::new(RevealConfig::default());
		let mut latch = RevealLatch::default();
		assert_eq!(latch.observe(0.1, &mut seq), None);
		assert_eq!(latch.observe(0.3, &mut seq), Some(0));
		assert_eq!(latch.observe(0.0, &mut seq), None);
		assert_eq!(latch.observe(1.0, &mut seq), None);
		assert!(latch.is_revealed());
		assert_eq!(seq.issued(), 1);
	}

	#[test]
	fn sequence_cascades_and_caps() {
		let mut seq = RevealSequencer::new(RevealConfig {
			threshold: 0.2,
			interval_ms: 160,
			max_delay_ms: 400,
		});
		let delays: Vec<u32> = (0..5)
			.map(|_| RevealLatch::default().observe(0.5, &mut seq).unwrap())
			.collect();
		assert_eq!(delays, vec![0, 160, 320, 400, 400]);
		seq.reset();
		assert_eq!(seq.next_delay(), 0);
	}

	#[test]
	fn separate_scopes_count_independently() {
		let mut a = RevealSequencer::new(RevealConfig::default());
		let mut b = RevealSequencer::new(RevealConfig::default());
		a.next_delay();
		a.next_delay();
		assert_eq!(b.next_delay(), 0);
		assert_eq!(a.next_delay(), 320);
	}

	#[test]
	fn stagger_is_capped() {
		assert_eq!(stagger_delay(3, 90, 800), 270);
		assert_eq!(stagger_delay(20, 120, 800), 800);
	}

	#[test]
	fn active_section_follows_most_visible() {
		let mut active = ActiveSection::new(Some("about"));
		let batch = [
			SectionSighting {
				id: "about",
				ratio: 0.3,
				intersecting: true,
			},
			SectionSighting {
				id: "experience",
				ratio: 0.6,
				intersecting: true,
			},
			SectionSighting {
				id: "skills",
				ratio: 0.9,
				intersecting: false,
			},
		];
		assert_eq!(active.update(&batch), Some("experience"));
		assert_eq!(active.update(&batch), None);
		assert_eq!(active.update(&[]), None);
		assert_eq!(active.current(), Some("experience"));
	}

	#[test]
	fn typewriter_types_then_resets() {
		let mut tw = TypewriterState::new("Hey");
		assert!(!tw.tick());
		tw.set_trigger(true);
		assert!(tw.tick());
		assert_eq!(tw.displayed(), "H");
		assert!(tw.tick());
		assert!(!tw.tick());
		assert_eq!(tw.displayed(), "Hey");
		assert!(!tw.is_typing() && tw.shows_cursor());
		tw.set_trigger(false);
		assert_eq!(tw.displayed(), "");
		assert!(!tw.shows_cursor());
	}
}
