//! Tunables for every animated scene and for content loading.
//!
//! Each struct lists every recognized option with its default. Components
//! accept a config as a prop and call [`validated`](WebConfig::validated)
//! once when they mount, so the per-frame code never re-checks ranges.

/// Global intensity knob shared by the decorative scenes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectsLevel {
	/// Sparser meshes, shorter reach.
	Low,
	/// Baseline.
	#[default]
	Medium,
	/// Denser meshes, longer reach.
	High,
}

impl EffectsLevel {
	/// Multiplier applied to density, distances, and drift.
	pub fn scale(self) -> f64 {
		match self {
			Self::Low => 0.75,
			Self::Medium => 1.0,
			Self::High => 1.25,
		}
	}

	/// Stagger step between consecutive list entries.
	pub fn reveal_step_ms(self) -> u32 {
		match self {
			Self::Low => 60,
			Self::Medium => 90,
			Self::High => 110,
		}
	}
}

/// Spring pulling a node back to its rest position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	/// Fraction of the remaining offset added to the velocity each frame.
	pub stiffness: f64,
	/// Fraction of the velocity removed each frame.
	pub damping: f64,
}

impl Default for Spring {
	fn default() -> Self {
		Self {
			stiffness: 0.08,
			damping: 0.12,
		}
	}
}

/// Full-page ambient web.
#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
	/// Probability that a grid cell holds a node, before the level scale.
	pub density: f64,
	/// Side of a seeding cell in CSS pixels.
	pub cell_size: f64,
	/// Longest drawable edge in CSS pixels, before the level scale.
	pub max_neighbor_dist: f64,
	/// Neighbors kept per node.
	pub neighbors: usize,
	/// Minimum spacing between pointer-move ripples.
	pub ripple_interval_ms: f64,
	/// Lifetime of a pointer-move ripple.
	pub ripple_life_ms: f64,
	/// Lifetime of a pointer-down pulse.
	pub pulse_life_ms: f64,
	/// Spring constants.
	pub spring: Spring,
	/// Extra edge alpha at the center of a ripple.
	pub brightness_boost: f64,
	/// Largest ripple displacement in CSS pixels.
	pub push: f64,
	/// Displacement radius of a ripple and of a pulse.
	pub push_reach: (f64, f64),
	/// Glow and ring radius of a ripple and of a pulse.
	pub glow_reach: (f64, f64),
	/// Idle drift amplitude in CSS pixels.
	pub drift_amplitude: f64,
	/// Overlay a halftone texture.
	pub halftone: bool,
	/// Intensity.
	pub level: EffectsLevel,
}

impl Default for WebConfig {
	fn default() -> Self {
		Self {
			density: 1.0,
			cell_size: 24.0,
			max_neighbor_dist: 120.0,
			neighbors: 3,
			ripple_interval_ms: 60.0,
			ripple_life_ms: 900.0,
			pulse_life_ms: 1400.0,
			spring: Spring::default(),
			brightness_boost: 0.4,
			push: 6.0,
			push_reach: (140.0, 240.0),
			glow_reach: (160.0, 260.0),
			drift_amplitude: 0.8,
			halftone: true,
			level: EffectsLevel::Medium,
		}
	}
}

impl WebConfig {
	/// Clamps every option into a range the stepper can handle.
	pub fn validated(mut self) -> Self {
		self.density = self.density.max(0.0);
		self.cell_size = self.cell_size.max(4.0);
		self.max_neighbor_dist = self.max_neighbor_dist.max(1.0);
		self.ripple_interval_ms = self.ripple_interval_ms.max(0.0);
		self.ripple_life_ms = self.ripple_life_ms.max(1.0);
		self.pulse_life_ms = self.pulse_life_ms.max(1.0);
		self.spring.stiffness = self.spring.stiffness.clamp(0.0, 1.0);
		self.spring.damping = self.spring.damping.clamp(0.0, 1.0);
		self.brightness_boost = self.brightness_boost.max(0.0);
		self.push = self.push.max(0.0);
		self.drift_amplitude = self.drift_amplitude.max(0.0);
		self
	}

	/// Neighbor distance after the level scale.
	pub fn reach(&self) -> f64 {
		self.max_neighbor_dist * self.level.scale()
	}
}

/// Threads stitched between DOM cards.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreadsConfig {
	/// CSS selector of the cards to connect, relative to the parent.
	pub selector: String,
	/// Nearest neighbors per card.
	pub k: usize,
	/// Chain every Nth consecutive pair.
	pub chain_stride: usize,
	/// Pull of the pointer on nearby curves, `0..=1`.
	pub hover_attract: f64,
	/// Draw once and stop.
	pub static_mode: bool,
	/// Constant part of the wobble amplitude.
	pub wobble_base: f64,
	/// Oscillating part of the wobble amplitude.
	pub wobble_amp: f64,
	/// Distance over which pointer attraction decays by `1/e`.
	pub attract_falloff: f64,
	/// Glowing orbs travelling along each curve.
	pub orb_count: usize,
	/// Anchors sit at most this far below a card's top edge.
	pub anchor_cap: f64,
}

impl Default for ThreadsConfig {
	fn default() -> Self {
		Self {
			selector: ".project-card".into(),
			k: 1,
			chain_stride: 1,
			hover_attract: 0.25,
			static_mode: false,
			wobble_base: 18.0,
			wobble_amp: 22.0,
			attract_falloff: 380.0,
			orb_count: 2,
			anchor_cap: 160.0,
		}
	}
}

impl ThreadsConfig {
	/// Clamps every option into a usable range.
	pub fn validated(mut self) -> Self {
		self.chain_stride = self.chain_stride.max(1);
		self.hover_attract = self.hover_attract.clamp(0.0, 1.0);
		self.attract_falloff = self.attract_falloff.max(1.0);
		self.anchor_cap = self.anchor_cap.max(0.0);
		self
	}
}

/// Drifting skill prisms.
#[derive(Clone, Debug, PartialEq)]
pub struct PrismsConfig {
	/// Nominal prism radius.
	pub size: f64,
	/// Nearest neighbors per prism.
	pub k: usize,
	/// Keep seeds this far from the edges.
	pub margin: f64,
	/// Surface visibility ratio that starts the loop.
	pub threshold: f64,
	/// Largest per-frame speed along x and y.
	pub drift: (f64, f64),
	/// Share of its speed a hovered prism keeps.
	pub hover_speed: f64,
	/// Constant part of the link wobble.
	pub wobble_base: f64,
	/// Oscillating part of the link wobble.
	pub wobble_amp: f64,
}

impl Default for PrismsConfig {
	fn default() -> Self {
		Self {
			size: 150.0,
			k: 2,
			margin: 90.0,
			threshold: 0.15,
			drift: (0.22, 0.18),
			hover_speed: 0.4,
			wobble_base: 8.0,
			wobble_amp: 10.0,
		}
	}
}

impl PrismsConfig {
	/// Clamps every option into a usable range.
	pub fn validated(mut self) -> Self {
		self.size = self.size.max(1.0);
		self.margin = self.margin.max(0.0);
		self.threshold = self.threshold.clamp(0.0, 1.0);
		self.drift = (self.drift.0.abs(), self.drift.1.abs());
		self.hover_speed = self.hover_speed.clamp(0.0, 1.0);
		self
	}
}

/// Sparks behind the skills section.
#[derive(Clone, Debug, PartialEq)]
pub struct VerseConfig {
	/// Sparks per 26 000 square pixels.
	pub density: f64,
	/// Longest spark link.
	pub link_dist: f64,
	/// Draw the central shard burst.
	pub shards: bool,
	/// Largest per-frame speed on either axis.
	pub drift: f64,
	/// Sideways swing of a link's control point.
	pub wobble: f64,
}

impl Default for VerseConfig {
	fn default() -> Self {
		Self {
			density: 0.8,
			link_dist: 160.0,
			shards: true,
			drift: 0.08,
			wobble: 12.0,
		}
	}
}

impl VerseConfig {
	/// Clamps every option into a usable range.
	pub fn validated(mut self) -> Self {
		self.density = self.density.max(0.0);
		self.link_dist = self.link_dist.max(0.0);
		self.drift = self.drift.abs();
		self
	}
}

/// One-shot entrance reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
	/// Visibility ratio that reveals a block.
	pub threshold: f64,
	/// Delay added per reveal within a sequence.
	pub interval_ms: u32,
	/// Upper bound of a sequence delay.
	pub max_delay_ms: u32,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.2,
			interval_ms: 160,
			max_delay_ms: 2400,
		}
	}
}

impl RevealConfig {
	/// Clamps every option into a usable range.
	pub fn validated(mut self) -> Self {
		self.threshold = self.threshold.clamp(0.0, 1.0);
		self
	}
}

/// Whether this is a release build. Drafts are hidden in production.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildProfile {
	/// Debug build, drafts visible.
	Development,
	/// Release build, drafts hidden.
	Production,
}

impl BuildProfile {
	/// Profile of the running binary.
	pub fn current() -> Self {
		if cfg!(debug_assertions) {
			Self::Development
		} else {
			Self::Production
		}
	}

	/// Shorthand for `== Production`.
	pub fn is_production(self) -> bool {
		self == Self::Production
	}
}

/// Where the blog lives and how it pages.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogConfig {
	/// Directory holding the manifest and the post files.
	pub base_path: String,
	/// Manifest file name inside `base_path`.
	pub manifest: String,
	/// Posts per page.
	pub page_size: usize,
	/// Draft visibility.
	pub profile: BuildProfile,
}

impl Default for BlogConfig {
	fn default() -> Self {
		Self {
			base_path: "/blog".into(),
			manifest: "manifest.json".into(),
			page_size: 9,
			profile: BuildProfile::current(),
		}
	}
}

impl BlogConfig {
	/// Clamps every option into a usable range.
	pub fn validated(mut self) -> Self {
		self.page_size = self.page_size.max(1);
		while self.base_path.ends_with('/') {
			self.base_path.pop();
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_scales_reach() {
		let cfg = WebConfig {
			level: EffectsLevel::High,
			..WebConfig::default()
		};
		assert_eq!(cfg.reach(), 150.0);
		assert_eq!(EffectsLevel::Low.reveal_step_ms(), 60);
	}

	#[test]
	fn validation_clamps_out_of_range_values() {
		let cfg = WebConfig {
			spring: Spring {
				stiffness: 4.0,
				damping: -1.0,
			},
			ripple_life_ms: 0.0,
			..WebConfig::default()
		}
		.validated();
		assert_eq!(cfg.spring.stiffness, 1.0);
		assert_eq!(cfg.spring.damping, 0.0);
		assert_eq!(cfg.ripple_life_ms, 1.0);

		let threads = ThreadsConfig {
			chain_stride: 0,
			hover_attract: 3.0,
			..ThreadsConfig::default()
		}
		.validated();
		assert_eq!(threads.chain_stride, 1);
		assert_eq!(threads.hover_attract, 1.0);

		let blog = BlogConfig {
			base_path: "/blog//".into(),
			page_size: 0,
			..BlogConfig::default()
		}
		.validated();
		assert_eq!(blog.base_path, "/blog");
		assert_eq!(blog.page_size, 1);
	}
}
