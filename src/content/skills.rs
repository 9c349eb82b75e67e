//! Skill records for the prisms and the word cloud.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::animation::PrismSeed;
use crate::geometry::Point;
use SkillGroup::*;

/// Broad skill family; picks the outline color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillGroup {
	/// AI and ML.
	Ai,
	/// Product.
	Product,
	/// Agile delivery.
	Agile,
	/// Data.
	Data,
	/// Systems.
	Systems,
	/// Anything else.
	Other,
}

impl SkillGroup {
	/// `#rrggbb` accent.
	pub fn color(self) -> &'static str {
		match self {
			Self::Product => "#f9a825",
			Self::Data => "#38bdf8",
			Self::Systems => "#a855f7",
			Self::Ai | Self::Agile | Self::Other => "#22d3ee",
		}
	}
}

/// A skill prism.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
	/// Stable id.
	pub id: &'static str,
	/// Label drawn in the prism.
	pub label: &'static str,
	/// Family.
	pub group: SkillGroup,
}

impl Skill {
	/// Seed for the prism scene.
	pub fn prism_seed(&self) -> PrismSeed {
		PrismSeed {
			id: self.id.into(),
			label: self.label.into(),
			color: self.group.color().into(),
		}
	}
}

/// Skills drawn as prisms.
pub static SKILLS: &[Skill] = &[
	Skill { id: "ai-systems", label: "AI Systems", group: Ai },
	Skill { id: "ml-fundamentals", label: "Machine Learning Fundamentals", group: Ai },
	Skill { id: "nlp", label: "Natural Language Processing", group: Ai },
	Skill { id: "vision", label: "Computer Vision", group: Ai },
	Skill { id: "data-strategy", label: "Data Strategy", group: Data },
	Skill { id: "experimentation", label: "Experimentation & A/B Testing", group: Data },
	Skill { id: "analytics", label: "Product Analytics", group: Data },
	Skill { id: "systems", label: "Systems Thinking", group: Systems },
	Skill { id: "architecture", label: "Architecture & Scale", group: Systems },
	Skill { id: "product-sense", label: "Product Sense", group: Product },
	Skill { id: "user-research", label: "User Research", group: Product },
	Skill { id: "leadership", label: "Team Leadership", group: Other },
];

/// Prism seeds for every skill.
pub fn prism_seeds() -> Vec<PrismSeed> {
	SKILLS.iter().map(Skill::prism_seed).collect()
}

/// A word in the skills cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudSkill {
	/// Word.
	pub label: &'static str,
	/// 1-10; bigger words weigh more.
	pub weight: u8,
	/// Family, for color.
	pub group: SkillGroup,
}

impl CloudSkill {
	/// Font size in px.
	pub fn font_px(&self) -> f64 {
		(6.0 + f64::from(self.weight) * 1.2).max(10.0)
	}

	/// Width reserved while placing.
	pub fn width_hint(&self) -> f64 {
		(60.0 + f64::from(self.weight) * 8.0).min(220.0)
	}
}

const fn cloud(label: &'static str, weight: u8, group: SkillGroup) -> CloudSkill {
	CloudSkill { label, weight, group }
}

/// Words in the skills cloud.
pub static CLOUD_SKILLS: &[CloudSkill] = &[
	cloud("Python", 10, Ai),
	cloud("PyTorch", 9, Ai),
	cloud("RAG", 8, Ai),
	cloud("NLP", 7, Ai),
	cloud("Computer Vision", 6, Ai),
	cloud("Reinforcement Learning", 5, Ai),
	cloud("Product Strategy", 9, Product),
	cloud("User Research", 7, Product),
	cloud("Roadmapping", 6, Product),
	cloud("PRDs", 5, Product),
	cloud("Scrum", 7, Agile),
	cloud("SAFe", 6, Agile),
	cloud("Jira", 5, Agile),
	cloud("SQL", 8, Data),
	cloud("Pandas", 7, Data),
	cloud("A/B Testing", 6, Data),
	cloud("Flask", 6, Systems),
	cloud("AWS", 6, Systems),
	cloud("Enterprise Architecture", 7, Systems),
	cloud("Quantum Computing", 5, Other),
];

/// Axis-aligned box in cloud-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
	/// Top-left corner.
	pub at: Point,
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Placement {
	fn overlaps(&self, other: &Placement) -> bool {
		!(self.at.x + self.width < other.at.x
			|| self.at.x > other.at.x + other.width
			|| self.at.y + self.height < other.at.y
			|| self.at.y > other.at.y + other.height)
	}
}

const PLACE_TRIES: usize = 40;

fn between(rng: &mut impl Rng, lo: f64, span: f64) -> f64 {
	if span > 0.0 { lo + rng.gen_range(0.0..span) } else { lo }
}

/// Scatters boxes of `sizes` over a `width` x `height` area by rejection sampling.
///
/// Each box gets up to forty random spots; a box that never fits keeps its
/// last spot.
pub fn place_cloud(sizes: &[(f64, f64)], width: f64, height: f64, rng: &mut impl Rng) -> Vec<Placement> {
	let mut placed: Vec<Placement> = Vec::with_capacity(sizes.len());
	let mut out = Vec::with_capacity(sizes.len());
	for &(w, h) in sizes {
		let mut spot = Placement {
			at: Point::new(10.0, 40.0),
			width: w,
			height: h,
		};
		for _ in 0..PLACE_TRIES {
			spot.at = Point::new(between(rng, 10.0, width - w - 20.0), between(rng, 40.0, height - 120.0));
			if !placed.iter().any(|p| p.overlaps(&spot)) {
				placed.push(spot);
				break;
			}
		}
		out.push(spot);
	}
	out
}

/// The cloud words in a fresh random order.
pub fn shuffled_cloud(rng: &mut impl Rng) -> Vec<CloudSkill> {
	let mut words = CLOUD_SKILLS.to_vec();
	words.shuffle(rng);
	words
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn prism_colors_follow_group() {
		let seeds = prism_seeds();
		assert_eq!(seeds.len(), SKILLS.len());
		let analytics = seeds.iter().find(|s| s.id == "analytics").unwrap();
		assert_eq!(analytics.color, "#38bdf8");
	}

	#[test]
	fn cloud_sizes() {
		assert_eq!(cloud("x", 1, Ai).font_px(), 10.0);
		assert_eq!(cloud("x", 10, Ai).font_px(), 18.0);
		assert_eq!(cloud("x", 10, Ai).width_hint(), 140.0);
	}

	#[test]
	fn placed_boxes_do_not_overlap_when_room_allows() {
		let mut rng = StdRng::seed_from_u64(3);
		let sizes = vec![(60.0, 20.0); 6];
		let spots = place_cloud(&sizes, 1200.0, 800.0, &mut rng);
		assert_eq!(spots.len(), 6);
		for (i, a) in spots.iter().enumerate() {
			assert!(a.at.x >= 10.0 && a.at.x + a.width <= 1190.0);
			for b in &spots[i + 1..] {
				assert!(!a.overlaps(b));
			}
		}
	}

	#[test]
	fn tiny_areas_still_place_everything() {
		let mut rng = StdRng::seed_from_u64(1);
		let spots = place_cloud(&[(300.0, 40.0), (300.0, 40.0)], 100.0, 50.0, &mut rng);
		assert_eq!(spots.len(), 2);
		assert_eq!(spots[0].at, Point::new(10.0, 40.0));
	}

	#[test]
	fn shuffle_keeps_every_word() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut words: Vec<_> = shuffled_cloud(&mut rng).iter().map(|w| w.label).collect();
		words.sort_unstable();
		let mut expected: Vec<_> = CLOUD_SKILLS.iter().map(|w| w.label).collect();
		expected.sort_unstable();
		assert_eq!(words, expected);
	}
}
