use log::debug;
use rand::Rng;

use super::frame::Surface;
use super::threads::Thread;
use crate::config::PrismsConfig;
use crate::geometry::{Edge, Point, nearest_edges};

/// Fraction of the radius used for bouncing and hit testing.
const BODY: f64 = 0.55;

/// What a prism shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PrismSeed {
	/// Stable id.
	pub id: String,
	/// Text drawn inside.
	pub label: String,
	/// Outline color, `#rrggbb`.
	pub color: String,
}

/// A labelled box drifting around the skills surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Prism {
	/// Content.
	pub seed: PrismSeed,
	/// Center.
	pub position: Point,
	/// Per-frame velocity.
	pub velocity: Point,
	/// Nominal radius.
	pub radius: f64,
	/// Hue offset used by decorations.
	pub hue: f64,
}

impl Prism {
	/// Half extents of the drawn box.
	pub fn half_extents(&self) -> (f64, f64) {
		let base = self.radius * 0.7;
		(base * 0.9, base * 0.45)
	}

	/// Label font size in CSS pixels.
	pub fn font_px(&self) -> f64 {
		(self.radius * 0.7 * 0.14).max(14.0)
	}
}

/// Skill prisms linked by soft threads.
#[derive(Debug)]
pub struct PrismField {
	config: PrismsConfig,
	seeds: Vec<PrismSeed>,
	surface: Surface,
	prisms: Vec<Prism>,
	edges: Vec<Edge>,
	hovered: Option<usize>,
}

fn between(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { (lo + hi) / 2.0 }
}

impl PrismField {
	/// A field for `seeds`; empty until [`rebuild`](Self::rebuild).
	pub fn new(config: PrismsConfig, seeds: Vec<PrismSeed>) -> Self {
		Self {
			config: config.validated(),
			seeds,
			surface: Surface::default(),
			prisms: Vec::new(),
			edges: Vec::new(),
			hovered: None,
		}
	}

	/// Scatters the prisms over `surface` and links nearest neighbors.
	pub fn rebuild(&mut self, surface: Surface, rng: &mut impl Rng) {
		self.surface = surface;
		self.hovered = None;
		let (margin, size) = (self.config.margin, self.config.size);
		let (dx, dy) = self.config.drift;
		self.prisms = self
			.seeds
			.iter()
			.enumerate()
			.map(|(i, seed)| Prism {
				seed: seed.clone(),
				position: Point::new(
					between(rng, margin, surface.width - margin),
					between(rng, margin, surface.height - margin),
				),
				velocity: Point::new(between(rng, -dx, dx), between(rng, -dy, dy)),
				radius: size * (0.75 + rng.gen_range(0.0..0.35)),
				hue: ((i * 23 + 40) % 360) as f64,
			})
			.collect();
		let centers: Vec<Point> = self.prisms.iter().map(|p| p.position).collect();
		self.edges = nearest_edges(&centers, self.config.k, rng);
		debug!("prisms rebuilt: {} prisms, {} edges", self.prisms.len(), self.edges.len());
	}

	/// Drifts every prism one frame, bouncing off the edges.
	pub fn step(&mut self) {
		let Surface { width, height } = self.surface;
		let brake = 1.0 - self.config.hover_speed;
		for (i, p) in self.prisms.iter_mut().enumerate() {
			p.position = p.position + p.velocity;
			let body = p.radius * BODY;
			if p.position.x < body || p.position.x > width - body {
				p.velocity.x = -p.velocity.x;
			}
			if p.position.y < body || p.position.y > height - body {
				p.velocity.y = -p.velocity.y;
			}
			if self.hovered == Some(i) {
				p.position = p.position - p.velocity * brake;
			}
		}
	}

	/// Index of the prism under `p`, if any.
	pub fn hit_test(&self, p: Point) -> Option<usize> {
		self.prisms
			.iter()
			.position(|prism| prism.position.distance(p) < prism.radius * BODY)
	}

	/// Marks the hovered prism; it slows down and gets an outline.
	pub fn set_hover(&mut self, hovered: Option<usize>) {
		self.hovered = hovered.filter(|&i| i < self.prisms.len());
	}

	/// Hovered prism index.
	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	/// Threads between linked prisms at `t` milliseconds.
	pub fn threads(&self, t: f64) -> Vec<Thread> {
		self.edges
			.iter()
			.filter(|e| e.fits(self.prisms.len()))
			.map(|e| {
				let (from, to) = (self.prisms[e.a].position, self.prisms[e.b].position);
				let mid = from.midpoint(to);
				let n = from.normal_to(to);
				let wobble = self.config.wobble_base + self.config.wobble_amp * (0.0006 * e.seed + t * 0.001).sin();
				let offset = n * wobble;
				Thread {
					from,
					c1: mid + offset,
					c2: mid - offset,
					to,
					hue: (e.seed * 0.4 + t * 0.015).rem_euclid(360.0),
					orbs: Vec::new(),
				}
			})
			.collect()
	}

	/// Current prisms.
	pub fn prisms(&self) -> &[Prism] {
		&self.prisms
	}

	/// Current edges.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Visibility ratio that starts the loop.
	pub fn threshold(&self) -> f64 {
		self.config.threshold
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn seeds(n: usize) -> Vec<PrismSeed> {
		(0..n)
			.map(|i| PrismSeed {
				id: format!("s{i}"),
				label: format!("Skill {i}"),
				color: "#22d3ee".into(),
			})
			.collect()
	}

	#[test]
	fn rebuild_keeps_prisms_inside_margins() {
		let mut field = PrismField::new(PrismsConfig::default(), seeds(8));
		field.rebuild(Surface::new(900.0, 600.0), &mut StdRng::seed_from_u64(3));
		assert_eq!(field.prisms().len(), 8);
		for p in field.prisms() {
			assert!((90.0..=810.0).contains(&p.position.x));
			assert!((90.0..=510.0).contains(&p.position.y));
		}
		assert!(field.edges().iter().all(|e| e.fits(8)));
	}

	#[test]
	fn tiny_surface_does_not_panic() {
		let mut field = PrismField::new(PrismsConfig::default(), seeds(3));
		field.rebuild(Surface::new(40.0, 40.0), &mut StdRng::seed_from_u64(3));
		assert_eq!(field.prisms()[0].position, Point::new(20.0, 20.0));
		field.step();
	}

	#[test]
	fn hover_hits_and_slows() {
		let config = PrismsConfig {
			margin: 300.0,
			..PrismsConfig::default()
		};
		let mut field = PrismField::new(config, seeds(1));
		field.rebuild(Surface::new(1200.0, 900.0), &mut StdRng::seed_from_u64(8));
		let center = field.prisms()[0].position;
		assert_eq!(field.hit_test(center), Some(0));
		assert_eq!(field.hit_test(Point::new(-500.0, -500.0)), None);

		let v = field.prisms()[0].velocity;
		field.set_hover(Some(0));
		field.step();
		let moved = field.prisms()[0].position - center;
		assert!((moved.x - v.x * 0.4).abs() < 1e-9);
		field.set_hover(Some(7));
		assert_eq!(field.hovered(), None);
	}

	#[test]
	fn motion_follows_config() {
		let still = PrismsConfig {
			drift: (0.0, 0.0),
			wobble_base: 5.0,
			wobble_amp: 0.0,
			..PrismsConfig::default()
		};
		let mut field = PrismField::new(still, seeds(4));
		field.rebuild(Surface::new(900.0, 600.0), &mut StdRng::seed_from_u64(11));
		let before: Vec<Point> = field.prisms().iter().map(|p| p.position).collect();
		field.step();
		let after: Vec<Point> = field.prisms().iter().map(|p| p.position).collect();
		assert_eq!(before, after);

		for thread in field.threads(1234.0) {
			let mid = thread.from.midpoint(thread.to);
			assert!((thread.c1.distance(mid) - 5.0).abs() < 1e-9);
		}
	}

	#[test]
	fn prisms_bounce_off_edges() {
		let mut field = PrismField::new(PrismsConfig::default(), seeds(1));
		field.rebuild(Surface::new(400.0, 400.0), &mut StdRng::seed_from_u64(1));
		for _ in 0..20_000 {
			field.step();
		}
		let p = &field.prisms()[0];
		let slack = p.radius;
		assert!(p.position.x > -slack && p.position.x < 400.0 + slack);
		assert!(p.position.y > -slack && p.position.y < 400.0 + slack);
	}
}
