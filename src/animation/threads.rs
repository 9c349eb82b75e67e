use log::debug;
use rand::Rng;

use super::easing::cubic_at;
use crate::config::ThreadsConfig;
use crate::geometry::{Edge, EdgeParams, Point, build_edges};

/// A cubic curve between two anchors, with its hue and travelling orbs.
#[derive(Clone, Debug, PartialEq)]
pub struct Thread {
	/// Start anchor.
	pub from: Point,
	/// First control point.
	pub c1: Point,
	/// Second control point.
	pub c2: Point,
	/// End anchor.
	pub to: Point,
	/// Base hue in degrees.
	pub hue: f64,
	/// Orb centers along the curve.
	pub orbs: Vec<Point>,
}

impl Thread {
	/// Point on the curve at parameter `t`.
	pub fn at(&self, t: f64) -> Point {
		Point::new(
			cubic_at(self.from.x, self.c1.x, self.c2.x, self.to.x, t),
			cubic_at(self.from.y, self.c1.y, self.c2.y, self.to.y, t),
		)
	}
}

/// Wavy threads stitched between card anchors.
#[derive(Debug)]
pub struct ThreadWeave {
	config: ThreadsConfig,
	anchors: Vec<Point>,
	edges: Vec<Edge>,
	pointer: Option<Point>,
}

impl ThreadWeave {
	/// An empty weave.
	pub fn new(config: ThreadsConfig) -> Self {
		Self {
			config: config.validated(),
			anchors: Vec::new(),
			edges: Vec::new(),
			pointer: None,
		}
	}

	/// Replaces the anchors and rebuilds every edge for them.
	pub fn rebuild(&mut self, anchors: Vec<Point>, rng: &mut impl Rng) {
		let params = EdgeParams {
			k: self.config.k,
			chain_stride: self.config.chain_stride,
		};
		self.edges = build_edges(&anchors, &params, rng);
		self.anchors = anchors;
		debug!(
			"threads rebuilt for {:?}: {} anchors, {} edges",
			self.config.selector,
			self.anchors.len(),
			self.edges.len()
		);
	}

	/// Anchor for a card whose box starts at `(left, top)` relative to the
	/// surface: horizontally centered, vertically capped near the top.
	pub fn card_anchor(&self, left: f64, top: f64, width: f64, height: f64) -> Point {
		Point::new(left + width / 2.0, top + (height / 2.0).min(self.config.anchor_cap))
	}

	/// Tracks the pointer; `None` when it left the window.
	pub fn set_pointer(&mut self, pointer: Option<Point>) {
		self.pointer = pointer;
	}

	/// Control points for the edge `a..b` at time `t`.
	fn controls(&self, a: Point, b: Point, t: f64, seed: f64) -> (Point, Point) {
		let mid = a.midpoint(b);
		let n = a.normal_to(b);
		let cfg = &self.config;
		let wobble = cfg.wobble_base + cfg.wobble_amp * (0.0008 * seed + t * 0.0017).sin();
		let (pull, toward) = match self.pointer {
			Some(p) if cfg.hover_attract > 0.0 => (
				cfg.hover_attract * (-mid.distance(p) / cfg.attract_falloff).exp(),
				p - mid,
			),
			_ => (0.0, Point::default()),
		};
		let ox = (wobble * (0.5 + 0.5 * (seed + t * 0.001).sin()) + pull * toward.x) * n.x;
		let oy = (wobble * (0.5 + 0.5 * (seed * 1.7 + t * 0.0013).cos()) + pull * toward.y) * n.y;
		(
			Point::new(mid.x + ox, mid.y + oy),
			Point::new(mid.x - ox, mid.y - oy),
		)
	}

	/// Every thread as it looks at `t` milliseconds.
	pub fn threads(&self, t: f64) -> Vec<Thread> {
		let orbs = self.config.orb_count;
		self.edges
			.iter()
			.filter(|e| e.fits(self.anchors.len()))
			.map(|e| {
				let (from, to) = (self.anchors[e.a], self.anchors[e.b]);
				let (c1, c2) = self.controls(from, to, t, e.seed);
				let mut thread = Thread {
					from,
					c1,
					c2,
					to,
					hue: (e.seed * 137.5 + t * 0.02).rem_euclid(360.0),
					orbs: Vec::with_capacity(orbs),
				};
				let phase = (t * 0.00025 + e.seed.fract()).rem_euclid(1.0);
				for i in 0..orbs {
					let at = (phase + i as f64 / orbs as f64).rem_euclid(1.0);
					thread.orbs.push(thread.at(at));
				}
				thread
			})
			.collect()
	}

	/// Current anchors.
	pub fn anchors(&self) -> &[Point] {
		&self.anchors
	}

	/// Current edges.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Active configuration.
	pub fn config(&self) -> &ThreadsConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn grid(n: usize) -> Vec<Point> {
		(0..n)
			.map(|i| Point::new((i % 3) as f64 * 300.0, (i / 3) as f64 * 260.0))
			.collect()
	}

	#[test]
	fn threads_end_on_their_anchors() {
		let mut weave = ThreadWeave::new(ThreadsConfig {
			k: 2,
			..ThreadsConfig::default()
		});
		weave.rebuild(grid(6), &mut StdRng::seed_from_u64(4));
		let threads = weave.threads(1234.0);
		assert!(!threads.is_empty());
		for th in &threads {
			assert_eq!(th.at(0.0), th.from);
			assert_eq!(th.at(1.0), th.to);
			assert_eq!(th.orbs.len(), 2);
			assert!((0.0..360.0).contains(&th.hue));
		}
	}

	#[test]
	fn same_seed_same_shape_at_same_time() {
		let mut weave = ThreadWeave::new(ThreadsConfig::default());
		weave.rebuild(grid(4), &mut StdRng::seed_from_u64(4));
		assert_eq!(weave.threads(500.0), weave.threads(500.0));
		assert_ne!(weave.threads(500.0), weave.threads(900.0));
	}

	#[test]
	fn pointer_bends_nearby_threads() {
		let mut weave = ThreadWeave::new(ThreadsConfig {
			hover_attract: 1.0,
			..ThreadsConfig::default()
		});
		weave.rebuild(vec![Point::new(0.0, 0.0), Point::new(0.0, 400.0)], &mut StdRng::seed_from_u64(1));
		let calm = weave.threads(0.0)[0].c2;
		weave.set_pointer(Some(Point::new(150.0, 200.0)));
		let pulled = weave.threads(0.0)[0].c2;
		assert!(pulled.x > calm.x);
	}

	#[test]
	fn single_or_missing_cards_draw_nothing() {
		let mut weave = ThreadWeave::new(ThreadsConfig::default());
		weave.rebuild(vec![Point::new(5.0, 5.0)], &mut StdRng::seed_from_u64(1));
		assert!(weave.threads(0.0).is_empty());
		weave.rebuild(Vec::new(), &mut StdRng::seed_from_u64(1));
		assert!(weave.threads(0.0).is_empty());
	}

	#[test]
	fn anchor_is_capped_below_card_top() {
		let weave = ThreadWeave::new(ThreadsConfig::default());
		assert_eq!(weave.card_anchor(10.0, 20.0, 200.0, 600.0), Point::new(110.0, 180.0));
		assert_eq!(weave.card_anchor(0.0, 0.0, 100.0, 100.0), Point::new(50.0, 50.0));
	}
}
