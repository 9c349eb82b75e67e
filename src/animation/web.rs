use log::debug;
use rand::Rng;

use super::frame::Surface;
use super::ripple::{Ring, RippleField};
use crate::config::WebConfig;
use crate::geometry::{Edge, GraphNode, Point, edges_from_neighbors, grid_neighbors};

/// Faintest stroke an edge is drawn with.
const MIN_ALPHA: f64 = 0.04;

/// One edge ready to stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strand {
	/// Start point.
	pub from: Point,
	/// End point.
	pub to: Point,
	/// Stroke alpha.
	pub alpha: f64,
	/// Stroke width in CSS pixels.
	pub width: f64,
}

/// The full-page ambient web: a jittered grid of nodes that drift, spring
/// back to rest, and get pushed around by pointer ripples.
#[derive(Debug)]
pub struct WebField {
	config: WebConfig,
	surface: Surface,
	nodes: Vec<GraphNode>,
	edges: Vec<Edge>,
	ripples: RippleField,
	now: f64,
}

impl WebField {
	/// An empty field; call [`rebuild`](Self::rebuild) once the surface is known.
	pub fn new(config: WebConfig) -> Self {
		let config = config.validated();
		let ripples = RippleField::new(
			config.ripple_interval_ms,
			config.ripple_life_ms,
			config.pulse_life_ms,
		);
		Self {
			config,
			surface: Surface::default(),
			nodes: Vec::new(),
			edges: Vec::new(),
			ripples,
			now: 0.0,
		}
	}

	/// Reseeds nodes and neighbor edges for `surface`.
	///
	/// Nodes and edges are replaced together, so no edge ever refers to a
	/// node of the previous layout.
	pub fn rebuild(&mut self, surface: Surface, rng: &mut impl Rng) {
		self.surface = surface;
		self.nodes.clear();
		self.edges.clear();
		self.ripples.clear();
		if surface.is_empty() {
			return;
		}

		let scale = self.config.level.scale();
		let cell = self.config.cell_size;
		let keep = (self.config.density * scale).min(1.0);
		let cols = (surface.width / cell).ceil() as usize;
		let rows = (surface.height / cell).ceil() as usize;
		for row in 0..rows {
			for col in 0..cols {
				if !rng.gen_bool(keep) {
					continue;
				}
				let jx = (col as f64 + 0.5 + (rng.gen_range(-0.5..0.5) * 0.6)) * cell;
				let jy = (row as f64 + 0.5 + (rng.gen_range(-0.5..0.5) * 0.6)) * cell;
				let id = self.nodes.len();
				self.nodes.push(GraphNode::at_rest(id, Point::new(jx, jy)));
			}
		}

		let rest: Vec<Point> = self.nodes.iter().map(|n| n.origin).collect();
		let lists = grid_neighbors(&rest, self.config.reach(), self.config.neighbors);
		self.edges = edges_from_neighbors(&lists, rng);
		for (node, list) in self.nodes.iter_mut().zip(lists) {
			node.neighbors = list;
		}
		debug!(
			"web rebuilt: {}x{} -> {} nodes, {} edges",
			surface.width,
			surface.height,
			self.nodes.len(),
			self.edges.len()
		);
	}

	/// Pointer moved; spawns a rate-limited ripple.
	pub fn pointer_move(&mut self, at: Point, now: f64) -> bool {
		self.ripples.spawn(at, now, false)
	}

	/// Pointer pressed; spawns an emphasized pulse.
	pub fn pointer_down(&mut self, at: Point, now: f64) -> bool {
		self.ripples.spawn(at, now, true)
	}

	/// Advances every node to `now`.
	pub fn step(&mut self, now: f64) {
		self.now = now;
		self.ripples.prune(now);

		let scale = self.config.level.scale();
		let drift = self.config.drift_amplitude * scale;
		let secs = now / 1000.0;
		let spring = self.config.spring;
		for node in &mut self.nodes {
			let o = node.origin;
			let mut target = Point::new(
				o.x + ((o.x + secs * 30.0) * 0.002).sin() * drift,
				o.y + ((o.y + secs * 24.0) * 0.002).cos() * drift,
			);
			for ripple in self.ripples.alive(now) {
				let falloff = ripple.influence(node.position, now, self.config.push_reach, scale);
				if falloff <= 0.0 {
					continue;
				}
				let away = node.position - ripple.origin;
				let d = away.distance(Point::default());
				let d = if d > 0.0 { d } else { 1.0 };
				target = target + away * (falloff * self.config.push / d);
			}
			let pull = (target - node.position) * spring.stiffness;
			node.velocity = (node.velocity + pull) * (1.0 - spring.damping);
			node.position = node.position + node.velocity;
		}
	}

	/// Edges to stroke this frame, brightened near live ripples.
	pub fn strands(&self) -> Vec<Strand> {
		let max_dist = self.config.reach();
		let scale = self.config.level.scale();
		self.edges
			.iter()
			.filter(|e| e.fits(self.nodes.len()))
			.filter_map(|e| {
				let (from, to) = (self.nodes[e.a].position, self.nodes[e.b].position);
				let d = from.distance(to);
				if d > max_dist {
					return None;
				}
				let mid = from.midpoint(to);
				let boost: f64 = self
					.ripples
					.alive(self.now)
					.map(|r| r.influence(mid, self.now, self.config.glow_reach, scale))
					.sum();
				let alpha =
					(0.25 * (1.0 - d / max_dist) + self.config.brightness_boost * boost).clamp(MIN_ALPHA, 1.0);
				Some(Strand {
					from,
					to,
					alpha,
					width: (1.2 * (alpha + 0.1)).max(1.0),
				})
			})
			.collect()
	}

	/// Rings for the live ripples.
	pub fn rings(&self) -> Vec<Ring> {
		self.ripples
			.rings(self.now, self.config.glow_reach, self.config.level.scale())
	}

	/// Current nodes.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Current edges.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Active configuration.
	pub fn config(&self) -> &WebConfig {
		&self.config
	}

	/// Tracked ripples, for tests and diagnostics.
	pub fn ripple_count(&self) -> usize {
		self.ripples.len()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn field() -> WebField {
		WebField::new(WebConfig::default())
	}

	#[test]
	fn rebuild_fills_surface_with_valid_edges() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut web = field();
		web.rebuild(Surface::new(480.0, 240.0), &mut rng);
		// density 1.0 keeps every cell
		assert_eq!(web.nodes().len(), 20 * 10);
		assert!(!web.edges().is_empty());
		assert!(web.edges().iter().all(|e| e.fits(web.nodes().len())));
		assert!(web.nodes().iter().all(|n| n.neighbors.len() <= 3));
	}

	#[test]
	fn resize_replaces_nodes_and_edges_together() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut web = field();
		web.rebuild(Surface::new(960.0, 480.0), &mut rng);
		web.rebuild(Surface::new(96.0, 48.0), &mut rng);
		let n = web.nodes().len();
		assert!(web.edges().iter().all(|e| e.fits(n)));
		web.rebuild(Surface::new(0.0, 0.0), &mut rng);
		assert!(web.nodes().is_empty() && web.edges().is_empty());
		web.step(16.0);
		assert!(web.strands().is_empty());
	}

	#[test]
	fn nodes_settle_near_rest_without_ripples() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut web = field();
		web.rebuild(Surface::new(120.0, 120.0), &mut rng);
		for i in 0..600 {
			web.step(i as f64 * 16.0);
		}
		let drift = web.config().drift_amplitude;
		for node in web.nodes() {
			assert!(node.position.distance(node.origin) <= drift * 2.0 + 0.5);
		}
	}

	#[test]
	fn ripple_pushes_nearby_nodes_outward() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut web = field();
		web.rebuild(Surface::new(240.0, 240.0), &mut rng);
		let center = Point::new(120.0, 120.0);
		let before: Vec<f64> = web.nodes().iter().map(|n| n.position.distance(center)).collect();
		assert!(web.pointer_down(center, 0.0));
		for i in 1..=20 {
			web.step(i as f64 * 16.0);
		}
		let moved_out = web
			.nodes()
			.iter()
			.zip(&before)
			.filter(|(n, d)| **d > 5.0 && **d < 60.0 && n.position.distance(center) > **d)
			.count();
		assert!(moved_out > 0);
	}

	#[test]
	fn expired_ripples_are_collected() {
		let mut web = field();
		web.rebuild(Surface::new(48.0, 48.0), &mut StdRng::seed_from_u64(1));
		web.pointer_move(Point::new(10.0, 10.0), 0.0);
		web.step(500.0);
		assert_eq!(web.ripple_count(), 1);
		assert_eq!(web.rings().len(), 1);
		web.step(901.0);
		assert_eq!(web.ripple_count(), 0);
		assert!(web.rings().is_empty());
	}

	#[test]
	fn strand_alpha_stays_in_range() {
		let mut web = field();
		web.rebuild(Surface::new(240.0, 240.0), &mut StdRng::seed_from_u64(2));
		web.pointer_down(Point::new(120.0, 120.0), 0.0);
		web.step(200.0);
		for s in web.strands() {
			assert!((MIN_ALPHA..=1.0).contains(&s.alpha));
			assert!(s.width >= 1.0);
		}
	}
}
