use std::f64::consts::TAU;

use rand::Rng;

use super::frame::Surface;
use crate::config::VerseConfig;
use crate::geometry::Point;

/// Square pixels per spark at density 1.
const AREA_PER_SPARK: f64 = 26_000.0;
const MIN_SPARKS: usize = 10;

/// A drifting glow point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
	/// Position.
	pub position: Point,
	/// Per-frame velocity.
	pub velocity: Point,
	/// Phase offset for wobble and hue.
	pub phase: f64,
}

/// A quadratic curve from a spark to its nearest neighbor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkLink {
	/// Start spark.
	pub from: Point,
	/// Quadratic control point.
	pub control: Point,
	/// Nearest spark.
	pub to: Point,
	/// Hue in degrees.
	pub hue: f64,
}

/// A triangular shard of the central burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shard {
	/// Corners.
	pub corners: [Point; 3],
	/// Hue in degrees.
	pub hue: f64,
}

/// Ambient sparks behind the skills section.
#[derive(Debug)]
pub struct VerseField {
	config: VerseConfig,
	surface: Surface,
	sparks: Vec<Spark>,
}

fn spread(rng: &mut impl Rng, max: f64) -> f64 {
	if max > 0.0 { rng.gen_range(-max..max) } else { 0.0 }
}

impl VerseField {
	/// An empty field.
	pub fn new(config: VerseConfig) -> Self {
		Self {
			config: config.validated(),
			surface: Surface::default(),
			sparks: Vec::new(),
		}
	}

	/// Scatters sparks proportionally to the surface area.
	pub fn rebuild(&mut self, surface: Surface, rng: &mut impl Rng) {
		self.surface = surface;
		if surface.is_empty() {
			self.sparks.clear();
			return;
		}
		let count = ((surface.area() / AREA_PER_SPARK * self.config.density) as usize).max(MIN_SPARKS);
		let drift = self.config.drift;
		self.sparks = (0..count)
			.map(|_| Spark {
				position: Point::new(
					rng.gen_range(0.0..surface.width),
					rng.gen_range(0.0..surface.height),
				),
				velocity: Point::new(spread(rng, drift), spread(rng, drift)),
				phase: rng.gen_range(0.0..1000.0),
			})
			.collect();
	}

	/// Drifts every spark one frame, bouncing off the edges.
	pub fn step(&mut self) {
		let Surface { width, height } = self.surface;
		for s in &mut self.sparks {
			s.position = s.position + s.velocity;
			if s.position.x < 0.0 || s.position.x > width {
				s.velocity.x = -s.velocity.x;
			}
			if s.position.y < 0.0 || s.position.y > height {
				s.velocity.y = -s.velocity.y;
			}
		}
	}

	/// Each spark linked to its nearest neighbor within range.
	pub fn links(&self, t: f64) -> Vec<SparkLink> {
		let max_sq = self.config.link_dist * self.config.link_dist;
		self.sparks
			.iter()
			.enumerate()
			.filter_map(|(i, a)| {
				let nearest = self
					.sparks
					.iter()
					.enumerate()
					.filter(|&(j, _)| j != i)
					.map(|(_, b)| (b.position, a.position.distance_sq(b.position)))
					.filter(|&(_, d2)| d2 < max_sq)
					.min_by(|x, y| x.1.total_cmp(&y.1))?;
				let mid = a.position.midpoint(nearest.0);
				let wobble = (t * 0.001 + a.phase).sin() * self.config.wobble;
				Some(SparkLink {
					from: a.position,
					control: Point::new(mid.x + wobble, mid.y - wobble),
					to: nearest.0,
					hue: (a.phase * 137.5 + t * 0.02).rem_euclid(360.0),
				})
			})
			.collect()
	}

	/// Two rings of shards turning slowly around 50% x 60% of the surface.
	pub fn shards(&self, t: f64) -> Vec<Shard> {
		if !self.config.shards || self.surface.is_empty() {
			return Vec::new();
		}
		let center = Point::new(self.surface.width * 0.5, self.surface.height * 0.6);
		let mut out = Vec::new();
		for ring in 0..2usize {
			let pieces = 14 + ring * 8;
			let r = ring as f64;
			for i in 0..pieces {
				let angle = (i as f64 / pieces as f64) * TAU + (t * 0.0006 + r).sin() * 0.1;
				let rad = 40.0 + r * 26.0 + (i % 3) as f64 * 6.0;
				let corner = |da: f64, dr_x: f64, dr_y: f64| {
					Point::new(
						center.x + (angle + da).cos() * (rad + dr_x),
						center.y + (angle + da).sin() * (rad + dr_y),
					)
				};
				out.push(Shard {
					corners: [corner(0.0, 0.0, 0.0), corner(0.18, 12.0, 6.0), corner(-0.12, 18.0, 10.0)],
					hue: (t * 0.06 + i as f64 * 27.0 + r * 60.0).rem_euclid(360.0),
				});
			}
		}
		out
	}

	/// Current sparks.
	pub fn sparks(&self) -> &[Spark] {
		&self.sparks
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn spark_count_follows_area_with_a_floor() {
		let mut rng = StdRng::seed_from_u64(2);
		let mut field = VerseField::new(VerseConfig {
			density: 1.0,
			..VerseConfig::default()
		});
		field.rebuild(Surface::new(1300.0, 1000.0), &mut rng);
		assert_eq!(field.sparks().len(), 50);
		field.rebuild(Surface::new(100.0, 100.0), &mut rng);
		assert_eq!(field.sparks().len(), 10);
		field.rebuild(Surface::new(0.0, 100.0), &mut rng);
		assert!(field.sparks().is_empty());
		assert!(field.shards(0.0).is_empty());
	}

	#[test]
	fn still_config_keeps_sparks_and_links_straight() {
		let mut field = VerseField::new(VerseConfig {
			drift: 0.0,
			wobble: 0.0,
			..VerseConfig::default()
		});
		field.rebuild(Surface::new(400.0, 300.0), &mut StdRng::seed_from_u64(4));
		let before = field.sparks().to_vec();
		field.step();
		assert_eq!(field.sparks(), &before[..]);
		for link in field.links(987.0) {
			assert_eq!(link.control, link.from.midpoint(link.to));
		}
	}

	#[test]
	fn links_stay_within_range() {
		let mut field = VerseField::new(VerseConfig::default());
		field.rebuild(Surface::new(800.0, 600.0), &mut StdRng::seed_from_u64(6));
		field.step();
		for link in field.links(100.0) {
			assert!(link.from.distance(link.to) < 160.0);
		}
	}

	#[test]
	fn burst_has_two_rings() {
		let mut field = VerseField::new(VerseConfig::default());
		field.rebuild(Surface::new(800.0, 600.0), &mut StdRng::seed_from_u64(6));
		assert_eq!(field.shards(0.0).len(), 14 + 22);
	}
}
