use super::easing::ease_out_cubic;
use crate::geometry::Point;

/// A time-bounded disturbance spreading from a pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
	/// Where the pointer was.
	pub origin: Point,
	/// Frame-clock timestamp of creation, in milliseconds.
	pub started_at: f64,
	/// How long the ripple lives.
	pub lifetime_ms: f64,
	/// Click pulses are emphasized: bigger, longer, never rate limited.
	pub emphasized: bool,
}

impl Ripple {
	/// Fraction of the lifetime elapsed at `now`.
	pub fn age(&self, now: f64) -> f64 {
		(now - self.started_at) / self.lifetime_ms
	}

	/// Whether the ripple influences the frame at `now`.
	pub fn is_alive(&self, now: f64) -> bool {
		(0.0..=1.0).contains(&self.age(now))
	}

	/// Eased radius at `now`, `None` once the ripple is dead.
	///
	/// `reach` holds the full radius for a normal and an emphasized ripple.
	pub fn radius(&self, now: f64, reach: (f64, f64), scale: f64) -> Option<f64> {
		if !self.is_alive(now) {
			return None;
		}
		let full = if self.emphasized { reach.1 } else { reach.0 };
		Some(full * ease_out_cubic(self.age(now)) * scale)
	}

	/// Linear falloff of influence at `p`, in `0..=1`.
	pub fn influence(&self, p: Point, now: f64, reach: (f64, f64), scale: f64) -> f64 {
		match self.radius(now, reach, scale) {
			Some(r) if r > 0.0 => {
				let d = p.distance(self.origin);
				if d < r { 1.0 - d / r } else { 0.0 }
			}
			_ => 0.0,
		}
	}
}

/// A ring drawn for a live ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
	/// Ring center.
	pub center: Point,
	/// Current radius.
	pub radius: f64,
	/// Stroke alpha, fading with age.
	pub alpha: f64,
}

/// The active ripples of one scene, with rate limiting on creation.
#[derive(Clone, Debug, Default)]
pub struct RippleField {
	ripples: Vec<Ripple>,
	last_spawn: Option<f64>,
	interval_ms: f64,
	life_ms: f64,
	pulse_life_ms: f64,
}

impl RippleField {
	/// Empty field. Plain ripples are spaced at least `interval_ms` apart.
	pub fn new(interval_ms: f64, life_ms: f64, pulse_life_ms: f64) -> Self {
		Self {
			ripples: Vec::new(),
			last_spawn: None,
			interval_ms,
			life_ms,
			pulse_life_ms,
		}
	}

	/// Adds a ripple unless it is a plain one arriving too soon.
	pub fn spawn(&mut self, origin: Point, now: f64, emphasized: bool) -> bool {
		if !emphasized && self.last_spawn.is_some_and(|t| now - t < self.interval_ms) {
			return false;
		}
		self.last_spawn = Some(now);
		self.ripples.push(Ripple {
			origin,
			started_at: now,
			lifetime_ms: if emphasized {
				self.pulse_life_ms
			} else {
				self.life_ms
			},
			emphasized,
		});
		true
	}

	/// Drops ripples whose lifetime has passed.
	pub fn prune(&mut self, now: f64) {
		self.ripples.retain(|r| now - r.started_at <= r.lifetime_ms);
	}

	/// Ripples influencing the frame at `now`.
	pub fn alive(&self, now: f64) -> impl Iterator<Item = &Ripple> {
		self.ripples.iter().filter(move |r| r.is_alive(now))
	}

	/// Rings for every live ripple.
	pub fn rings(&self, now: f64, reach: (f64, f64), scale: f64) -> Vec<Ring> {
		self.alive(now)
			.filter_map(|r| {
				r.radius(now, reach, scale).map(|radius| Ring {
					center: r.origin,
					radius,
					alpha: 0.18 * (1.0 - r.age(now)),
				})
			})
			.collect()
	}

	/// Number of tracked ripples, dead or alive.
	pub fn len(&self) -> usize {
		self.ripples.len()
	}

	/// Whether no ripple is tracked.
	pub fn is_empty(&self) -> bool {
		self.ripples.is_empty()
	}

	/// Forgets every ripple.
	pub fn clear(&mut self) {
		self.ripples.clear();
		self.last_spawn = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const REACH: (f64, f64) = (140.0, 240.0);

	#[test]
	fn plain_ripples_are_rate_limited() {
		let mut field = RippleField::new(60.0, 900.0, 1400.0);
		assert!(field.spawn(Point::new(0.0, 0.0), 1000.0, false));
		assert!(!field.spawn(Point::new(1.0, 0.0), 1030.0, false));
		assert!(field.spawn(Point::new(1.0, 0.0), 1060.0, false));
		assert_eq!(field.len(), 2);
	}

	#[test]
	fn pulses_bypass_the_limit() {
		let mut field = RippleField::new(60.0, 900.0, 1400.0);
		assert!(field.spawn(Point::new(0.0, 0.0), 1000.0, false));
		assert!(field.spawn(Point::new(0.0, 0.0), 1001.0, true));
		assert_eq!(field.alive(1001.0).filter(|r| r.emphasized).count(), 1);
	}

	#[test]
	fn ripple_has_no_influence_after_its_lifetime() {
		let mut field = RippleField::new(60.0, 900.0, 1400.0);
		field.spawn(Point::new(0.0, 0.0), 0.0, false);
		let near = Point::new(10.0, 0.0);
		let r = *field.alive(450.0).next().unwrap();
		assert!(r.influence(near, 450.0, REACH, 1.0) > 0.0);
		for t in [900.5, 901.0, 1200.0, 5000.0] {
			assert_eq!(r.influence(near, t, REACH, 1.0), 0.0);
			assert_eq!(field.alive(t).count(), 0);
			assert!(field.rings(t, REACH, 1.0).is_empty());
		}
		field.prune(901.0);
		assert!(field.is_empty());
	}

	#[test]
	fn radius_grows_toward_full_reach() {
		let r = Ripple {
			origin: Point::default(),
			started_at: 0.0,
			lifetime_ms: 1000.0,
			emphasized: true,
		};
		let early = r.radius(100.0, REACH, 1.0).unwrap();
		let late = r.radius(900.0, REACH, 1.0).unwrap();
		assert!(early < late && late <= 240.0);
		assert_eq!(r.radius(-1.0, REACH, 1.0), None);
	}
}
