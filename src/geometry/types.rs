use std::ops::{Add, Mul, Sub};

/// A position in surface-local CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the surface's left edge.
	pub x: f64,
	/// Vertical offset from the surface's top edge.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared Euclidean distance, used wherever only ordering matters.
	pub fn distance_sq(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		dx * dx + dy * dy
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		self.distance_sq(other).sqrt()
	}

	/// Midpoint of the segment `self..other`.
	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}

	/// Unit normal to the segment `self..other`.
	///
	/// Coincident points fall back to a length of one so the result stays
	/// finite.
	pub fn normal_to(self, other: Point) -> Point {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		let len = (dx * dx + dy * dy).sqrt();
		let len = if len > 0.0 { len } else { 1.0 };
		Point::new(-dy / len, dx / len)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

/// An undirected connection between two nodes of the same set.
///
/// `a < b` always holds so an edge is drawn once. The seed is fixed when the
/// edge is created and drives its wobble phase and hue for its whole life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Lower endpoint index.
	pub a: usize,
	/// Higher endpoint index.
	pub b: usize,
	/// Per-edge phase seed in `[0, 1000)`.
	pub seed: f64,
}

impl Edge {
	/// Creates an edge, ordering the endpoints.
	pub fn new(i: usize, j: usize, seed: f64) -> Self {
		let (a, b) = if i < j { (i, j) } else { (j, i) };
		Self { a, b, seed }
	}

	/// Whether both endpoints index into a node set of length `len`.
	pub fn fits(&self, len: usize) -> bool {
		self.a < len && self.b < len && self.a != self.b
	}
}

/// An animated node with a rest position it springs back to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphNode {
	/// Index of this node in its set.
	pub id: usize,
	/// Current position.
	pub position: Point,
	/// Per-frame velocity.
	pub velocity: Point,
	/// Rest position.
	pub origin: Point,
	/// Indices of neighbors in the same set, nearest first.
	pub neighbors: Vec<usize>,
}

impl GraphNode {
	/// A node at rest at `origin`.
	pub fn at_rest(id: usize, origin: Point) -> Self {
		Self {
			id,
			position: origin,
			velocity: Point::default(),
			origin,
			neighbors: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_orders_endpoints() {
		let e = Edge::new(5, 2, 1.0);
		assert_eq!((e.a, e.b), (2, 5));
		assert!(e.fits(6));
		assert!(!e.fits(5));
	}

	#[test]
	fn normal_of_degenerate_segment_is_finite() {
		let p = Point::new(3.0, 3.0);
		let n = p.normal_to(p);
		assert!(n.x.is_finite() && n.y.is_finite());
	}

	#[test]
	fn normal_is_perpendicular_unit() {
		let n = Point::new(0.0, 0.0).normal_to(Point::new(10.0, 0.0));
		assert_eq!(n, Point::new(0.0, 1.0));
	}
}
