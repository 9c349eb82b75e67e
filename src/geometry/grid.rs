use std::collections::HashMap;

use super::types::Point;

/// Uniform grid bucketing point indices by square cell.
///
/// Neighbor queries only visit the 3x3 block around a cell, so with a cell
/// side equal to the search radius no in-range point is missed.
#[derive(Debug, Default)]
pub struct SpatialGrid {
	cell: f64,
	buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
	/// Buckets `points` into cells of side `cell`.
	pub fn new(points: &[Point], cell: f64) -> Self {
		let cell = if cell > 0.0 { cell } else { 1.0 };
		let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
		for (i, &p) in points.iter().enumerate() {
			buckets.entry(Self::key(p, cell)).or_default().push(i);
		}
		Self { cell, buckets }
	}

	fn key(p: Point, cell: f64) -> (i64, i64) {
		((p.x / cell).floor() as i64, (p.y / cell).floor() as i64)
	}

	/// Indices bucketed in the 3x3 block of cells around `p`.
	pub fn around(&self, p: Point) -> impl Iterator<Item = usize> + '_ {
		let (ix, iy) = Self::key(p, self.cell);
		(iy - 1..=iy + 1)
			.flat_map(move |gy| (ix - 1..=ix + 1).map(move |gx| (gx, gy)))
			.filter_map(move |k| self.buckets.get(&k))
			.flatten()
			.copied()
	}

	/// Number of occupied cells.
	pub fn occupied(&self) -> usize {
		self.buckets.len()
	}
}

/// Per-node neighbor lists: up to `k` nodes within `max_dist`, nearest first.
pub fn grid_neighbors(points: &[Point], max_dist: f64, k: usize) -> Vec<Vec<usize>> {
	if max_dist <= 0.0 || k == 0 {
		return vec![Vec::new(); points.len()];
	}
	let grid = SpatialGrid::new(points, max_dist);
	let max_sq = max_dist * max_dist;
	points
		.iter()
		.enumerate()
		.map(|(i, &p)| {
			let mut candidates: Vec<(usize, f64)> = grid
				.around(p)
				.filter(|&j| j != i)
				.map(|j| (j, p.distance_sq(points[j])))
				.filter(|&(_, d2)| d2 <= max_sq)
				.collect();
			candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
			candidates.into_iter().take(k).map(|(j, _)| j).collect()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finds_close_points_across_cell_borders() {
		let pts = vec![
			Point::new(99.0, 99.0),
			Point::new(101.0, 101.0),
			Point::new(500.0, 500.0),
		];
		let lists = grid_neighbors(&pts, 100.0, 3);
		assert_eq!(lists[0], vec![1]);
		assert_eq!(lists[1], vec![0]);
		assert!(lists[2].is_empty());
	}

	#[test]
	fn caps_and_orders_by_distance() {
		let pts = vec![
			Point::new(0.0, 0.0),
			Point::new(30.0, 0.0),
			Point::new(10.0, 0.0),
			Point::new(20.0, 0.0),
		];
		let lists = grid_neighbors(&pts, 50.0, 2);
		assert_eq!(lists[0], vec![2, 3]);
	}

	#[test]
	fn handles_negative_coordinates_and_empty_input() {
		let pts = vec![Point::new(-5.0, -5.0), Point::new(5.0, 5.0)];
		let lists = grid_neighbors(&pts, 20.0, 1);
		assert_eq!(lists, vec![vec![1], vec![0]]);
		assert!(grid_neighbors(&[], 20.0, 3).is_empty());
		assert_eq!(SpatialGrid::new(&pts, 20.0).occupied(), 2);
	}
}
