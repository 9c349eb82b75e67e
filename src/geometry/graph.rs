use rand::Rng;

use super::types::{Edge, Point};

/// Upper bound (exclusive) of an edge seed.
const SEED_RANGE: f64 = 1000.0;

/// How a set of anchors is stitched together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeParams {
	/// Nearest neighbors considered per node.
	pub k: usize,
	/// Connect `i` to `i + 1` whenever `i % chain_stride == 0`.
	pub chain_stride: usize,
}

impl Default for EdgeParams {
	fn default() -> Self {
		Self { k: 1, chain_stride: 1 }
	}
}

fn seed(rng: &mut impl Rng) -> f64 {
	rng.gen_range(0.0..SEED_RANGE)
}

/// Sequential edges along the anchor order.
pub fn chain_edges(n: usize, stride: usize, rng: &mut impl Rng) -> Vec<Edge> {
	let stride = stride.max(1);
	(0..n.saturating_sub(1))
		.filter(|i| i % stride == 0)
		.map(|i| Edge::new(i, i + 1, seed(rng)))
		.collect()
}

/// k-nearest edges.
///
/// Each node looks at its `k` nearest others and keeps only those with a
/// higher index, so an undirected pair is emitted at most once per side.
pub fn nearest_edges(points: &[Point], k: usize, rng: &mut impl Rng) -> Vec<Edge> {
	let mut edges = Vec::new();
	if k == 0 {
		return edges;
	}
	for (i, &p) in points.iter().enumerate() {
		let mut dists: Vec<(usize, f64)> = points
			.iter()
			.enumerate()
			.filter(|&(j, _)| j != i)
			.map(|(j, &q)| (j, p.distance_sq(q)))
			.collect();
		dists.sort_by(|a, b| a.1.total_cmp(&b.1));
		for &(j, _) in dists.iter().take(k) {
			if j > i {
				edges.push(Edge::new(i, j, seed(rng)));
			}
		}
	}
	edges
}

/// Chain edges followed by nearest edges.
pub fn build_edges(points: &[Point], params: &EdgeParams, rng: &mut impl Rng) -> Vec<Edge> {
	if points.len() <= 1 {
		return Vec::new();
	}
	let mut edges = chain_edges(points.len(), params.chain_stride, rng);
	edges.extend(nearest_edges(points, params.k, rng));
	edges
}

/// Turns per-node neighbor lists into edges, keeping `j > i` only.
pub fn edges_from_neighbors(neighbors: &[Vec<usize>], rng: &mut impl Rng) -> Vec<Edge> {
	let len = neighbors.len();
	neighbors
		.iter()
		.enumerate()
		.flat_map(|(i, list)| list.iter().map(move |&j| (i, j)))
		.filter(|&(i, j)| j > i && j < len)
		.map(|(i, j)| Edge::new(i, j, seed(rng)))
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn line(n: usize) -> Vec<Point> {
		(0..n).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect()
	}

	#[test]
	fn chain_with_unit_stride_links_every_pair() {
		let mut rng = StdRng::seed_from_u64(1);
		let pairs: Vec<_> = chain_edges(4, 1, &mut rng).iter().map(|e| (e.a, e.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
	}

	#[test]
	fn chain_stride_thins_links() {
		let mut rng = StdRng::seed_from_u64(1);
		let pairs: Vec<_> = chain_edges(6, 2, &mut rng).iter().map(|e| (e.a, e.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5)]);
	}

	#[test]
	fn zero_stride_is_treated_as_one() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(chain_edges(3, 0, &mut rng).len(), 2);
	}

	#[test]
	fn nearest_keeps_higher_indices_only() {
		let mut rng = StdRng::seed_from_u64(7);
		let pts = line(4);
		let edges = nearest_edges(&pts, 1, &mut rng);
		// node 3's nearest is 2, which is lower, so it adds nothing
		let pairs: Vec<_> = edges.iter().map(|e| (e.a, e.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
		assert!(edges.iter().all(|e| (0.0..1000.0).contains(&e.seed)));
	}

	#[test]
	fn degenerate_inputs_yield_no_edges() {
		let mut rng = StdRng::seed_from_u64(3);
		let params = EdgeParams { k: 2, chain_stride: 1 };
		assert!(build_edges(&[], &params, &mut rng).is_empty());
		assert!(build_edges(&[Point::new(1.0, 1.0)], &params, &mut rng).is_empty());
		assert!(nearest_edges(&line(5), 0, &mut rng).is_empty());
	}

	#[test]
	fn neighbor_lists_drop_stale_indices() {
		let mut rng = StdRng::seed_from_u64(3);
		let lists = vec![vec![1, 9], vec![0, 2], vec![1]];
		let pairs: Vec<_> = edges_from_neighbors(&lists, &mut rng)
			.iter()
			.map(|e| (e.a, e.b))
			.collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod props {
		use proptest::prelude::*;

		use super::*;

		fn anchors() -> impl Strategy<Value = Vec<Point>> {
			prop::collection::vec((0.0f64..2000.0, 0.0f64..2000.0), 0..40)
				.prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
		}

		proptest! {
			#[test]
			fn rebuilt_edges_always_fit_current_anchors(
				sets in prop::collection::vec(anchors(), 1..6),
				k in 0usize..4,
				stride in 0usize..4,
			) {
				let mut rng = StdRng::seed_from_u64(11);
				let params = EdgeParams { k, chain_stride: stride };
				for pts in &sets {
					let edges = build_edges(pts, &params, &mut rng);
					prop_assert!(edges.iter().all(|e| e.fits(pts.len()) && e.a < e.b));
				}
			}
		}
	}
}
