//! Anchor points and the sparse neighbor graphs drawn between them.

mod graph;
mod grid;
mod types;

pub use graph::{EdgeParams, build_edges, chain_edges, edges_from_neighbors, nearest_edges};
pub use grid::{SpatialGrid, grid_neighbors};
pub use types::{Edge, GraphNode, Point};
