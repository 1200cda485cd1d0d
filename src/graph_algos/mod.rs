
pub mod dijkstra;

pub use dijkstra::{dijkstra, dijkstra_nodes_full, dijkstra_nodes_partial};

use crate::collections::FxIndexMap;

/// Type alias for the node map built by the search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map (usize::MAX for the root)
/// - cost is the best known total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
