use crate::errors::PathSumError;
use super::GraphNodeMap;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug, iter};
use num_traits::{CheckedAdd, Zero};
use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;



/// Identify the cheapest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until a node meets the goal criteria
/// Edge costs must be non-negative, otherwise finalized nodes may still improve
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathSumError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal)?;

    match goal_index {
        Some(goal_index) => walk_parents(&node_map, goal_index),
        None => Err(PathSumError::NoPathFound),
    }
}


/// Return a partial map of the graph up to the goal node
/// Nodes with lower cost than the goal node will be included
pub fn dijkstra_nodes_partial<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<GraphNodeMap<N, C>, PathSumError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, goal)?;

    Ok(node_map)
}

/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> Result<GraphNodeMap<N, C>, PathSumError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    {

    // No goal - runs until the frontier is empty
    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false)?;

    Ok(node_map)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<(GraphNodeMap<N, C>, Option<usize>), PathSumError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Frontier - binary heap sorts Biggest to Smallest, NodeId reverses it
    // Stale entries stay in the heap and are skipped when popped
    let mut frontier: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // Score table and parent map in one
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    frontier.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    while let Some(NodeId { cost, index }) = frontier.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            return Err(PathSumError::NoPathFound);
        };

        // A cheaper entry for this node was already expanded
        if cost > c {
            continue;
        }

        trace!("finalized {node:?} at cost {c:?}");

        if goal_fn(node) {
            return Ok((nodes_map, Some(index)));
        }

        for (neighbor, edge_cost) in neighbors(node) {

            let new_cost = c.checked_add(&edge_cost).ok_or(PathSumError::CostOverflow)?;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            frontier.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok((nodes_map, None))
}


/// Nodes from the root of the search tree down to `goal_index`
/// Parent links form a tree, the walk is capped at the map size all the same
fn walk_parents<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathSumError>
where
    N: Clone,
{
    let parent_of = |&i: &usize| {
        node_map
            .get_index(i)
            .map(|(_, &(parent, _))| parent)
            .filter(|&parent| parent != usize::MAX)
    };

    let mut path = iter::successors(Some(goal_index), parent_of)
        .take(node_map.len().max(1))
        .map(|i| {
            node_map
                .get_index(i)
                .map(|(node, _)| node.clone())
                .ok_or(PathSumError::NoPathFound)
        })
        .collect::<Result<Vec<N>, _>>()?;

    path.reverse();
    Ok(path)
}


/// Frontier entry
/// - for ordering we only need cost and a way to identify the node
/// - the node itself lives in the node map at `index`
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the max-heap pops the cheapest entry first
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Cell = (usize, usize);

    // 3x3 weights, moving right or down, paying the weight of the cell entered
    //   1 9 1
    //   1 9 1
    //   1 1 1
    const WEIGHTS: [[u64; 3]; 3] = [[1, 9, 1], [1, 9, 1], [1, 1, 1]];

    fn forward(&(r, c): &Cell) -> Vec<(Cell, u64)> {
        let mut out = Vec::new();
        if r + 1 < 3 {
            out.push(((r + 1, c), WEIGHTS[r + 1][c]));
        }
        if c + 1 < 3 {
            out.push(((r, c + 1), WEIGHTS[r][c + 1]));
        }
        out
    }

    #[test]
    fn test_dijkstra_hugs_the_cheap_border() {
        let path = dijkstra((0, 0), forward, |n| *n == (2, 2)).unwrap();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
    }

    #[rstest]
    #[case((0, 0), 0)]
    #[case((1, 0), 1)]
    #[case((0, 1), 9)]
    #[case((2, 0), 2)]
    #[case((1, 1), 10)]
    #[case((2, 2), 4)]
    #[case((0, 2), 10)]
    fn test_full_map_costs(#[case] cell: Cell, #[case] expected: u64) {
        let node_map = dijkstra_nodes_full((0, 0), forward).unwrap();
        assert_eq!(node_map.len(), 9);
        assert_eq!(node_map.get(&cell).unwrap().1, expected);
    }

    #[test]
    fn test_cost_only_improves_on_revisit() {
        // two routes into D: A->B->D (1+5) and A->C->D (3+1)
        let edges = |n: &char| -> Vec<(char, u32)> {
            match n {
                'A' => vec![('B', 1), ('C', 3)],
                'B' => vec![('D', 5)],
                'C' => vec![('D', 1)],
                _ => vec![],
            }
        };
        let node_map = dijkstra_nodes_partial('A', edges, |n| *n == 'D').unwrap();
        let (parent, cost) = node_map[&'D'];
        assert_eq!(cost, 4);
        assert_eq!(node_map.get_index(parent).unwrap().0, &'C');
    }

    #[test]
    fn test_cycles_terminate() {
        // ring of four cells with an exit from the last one
        let ring = |n: &u8| -> Vec<(u8, u64)> {
            match *n {
                0..=3 => vec![((n + 1) % 4, 1), (n + 10, if *n == 3 { 2 } else { 100 })],
                _ => vec![],
            }
        };
        let path = dijkstra(0u8, ring, |n| *n == 13).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 13]);
    }

    #[test]
    fn test_partial_map_stops_at_goal() {
        // goal is reached at cost 2 before the expensive branch is expanded
        let edges = |n: &char| -> Vec<(char, u32)> {
            match n {
                'A' => vec![('B', 1), ('C', 10)],
                'B' => vec![('D', 1)],
                'C' => vec![('E', 5)],
                _ => vec![],
            }
        };
        let node_map = dijkstra_nodes_partial('A', edges, |n| *n == 'D').unwrap();
        assert!(node_map.contains_key(&'C'));
        assert!(!node_map.contains_key(&'E'));
    }

    #[test]
    fn test_overflowing_cost_is_an_error() {
        let edges = |n: &u8| -> Vec<(u8, u8)> {
            match *n {
                0 => vec![(1, 200)],
                1 => vec![(2, 100)],
                _ => vec![],
            }
        };
        assert!(matches!(dijkstra(0u8, edges, |n| *n == 2), Err(PathSumError::CostOverflow)));
        // the goal short of the overflow is still fine
        assert_eq!(dijkstra(0u8, edges, |n| *n == 1).unwrap(), vec![0, 1]);
    }

    fn tree() -> GraphNodeMap<Cell, u64> {
        // (0,0) -> (0,1) -> (1,1), with (1,0) hanging off the root
        let mut node_map = GraphNodeMap::default();
        let root = node_map.insert_full((0, 0), (usize::MAX, 0)).0;
        let right = node_map.insert_full((0, 1), (root, 5)).0;
        node_map.insert_full((1, 0), (root, 9));
        node_map.insert_full((1, 1), (right, 7));
        node_map
    }

    #[rstest]
    #[case(3, vec![(0, 0), (0, 1), (1, 1)])]
    #[case(2, vec![(0, 0), (1, 0)])]
    #[case(0, vec![(0, 0)])]
    fn test_walk_parents(#[case] goal_index: usize, #[case] expected: Vec<Cell>) {
        assert_eq!(walk_parents(&tree(), goal_index).unwrap(), expected);
    }

    #[rstest]
    #[case(42)]
    #[case(usize::MAX)]
    fn test_walk_from_unknown_index(#[case] goal_index: usize) {
        assert!(matches!(walk_parents(&tree(), goal_index), Err(PathSumError::NoPathFound)));
    }

    #[test]
    fn test_start_can_be_goal() {
        let path = dijkstra((1, 1), forward, |_| true).unwrap();
        assert_eq!(path, vec![(1, 1)]);
    }

    #[test]
    fn test_unreachable_goal() {
        // right/down moves can never return to the origin
        let result = dijkstra((1, 1), forward, |n| *n == (0, 0));
        assert!(matches!(result, Err(PathSumError::NoPathFound)));
    }
}
