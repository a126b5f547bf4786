use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// This is the per-run state of one query, indexed by vertex ID. The graph
/// itself is left untouched, so repeated queries never see each other's state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, infinite when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance of a vertex from the source, `None` for unknown IDs
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Follows predecessors from `vertex` back towards the source.
    ///
    /// The chain starts with `vertex` itself; an unreachable vertex yields a
    /// single-element chain. Empty for unknown IDs.
    pub fn predecessor_chain(&self, vertex: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = if vertex < self.predecessors.len() { Some(vertex) } else { None };

        while let Some(v) = current {
            chain.push(v);
            // A tree has at most one entry per vertex
            if chain.len() > self.predecessors.len() {
                break;
            }
            current = self.predecessors[v];
        }

        chain
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = result.predecessor_chain(target);
        if path.last() != Some(&result.source) {
            return None;
        }
        path.reverse();

        Some(path)
    }
}
