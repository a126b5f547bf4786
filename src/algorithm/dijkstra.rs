use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an unvisited-set linear scan.
///
/// Each step picks the unvisited vertex with the smallest tentative distance,
/// ties going to the lowest vertex ID. This is O(n^2) and meant for small graphs.
/// Relaxation uses a strict comparison, so on equal-length paths the first
/// discovered predecessor is kept.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Unvisited vertex with the minimum finite distance
    fn next_vertex<W>(distances: &[W], visited: &[bool]) -> Option<usize>
    where
        W: Float,
    {
        distances
            .iter()
            .enumerate()
            .filter(|&(v, _)| !visited[v])
            .min_by_key(|&(_, &d)| OrderedFloat(d))
            .filter(|&(_, &d)| d.is_finite())
            .map(|(v, _)| v)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<W> = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        // Distance to source is 0
        distances[source] = W::zero();

        let mut current = Some(source);
        while let Some(u) = current {
            let dist_u = distances[u];

            // Relax edges towards vertices that are not settled yet
            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }
                let new_dist = dist_u + weight;
                if new_dist < distances[v] {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                }
            }

            visited[u] = true;
            current = Self::next_vertex(&distances, &visited);
        }

        let result = ShortestPathResult {
            distances,
            predecessors,
            source,
        };
        debug!(
            "Dijkstra from vertex {} reached {} of {} vertices",
            source,
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}
