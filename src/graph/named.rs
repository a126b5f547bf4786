use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Edge, Vertex};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph whose vertices carry names.
///
/// Vertex IDs are positions in insertion order and stay stable for the
/// lifetime of the graph. The structure is append-only; shortest-path runs
/// never touch it and return their state in a separate [`ShortestPathResult`].
#[derive(Debug, Clone)]
pub struct NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertices: Vec<Vertex<W>>,
    loaded: bool,
}

impl<W> NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        NamedGraph {
            vertices: Vec::new(),
            loaded: false,
        }
    }

    /// Creates a graph with one vertex per name, in order
    pub fn with_vertices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = NamedGraph::new();
        for name in names {
            graph.add_vertex(name.as_ref());
        }
        graph
    }

    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    pub fn vertex(&self, vertex: usize) -> Option<&Vertex<W>> {
        self.vertices.get(vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True once the graph has been parsed or given a vertex, even if empty
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Iterates over all edges as `(source, edge)`, in vertex order then edge order
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge<W>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(source, vertex)| vertex.edges().iter().map(move |edge| (source, edge)))
    }

    /// Resolves `start` by case-insensitive name and computes shortest paths from it.
    ///
    /// Fails with [`Error::VertexNotFound`] before any computation if no vertex matches.
    pub fn distances_from(&self, start: &str) -> Result<ShortestPathResult<W>> {
        let source = self
            .find_vertex(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;
        self.distances_from_index(source)
    }

    /// Computes shortest paths from the vertex with the given ID
    pub fn distances_from_index(&self, source: usize) -> Result<ShortestPathResult<W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }
}

impl<W> Default for NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        NamedGraph::new()
    }
}

impl<W> Graph<W> for NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges().len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(vertex) = self.vertices.get(vertex) {
            Box::new(vertex.edges().iter().map(|edge| (edge.target, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertices.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.vertices
            .get(from)?
            .edges()
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    fn vertex_name(&self, vertex: usize) -> Option<&str> {
        self.vertices.get(vertex).map(Vertex::name)
    }

    fn find_vertex(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex.matches(name))
    }
}

impl<W> MutableGraph<W> for NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, name: &str) -> usize {
        let new_id = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.loaded = true;
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight.is_nan() || weight < W::zero() {
            return false;
        }

        self.vertices[from].push_edge(Edge::new(to, weight));
        true
    }
}
