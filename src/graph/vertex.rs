use num_traits::Float;
use std::fmt::Debug;

/// A directed, weighted connection to another vertex of the same graph.
///
/// The target is held as a vertex index; the graph owns every vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Debug + Copy,
{
    pub target: usize,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: Float + Debug + Copy,
{
    pub fn new(target: usize, weight: W) -> Self {
        Edge { target, weight }
    }
}

/// A named node with its outgoing edges in insertion order
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Float + Debug + Copy,
{
    name: String,
    edges: Vec<Edge<W>>,
}

impl<W> Vertex<W>
where
    W: Float + Debug + Copy,
{
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub(crate) fn push_edge(&mut self, edge: Edge<W>) {
        self.edges.push(edge);
    }

    /// Case-insensitive name comparison used for lookups
    pub fn matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}
