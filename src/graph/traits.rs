use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph with named vertices
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of the first edge between two vertices if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns the name of a vertex
    fn vertex_name(&self, vertex: usize) -> Option<&str>;

    /// Finds the first vertex whose name matches, ignoring case
    fn find_vertex(&self, name: &str) -> Option<usize>;
}

/// Trait for building a graph. Vertices and edges can only be appended.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a named vertex to the graph and returns its ID
    fn add_vertex(&mut self, name: &str) -> usize;

    /// Appends a directed edge between vertices with the given weight.
    /// Returns false when either endpoint is unknown or the weight is negative or NaN.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
