pub mod traits;
pub mod vertex;
pub mod named;
pub mod parser;

pub use traits::{Graph, MutableGraph};
pub use vertex::{Edge, Vertex};
pub use named::NamedGraph;
