//! Rail SSSP - weighted directed graphs loaded from flat text files
//!
//! A graph file lists one vertex name per line, a blank separator line, then
//! `source,target,weight` edge lines. The library computes single-source
//! shortest paths over the loaded graph and renders it either as a plain edge
//! listing or as a dot-format description for external visualization.

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod output;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use config::Config;
/// Re-export main types for convenient use
pub use graph::named::NamedGraph;

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot read graph file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read graph description: {0}")]
    Read(#[source] std::io::Error),

    #[error("No such vertex with name {0}")]
    VertexNotFound(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Cannot export graph to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
