//! Loading graphs from their flat text description.
//!
//! The format is a block of vertex names, one per line, terminated by the first
//! blank line, followed by `source_index,target_index,weight` edge lines:
//!
//! ```text
//! A
//! B
//! C
//!
//! 0,1,5.0
//! 1,2,3.0
//! ```
//!
//! Edge lines that cannot be used are skipped without error: fewer than three
//! fields, a field that does not parse (including negative indices), an index
//! past the last vertex, or a weight the graph refuses.

use crate::graph::named::NamedGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::{debug, trace};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Reads and parses the graph file at `path`.
///
/// The file is read in one scoped operation; a missing or unreadable file is an error.
pub fn read_file<W, P>(path: P) -> Result<NamedGraph<W>>
where
    W: Float + Zero + Debug + Copy + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} bytes from {}", content.len(), path.display());
    Ok(parse_str(&content))
}

/// Reads a whole graph description from `reader` and parses it
pub fn read_from<W, R>(mut reader: R) -> Result<NamedGraph<W>>
where
    W: Float + Zero + Debug + Copy + FromStr,
    R: Read,
{
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(Error::Read)?;
    Ok(parse_str(&content))
}

/// Parses a graph description. Never fails: unusable edge lines are dropped.
pub fn parse_str<W>(content: &str) -> NamedGraph<W>
where
    W: Float + Zero + Debug + Copy + FromStr,
{
    let mut lines = content.lines();
    let mut graph: NamedGraph<W> = NamedGraph::new();
    graph.mark_loaded();

    for name in lines.by_ref() {
        if is_blank(name) {
            break;
        }
        graph.add_vertex(name);
    }

    let mut skipped = 0usize;
    for line in lines.filter(|line| !is_blank(line)) {
        let added = parse_edge_line(line)
            .map(|(source, target, weight)| graph.add_edge(source, target, weight))
            .unwrap_or(false);
        if !added {
            trace!("Skipping edge line {:?}", line);
            skipped += 1;
        }
    }

    debug!(
        "Parsed graph with {} vertices and {} edges ({} edge lines skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        skipped
    );
    graph
}

/// Splits `source,target,weight` into typed fields; extra fields are ignored
fn parse_edge_line<W>(line: &str) -> Option<(usize, usize, W)>
where
    W: FromStr,
{
    let mut fields = line.split(',').map(str::trim);
    let source = fields.next()?.parse().ok()?;
    let target = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;
    Some((source, target, weight))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl<W> FromStr for NamedGraph<W>
where
    W: Float + Zero + Debug + Copy + FromStr,
{
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        Ok(parse_str(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_line_fields_are_trimmed() {
        assert_eq!(parse_edge_line::<f64>(" 0 , 2 ,\t1.5 "), Some((0, 2, 1.5)));
    }

    #[test]
    fn edge_line_ignores_extra_fields() {
        assert_eq!(parse_edge_line::<f64>("1,0,2.0,express"), Some((1, 0, 2.0)));
    }

    #[test]
    fn edge_line_rejects_short_or_malformed_input() {
        assert_eq!(parse_edge_line::<f64>("0,1"), None);
        assert_eq!(parse_edge_line::<f64>("0,one,1.0"), None);
        assert_eq!(parse_edge_line::<f64>("-1,0,1.0"), None);
        assert_eq!(parse_edge_line::<f64>("0,1,fast"), None);
    }
}
