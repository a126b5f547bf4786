use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, NamedGraph};
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::{Debug, Display};
use std::io::Write;

/// Printed in place of an infinite distance
pub const INFINITY_TOKEN: &str = "Infinity";

/// Writes one `source, target` line per edge, in vertex order then edge order
pub fn write_edges<W, O>(graph: &NamedGraph<W>, output: &mut O) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    O: Write,
{
    for (source, edge) in graph.edges() {
        if let (Some(from), Some(to)) = (graph.vertex_name(source), graph.vertex_name(edge.target)) {
            writeln!(output, "{}, {}", from, to)?;
        }
    }
    Ok(())
}

/// Writes, for every vertex, its predecessor chain back to the source
/// followed by its distance with two decimals: `C, B, A, 8.00`.
pub fn write_distances<W, O>(
    graph: &NamedGraph<W>,
    result: &ShortestPathResult<W>,
    output: &mut O,
) -> Result<()>
where
    W: Float + Zero + Debug + Copy + Display,
    O: Write,
{
    for vertex in 0..graph.vertex_count() {
        // IDs the graph does not know are left out of the chain
        for name in result
            .predecessor_chain(vertex)
            .into_iter()
            .filter_map(|v| graph.vertex_name(v))
        {
            write!(output, "{}, ", name)?;
        }
        let distance = result.distance(vertex).unwrap_or_else(W::infinity);
        writeln!(output, "{}", format_distance(distance))?;
    }
    Ok(())
}

/// Two decimals for finite values, [`INFINITY_TOKEN`] otherwise
pub fn format_distance<W>(distance: W) -> String
where
    W: Float + Display,
{
    if distance.is_finite() {
        format!("{:.2}", distance)
    } else {
        INFINITY_TOKEN.to_string()
    }
}
