use crate::graph::{Graph, NamedGraph};
use crate::output::listing::INFINITY_TOKEN;
use crate::{Error, Result};
use log::debug;
use num_traits::{Float, Zero};
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const DOT_EXTENSION: &str = ".dot";

/// Writes the graph as a dot digraph.
///
/// A graph that was never loaded writes nothing; a loaded graph without
/// vertices still gets the header and footer.
pub fn write_dot<W, O>(graph: &NamedGraph<W>, output: &mut O) -> Result<()>
where
    W: Float + Zero + Debug + Copy + Display,
    O: Write,
{
    if !graph.is_loaded() {
        return Ok(());
    }

    writeln!(output, "digraph {{")?;
    for (source, edge) in graph.edges() {
        let (Some(from), Some(to)) = (graph.vertex_name(source), graph.vertex_name(edge.target)) else {
            continue;
        };
        writeln!(output, "\"{}\" -> \"{}\" [w={}]", from, to, format_weight(edge.weight))?;
    }
    writeln!(output, "}}")?;
    output.flush()?;
    Ok(())
}

/// Six decimals for finite weights, [`INFINITY_TOKEN`] otherwise
pub fn format_weight<W>(weight: W) -> String
where
    W: Float + Display,
{
    if weight.is_finite() {
        format!("{:.6}", weight)
    } else {
        INFINITY_TOKEN.to_string()
    }
}

/// Appends `.dot` unless the name already ends with it
pub fn dot_file_name(name: &str) -> PathBuf {
    if name.ends_with(DOT_EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, DOT_EXTENSION))
    }
}

/// Exports the graph to `<name>.dot` and returns the path written.
///
/// The file is created even when nothing is rendered. Any failure is reported as
/// [`Error::Export`].
pub fn export_dot<W>(graph: &NamedGraph<W>, name: &str) -> Result<PathBuf>
where
    W: Float + Zero + Debug + Copy + Display,
{
    let path = dot_file_name(name);
    let export_error = |source: std::io::Error| Error::Export {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);
    match write_dot(graph, &mut writer) {
        Ok(()) => {}
        Err(Error::Write(source)) => return Err(export_error(source)),
        Err(other) => return Err(other),
    }
    writer.flush().map_err(export_error)?;

    debug!("Exported dot description to {}", path.display());
    Ok(path)
}
