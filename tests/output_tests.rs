use rail_sssp::graph::{parser, Graph, NamedGraph};
use rail_sssp::output::{self, dot_file_name, INFINITY_TOKEN};
use std::fs;
use std::path::PathBuf;

fn create_line_graph() -> NamedGraph<f64> {
    parser::parse_str("A\nB\nC\n\n0,1,5.0\n1,2,3.0\n")
}

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> rail_sssp::Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rail_sssp_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_edge_listing() {
    let graph = create_line_graph();
    let listing = render(|out| output::write_edges(&graph, out));
    assert_eq!(listing, "A, B\nB, C\n");
}

#[test]
fn test_distance_listing() {
    let graph = create_line_graph();
    let result = graph.distances_from("A").unwrap();
    let listing = render(|out| output::write_distances(&graph, &result, out));
    assert_eq!(listing, "A, 0.00\nB, A, 5.00\nC, B, A, 8.00\n");
}

#[test]
fn test_distance_listing_marks_unreachable_vertices() {
    let graph = create_line_graph();
    let result = graph.distances_from("c").unwrap();
    let listing = render(|out| output::write_distances(&graph, &result, out));
    assert_eq!(
        listing,
        format!("A, {0}\nB, {0}\nC, 0.00\n", INFINITY_TOKEN)
    );
}

#[test]
fn test_format_distance() {
    assert_eq!(output::format_distance(4.449999999999999_f64), "4.45");
    assert_eq!(output::format_distance(0.0_f64), "0.00");
    assert_eq!(output::format_distance(f64::INFINITY), "Infinity");
}

#[test]
fn test_dot_format() {
    let graph = create_line_graph();
    let dot = render(|out| output::write_dot(&graph, out));
    assert_eq!(
        dot,
        "digraph {\n\"A\" -> \"B\" [w=5.000000]\n\"B\" -> \"C\" [w=3.000000]\n}\n"
    );
}

#[test]
fn test_dot_format_of_unloaded_graph_is_empty() {
    let graph: NamedGraph<f64> = NamedGraph::new();
    let dot = render(|out| output::write_dot(&graph, out));
    assert!(dot.is_empty());
}

#[test]
fn test_dot_format_of_loaded_graph_without_vertices() {
    let graph: NamedGraph<f64> = parser::parse_str("\n");
    assert!(graph.is_empty());
    let dot = render(|out| output::write_dot(&graph, out));
    assert_eq!(dot, "digraph {\n}\n");
}

#[test]
fn test_dot_format_of_infinite_weight() {
    let graph: NamedGraph<f64> = parser::parse_str("A\nB\n\n0,1,inf\n1,0,Infinity\n");
    assert_eq!(graph.edge_count(), 2);
    let dot = render(|out| output::write_dot(&graph, out));
    assert_eq!(
        dot,
        format!("digraph {{\n\"A\" -> \"B\" [w={0}]\n\"B\" -> \"A\" [w={0}]\n}}\n", INFINITY_TOKEN)
    );
}

#[test]
fn test_format_weight() {
    assert_eq!(output::format_weight(1.9_f64), "1.900000");
    assert_eq!(output::format_weight(f64::INFINITY), "Infinity");
}

#[test]
fn test_distance_listing_with_result_from_larger_graph() {
    let graph = create_line_graph();
    let larger: NamedGraph<f64> = parser::parse_str("A\nB\nC\nD\n\n3,2,1.0\n2,1,1.0\n1,0,1.0\n");
    let result = larger.distances_from("D").unwrap();

    // Vertex D only exists in the larger graph and is left out of the chains
    let listing = render(|out| output::write_distances(&graph, &result, out));
    assert_eq!(listing, "A, B, C, 3.00\nB, C, 2.00\nC, 1.00\n");
}

#[test]
fn test_dot_file_name() {
    assert_eq!(dot_file_name("graph"), PathBuf::from("graph.dot"));
    assert_eq!(dot_file_name("graph.dot"), PathBuf::from("graph.dot"));
}

#[test]
fn test_export_dot_writes_file() {
    let dir = scratch_dir("export");
    let graph = create_line_graph();

    let name = dir.join("network");
    let path = output::export_dot(&graph, name.to_str().unwrap()).unwrap();

    assert_eq!(path, dir.join("network.dot"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("digraph {\n"));
    assert!(content.contains("\"A\" -> \"B\" [w=5.000000]"));
    assert!(content.ends_with("}\n"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_export_dot_into_missing_directory_fails() {
    let graph = create_line_graph();
    let result = output::export_dot(&graph, "/nonexistent/rail_sssp/graph");
    assert!(matches!(result, Err(rail_sssp::Error::Export { .. })));
}
