pub mod listing;
pub mod dot;

pub use listing::{format_distance, write_distances, write_edges, INFINITY_TOKEN};
pub use dot::{dot_file_name, export_dot, format_weight, write_dot};
