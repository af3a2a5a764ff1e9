pub mod distance;
pub mod graph;

pub use distance::{format_distance, parse_distance, Distance, INFINITY};
