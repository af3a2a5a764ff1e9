pub mod program;
pub mod sssp;

pub use program::{Operation, VertexProgram};
pub use sssp::Sssp;
