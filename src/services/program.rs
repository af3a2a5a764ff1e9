//! The vertex-program capability the dispatcher talks to.

use serde_json::Value;

use crate::error::Result;

/// One gather-apply-scatter operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GatherEdges,
    ScatterEdges,
    Gather,
    Merge,
    Apply,
    Scatter,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::GatherEdges => "gather_edges",
            Operation::ScatterEdges => "scatter_edges",
            Operation::Gather => "gather",
            Operation::Merge => "merge",
            Operation::Apply => "apply",
            Operation::Scatter => "scatter",
        }
    }
}

/// A vertex program. Each method receives the whole request object and
/// returns the reply object. Implementations hold no state between calls.
pub trait VertexProgram {
    /// Edges the gather phase walks.
    fn gather_edges(&self, request: &Value) -> Result<Value>;

    /// Edges the scatter phase walks.
    fn scatter_edges(&self, request: &Value) -> Result<Value>;

    /// Contribution of one edge.
    fn gather(&self, request: &Value) -> Result<Value>;

    /// Combines two partial gathers. Must be associative and commutative.
    fn merge(&self, request: &Value) -> Result<Value>;

    fn apply(&self, request: &Value) -> Result<Value>;

    fn scatter(&self, request: &Value) -> Result<Value>;

    fn handle(&self, op: Operation, request: &Value) -> Result<Value> {
        match op {
            Operation::GatherEdges => self.gather_edges(request),
            Operation::ScatterEdges => self.scatter_edges(request),
            Operation::Gather => self.gather(request),
            Operation::Merge => self.merge(request),
            Operation::Apply => self.apply(request),
            Operation::Scatter => self.scatter(request),
        }
    }
}
