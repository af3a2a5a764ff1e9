use serde::{Deserialize, Serialize};

use super::distance::Distance;

/// Snapshot of a vertex as the host engine sends it.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct VertexSnapshot {
    pub state: Distance,
}

/// Edge seen from the gathering vertex: weight plus the source endpoint.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct GatherEdge {
    pub state: Distance,
    pub source: VertexSnapshot,
}

/// Edge seen from the scattering vertex: weight plus the target endpoint.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ScatterEdge {
    pub state: Distance,
    pub target: VertexSnapshot,
}

/// Which edges the engine walks for a gather or scatter phase.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeDirection {
    InEdges,
    OutEdges,
}

/// Endpoint the engine should reactivate after a scatter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Target,
}

#[derive(Debug, Serialize)]
pub struct EdgesReply {
    pub edges: EdgeDirection,
}

#[derive(Debug, Serialize)]
pub struct ResultReply {
    pub result: Distance,
}

/// `{}` when the vertex did not improve.
#[derive(Debug, Serialize, Default)]
pub struct ApplyReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex: Option<Distance>,
}

/// `{}` when no neighbour needs waking.
#[derive(Debug, Serialize, Default)]
pub struct ScatterReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
}
