//! Single-source shortest path as Bellman-Ford relaxation.
//!
//! gather: `weight + source distance` for one in-edge.
//! merge: `min` of two partial gathers.
//! apply: seed an unreached vertex at 0, otherwise keep strict improvements.
//! scatter: wake the target when going through this vertex is shorter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::program::{Operation, VertexProgram};
use crate::error::{AdapterError, Result};
use crate::model::graph::{
    ApplyReply, EdgeDirection, EdgesReply, GatherEdge, ResultReply, ScatterEdge, ScatterReply,
    Signal, VertexSnapshot,
};
use crate::model::Distance;

#[derive(Debug, Default, Clone, Copy)]
pub struct Sssp;

#[derive(Deserialize)]
struct Request<P> {
    params: P,
}

#[derive(Deserialize)]
struct GatherParams {
    edge: GatherEdge,
}

#[derive(Deserialize)]
struct MergeRequest {
    state: Distance,
    params: MergeParams,
}

#[derive(Deserialize)]
struct MergeParams {
    other: Distance,
}

#[derive(Deserialize)]
struct ApplyParams {
    vertex: VertexSnapshot,
    gather: Distance,
}

#[derive(Deserialize)]
struct ScatterParams {
    vertex: VertexSnapshot,
    edge: ScatterEdge,
}

fn decode<T: DeserializeOwned>(op: Operation, request: &Value) -> Result<T> {
    T::deserialize(request).map_err(|source| AdapterError::InvalidParams {
        method: op.name(),
        source,
    })
}

fn reply<T: Serialize>(body: T) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
}

impl Sssp {
    pub fn relax(edge: GatherEdge) -> Distance {
        edge.state + edge.source.state
    }

    pub fn combine(left: Distance, right: Distance) -> Distance {
        left.min(right)
    }

    /// `None` means the vertex keeps its current distance.
    pub fn improve(current: Distance, gathered: Distance) -> Option<Distance> {
        if current.is_unreached() {
            // First apply on an unreached vertex makes it the source.
            return Some(Distance::ZERO);
        }
        if gathered < current {
            return Some(gathered);
        }
        None
    }

    pub fn should_signal(vertex: Distance, edge: ScatterEdge) -> bool {
        edge.target.state > vertex + edge.state
    }
}

impl VertexProgram for Sssp {
    fn gather_edges(&self, _request: &Value) -> Result<Value> {
        reply(EdgesReply {
            edges: EdgeDirection::InEdges,
        })
    }

    fn scatter_edges(&self, _request: &Value) -> Result<Value> {
        reply(EdgesReply {
            edges: EdgeDirection::OutEdges,
        })
    }

    fn gather(&self, request: &Value) -> Result<Value> {
        let req: Request<GatherParams> = decode(Operation::Gather, request)?;
        reply(ResultReply {
            result: Self::relax(req.params.edge),
        })
    }

    fn merge(&self, request: &Value) -> Result<Value> {
        let req: MergeRequest = decode(Operation::Merge, request)?;
        reply(ResultReply {
            result: Self::combine(req.state, req.params.other),
        })
    }

    fn apply(&self, request: &Value) -> Result<Value> {
        let req: Request<ApplyParams> = decode(Operation::Apply, request)?;
        reply(ApplyReply {
            vertex: Self::improve(req.params.vertex.state, req.params.gather),
        })
    }

    fn scatter(&self, request: &Value) -> Result<Value> {
        let req: Request<ScatterParams> = decode(Operation::Scatter, request)?;
        let signal = Self::should_signal(req.params.vertex.state, req.params.edge)
            .then_some(Signal::Target);
        reply(ScatterReply { signal })
    }
}
