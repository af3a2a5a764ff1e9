//! SSSP vertex program for a gather-apply-scatter engine.
//!
//! The engine runs this crate's binary as a child process and talks to it
//! over stdin/stdout with length-prefixed JSON frames (see [`transport`]).
//! Each request names a GAS operation; [`protocol::serve`] routes it to
//! [`services::Sssp`] and writes the reply back.

pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;
pub mod transport;

pub use config::Config;
pub use error::{AdapterError, Result};
pub use protocol::{serve, SessionEnd};
pub use services::{Sssp, VertexProgram};
