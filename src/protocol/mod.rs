use std::io::{BufRead, Write};

use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{AdapterError, Result};
use crate::services::VertexProgram;
use crate::transport::{self, ReadOutcome};

mod command;
pub use command::Command;

/// What to do after a request has been handled.
#[derive(Debug, PartialEq)]
pub enum Dispatch {
    Reply(Value),
    Exit,
}

/// How a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The host sent `exit`.
    Exit,
    /// The pipe closed between requests.
    EndOfStream,
}

fn get_method(req: &Value) -> Option<&str> {
    req.get("method").and_then(|v| v.as_str())
}

/// Routes one decoded request. Unknown methods get `{}`.
pub fn dispatch<P: VertexProgram + ?Sized>(program: &P, req: &Value) -> Result<Dispatch> {
    let method = get_method(req).ok_or(AdapterError::MissingMethod)?;

    match Command::from(method) {
        Command::Exit => Ok(Dispatch::Exit),
        Command::Op(op) => program.handle(op, req).map(Dispatch::Reply),
        Command::Unknown => {
            tracing::debug!(method, "unsupported method");
            Ok(Dispatch::Reply(json!({})))
        }
    }
}

/// Serves requests until `exit`, end of stream or the first error.
pub fn serve<R, W, P>(
    reader: &mut R,
    writer: &mut W,
    program: &P,
    config: &Config,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    P: VertexProgram + ?Sized,
{
    loop {
        let req = match transport::read_message(reader, config.max_message_bytes)? {
            ReadOutcome::Message(v) => v,
            ReadOutcome::EndOfStream => {
                tracing::info!("pipe closed");
                return Ok(SessionEnd::EndOfStream);
            }
        };
        tracing::debug!(request = %req, "received");

        match dispatch(program, &req)? {
            Dispatch::Exit => {
                tracing::info!("exit requested");
                return Ok(SessionEnd::Exit);
            }
            Dispatch::Reply(resp) => {
                tracing::debug!(response = %resp, "reply");
                transport::write_message(writer, &resp)?;
            }
        }
    }
}
