use crate::services::Operation;

/// Method names the host engine may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Op(Operation),
    Exit,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "gather_edges" => Command::Op(Operation::GatherEdges),
            "scatter_edges" => Command::Op(Operation::ScatterEdges),
            "gather" => Command::Op(Operation::Gather),
            "merge" => Command::Op(Operation::Merge),
            "apply" => Command::Op(Operation::Apply),
            "scatter" => Command::Op(Operation::Scatter),
            "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}
