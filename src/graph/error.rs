//! Error management.

use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[display(fmt = "no edge container factory is set for the graph")]
    MissingFactory,
    #[display(fmt = "absent {} passed to a graph mutation", _0)]
    AbsentArgument(&'static str),
    #[display(fmt = "edge {} does not match target vertex {}", edge, target)]
    EdgeMismatch { target: String, edge: String },
}

impl std::error::Error for GraphError {}

pub type Result<T> = std::result::Result<T, GraphError>;
