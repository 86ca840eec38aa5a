//! Graphs with pluggable edge storage.

pub use container::{EdgeContainer, LabeledEdges, VertexSet};
pub use error::GraphError;
pub use graph::Graph;
pub use unlabeled::{Reciprocity, UnlabeledGraph};

pub mod error;

mod container;
mod graph;
mod unlabeled;

use crate::types::Id;

/// Read-only neighborhood queries shared by every graph flavor.
pub trait Adjacency {
    type Vertex: Id;

    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    /// Iterates over the targets of the outgoing connections of `vertex`.
    /// Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: &Self::Vertex) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    fn contains_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool;
}
