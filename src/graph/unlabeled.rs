use super::{
    error::{GraphError, Result},
    Adjacency, EdgeContainer, Graph, VertexSet,
};
use crate::types::Id;
use itertools::Itertools;
use log::debug;
use std::{collections::hash_map::Keys, fmt::Display};

/// How a connection `u -> v` is judged reciprocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reciprocity {
    /// `v` is known and has at least one outgoing connection.
    AnyOutgoing,
    /// `v` has a connection back to `u`.
    Mutual,
}

impl Default for Reciprocity {
    fn default() -> Self {
        Reciprocity::AnyOutgoing
    }
}

/// A graph whose edges are identified by their target vertex.
pub struct UnlabeledGraph<V> {
    graph: Graph<V, V, VertexSet<V>>,
}

impl<V: Id> UnlabeledGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(VertexSet::new),
        }
    }

    pub fn vertex_set(&self) -> Keys<'_, V, VertexSet<V>> {
        self.graph.vertex_set()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    pub fn edges(&self, vertex: &V) -> Option<&VertexSet<V>> {
        self.graph.edges(vertex)
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        self.graph.add_vertex(vertex)
    }

    /// Adds the connection `source -> target`.
    pub fn add_connection(&mut self, source: V, target: V) -> Result<()> {
        let edge = target.clone();
        self.graph.add_connection(source, target, edge)
    }

    /// Adds the connection `source -> target` identified by `edge`, which must
    /// be `target` itself.
    pub fn add_connection_with_edge(&mut self, source: V, target: V, edge: V) -> Result<()> {
        if target != edge {
            return Err(GraphError::EdgeMismatch {
                target: format!("{:?}", target),
                edge: format!("{:?}", edge),
            });
        }
        self.graph.add_connection(source, target, edge)
    }

    /// Returns `false` if `source` is unknown or has no outgoing connection.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        match self.graph.edges(source) {
            Some(edges) if !edges.is_empty() => edges.contains_edge(target),
            _ => false,
        }
    }

    /// Removes every connection `u -> v` whose target `v` is unknown or has no
    /// outgoing connection, and returns the number of removed connections.
    ///
    /// Removing connections can leave another vertex without outgoing
    /// connections, so the scan repeats until nothing changes.
    pub fn remove_non_bidirectional_connections(&mut self) -> usize {
        self.remove_connections_while(|graph, _, target| {
            graph.edges(target).map_or(true, |edges| edges.is_empty())
        })
    }

    /// Removes every connection `u -> v` without a connection `v -> u`, and
    /// returns the number of removed connections.
    pub fn remove_unreciprocated_connections(&mut self) -> usize {
        self.remove_connections_while(|graph, source, target| !graph.contains_edge(target, source))
    }

    pub fn symmetrize(&mut self, reciprocity: Reciprocity) -> usize {
        match reciprocity {
            Reciprocity::AnyOutgoing => self.remove_non_bidirectional_connections(),
            Reciprocity::Mutual => self.remove_unreciprocated_connections(),
        }
    }

    fn remove_connections_while<F>(&mut self, is_one_way: F) -> usize
    where
        F: Fn(&Self, &V, &V) -> bool,
    {
        let mut num_removed = 0;
        loop {
            let mut removed_in_pass = 0;
            let sources: Vec<V> = self.graph.vertex_set().cloned().collect();
            for source in sources {
                let this: &Self = self;
                let to_remove: Vec<V> = match this.graph.edges(&source) {
                    Some(edges) => edges
                        .targets()
                        .filter(|&target| {
                            let one_way = is_one_way(this, &source, target);
                            if one_way {
                                debug!("{:?} -> {:?} is not bidirectional", source, target);
                            }
                            one_way
                        })
                        .cloned()
                        .collect(),
                    None => continue,
                };
                if !to_remove.is_empty() {
                    debug!("removing {} connections of {:?}", to_remove.len(), source);
                    removed_in_pass += to_remove.len();
                    if let Some(edges) = self.graph.edges_mut(&source) {
                        edges.remove_edges(&to_remove);
                    }
                }
            }
            if removed_in_pass == 0 {
                return num_removed;
            }
            num_removed += removed_in_pass;
        }
    }
}

impl<V: Id> Default for UnlabeledGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Id> Adjacency for UnlabeledGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Adjacency::vertices(&self.graph)
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        Adjacency::neighbors(&self.graph, vertex)
    }

    fn contains_edge(&self, source: &V, target: &V) -> bool {
        UnlabeledGraph::contains_edge(self, source, target)
    }
}

impl<V: Id + Display> Display for UnlabeledGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vertex in self.graph.vertex_set().sorted() {
            if let Some(edges) = self.graph.edges(vertex) {
                writeln!(f, "{} -> {}", vertex, edges)?;
            }
        }
        Ok(())
    }
}
