use crate::types::Id;
use itertools::Itertools;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

/// Storage of the outgoing edges of one vertex.
///
/// The container decides how an edge maps to its target vertex, so the graph
/// above it only deals with containers and never with edge identities.
pub trait EdgeContainer<V, E> {
    /// Stores `edge` leading to `target`.
    fn add_edge(&mut self, target: V, edge: E);

    fn contains_edge(&self, edge: &E) -> bool;

    /// Returns `true` if any stored edge leads to `target`.
    fn contains_target(&self, target: &V) -> bool;

    /// Returns the target vertex of `edge`, or `None` if `edge` is not stored.
    fn vertex_for_edge(&self, edge: &E) -> Option<&V>;

    fn remove_edges(&mut self, edges: &[E]);

    /// Iterates over the `(target, edge)` pairs in no particular order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&V, &E)> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a E> + 'a>
    where
        V: 'a,
        E: 'a,
    {
        Box::new(self.iter().map(|(_, edge)| edge))
    }

    fn targets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        V: 'a,
        E: 'a,
    {
        Box::new(self.iter().map(|(target, _)| target))
    }
}

/// Edges carrying their own identity, independent of the target vertex.
#[derive(Debug, Clone)]
pub struct LabeledEdges<V, E> {
    edges: HashMap<E, V>,
}

impl<V: Id, E: Id> LabeledEdges<V, E> {
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<V: Id, E: Id> EdgeContainer<V, E> for LabeledEdges<V, E> {
    fn add_edge(&mut self, target: V, edge: E) {
        self.edges.insert(edge, target);
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
    }

    fn contains_target(&self, target: &V) -> bool {
        self.edges.values().any(|v| v == target)
    }

    fn vertex_for_edge(&self, edge: &E) -> Option<&V> {
        self.edges.get(edge)
    }

    fn remove_edges(&mut self, edges: &[E]) {
        for edge in edges {
            self.edges.remove(edge);
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&V, &E)> + '_> {
        Box::new(self.edges.iter().map(|(edge, target)| (target, edge)))
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}

/// Edges whose identity is the target vertex itself.
///
/// Storing an edge is the same as storing a neighbor: adding `v1` and then
/// asking for the vertex of edge `v1` yields `v1`.
#[derive(Debug, Clone)]
pub struct VertexSet<V> {
    neighbors: HashSet<V>,
}

impl<V: Id> VertexSet<V> {
    pub fn new() -> Self {
        Self {
            neighbors: HashSet::new(),
        }
    }
}

impl<V: Id> EdgeContainer<V, V> for VertexSet<V> {
    fn add_edge(&mut self, _target: V, edge: V) {
        self.neighbors.insert(edge);
    }

    fn contains_edge(&self, edge: &V) -> bool {
        self.neighbors.contains(edge)
    }

    fn contains_target(&self, target: &V) -> bool {
        self.neighbors.contains(target)
    }

    fn vertex_for_edge(&self, edge: &V) -> Option<&V> {
        self.neighbors.get(edge)
    }

    fn remove_edges(&mut self, edges: &[V]) {
        for edge in edges {
            self.neighbors.remove(edge);
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&V, &V)> + '_> {
        Box::new(self.neighbors.iter().map(|v| (v, v)))
    }

    fn len(&self) -> usize {
        self.neighbors.len()
    }
}

impl<V: Id + Display> Display for VertexSet<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.neighbors.iter().sorted().join(", "))
    }
}
