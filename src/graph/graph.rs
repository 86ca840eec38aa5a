use super::{
    error::{GraphError, Result},
    Adjacency, EdgeContainer,
};
use crate::types::Id;
use std::{
    collections::{hash_map::Keys, HashMap},
    marker::PhantomData,
};

/// A mapping from each vertex to the container of its outgoing edges.
///
/// Every vertex ever added, and every source of a connection, is a key of the
/// mapping, possibly with an empty container. Targets are not registered
/// implicitly.
pub struct Graph<V, E, C> {
    vertices: HashMap<V, C>,
    factory: Option<fn() -> C>,
    _phantom_e: PhantomData<E>,
}

impl<V, E, C> Graph<V, E, C>
where
    V: Id,
    E: Id,
    C: EdgeContainer<V, E>,
{
    /// Create a new empty graph whose containers are built by `factory`.
    pub fn new(factory: fn() -> C) -> Self {
        Self {
            vertices: HashMap::new(),
            factory: Some(factory),
            _phantom_e: PhantomData,
        }
    }

    /// Create a new empty graph without a container factory.
    ///
    /// Every mutation fails with [`GraphError::MissingFactory`] until
    /// [`Graph::set_factory`] is called.
    pub fn unconfigured() -> Self {
        Self {
            vertices: HashMap::new(),
            factory: None,
            _phantom_e: PhantomData,
        }
    }

    pub fn set_factory(&mut self, factory: fn() -> C) {
        self.factory = Some(factory);
    }

    pub fn vertex_set(&self) -> Keys<'_, V, C> {
        self.vertices.keys()
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(|edges| edges.len()).sum()
    }

    /// Returns the edge container of `vertex`, or `None` if the vertex is unknown.
    pub fn edges(&self, vertex: &V) -> Option<&C> {
        self.vertices.get(vertex)
    }

    pub(crate) fn edges_mut(&mut self, vertex: &V) -> Option<&mut C> {
        self.vertices.get_mut(vertex)
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        let factory = self.factory.ok_or(GraphError::MissingFactory)?;
        self.vertices.entry(vertex).or_insert_with(factory);
        Ok(())
    }

    /// Adds the connection `source -> target` carried by `edge`.
    pub fn add_connection(&mut self, source: V, target: V, edge: E) -> Result<()> {
        let factory = self.factory.ok_or(GraphError::MissingFactory)?;
        if source.is_absent() {
            return Err(GraphError::AbsentArgument("source vertex"));
        }
        if target.is_absent() {
            return Err(GraphError::AbsentArgument("target vertex"));
        }
        if edge.is_absent() {
            return Err(GraphError::AbsentArgument("edge"));
        }
        self.vertices
            .entry(source)
            .or_insert_with(factory)
            .add_edge(target, edge);
        Ok(())
    }

    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.vertices
            .get(source)
            .map_or(false, |edges| edges.contains_target(target))
    }
}

impl<V, E, C> Adjacency for Graph<V, E, C>
where
    V: Id,
    E: Id,
    C: EdgeContainer<V, E>,
{
    type Vertex = V;

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(
            self.vertices
                .get(vertex)
                .into_iter()
                .flat_map(|edges| edges.targets()),
        )
    }

    fn contains_edge(&self, source: &V, target: &V) -> bool {
        Graph::contains_edge(self, source, target)
    }
}
