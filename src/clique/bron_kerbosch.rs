// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph".
// Communications of the ACM. 16 (9): 575-577.

use crate::graph::Adjacency;
use itertools::Itertools;
use log::{debug, info};
use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

/// A clique is a set of vertices, pairwise connected.
pub type Clique<V> = HashSet<V>;

/// Maximal clique finder using Bron-Kerbosch with pivoting.
///
/// The graph must be undirected, i.e. `u -> v` iff `v -> u`. This is not
/// checked; an asymmetric graph gives unspecified cliques.
pub struct BronKerbosch<'a, G: Adjacency> {
    graph: &'a G,
    cliques: Option<Vec<Clique<G::Vertex>>>,
}

impl<'a, G: Adjacency> BronKerbosch<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cliques: None,
        }
    }

    /// Returns all maximal cliques, singletons included, in no particular order.
    pub fn all_maximal_cliques(&mut self) -> Vec<Clique<G::Vertex>> {
        self.cliques().to_vec()
    }

    /// Returns the maximal cliques of maximum size. Ties are all returned.
    pub fn biggest_maximal_cliques(&mut self) -> Vec<Clique<G::Vertex>> {
        let cliques = self.cliques();
        let max_len = cliques.iter().map(|clique| clique.len()).max().unwrap_or(0);
        cliques
            .iter()
            .filter(|clique| clique.len() == max_len)
            .cloned()
            .collect()
    }

    fn cliques(&mut self) -> &[Clique<G::Vertex>] {
        if self.cliques.is_none() {
            self.cliques = Some(self.find_cliques());
        }
        self.cliques.as_deref().unwrap_or(&[])
    }

    fn find_cliques(&self) -> Vec<Clique<G::Vertex>> {
        let index = NeighborIndex::new(self.graph);
        if index.vertices.is_empty() {
            return vec![];
        }
        info!(
            "searching maximal cliques among {} vertices...",
            index.vertices.len()
        );
        let mut found = Vec::new();
        index.extend(
            Vec::new(),
            (0..index.vertices.len()).collect(),
            HashSet::new(),
            &mut found,
        );
        info!("found {} maximal cliques", found.len());
        found
            .into_iter()
            .map(|clique| {
                clique
                    .into_iter()
                    .map(|v| index.vertices[v].clone())
                    .collect()
            })
            .collect()
    }
}

/// The graph relabeled with dense vertex numbers.
///
/// Self loops and connections to vertices outside the vertex set are dropped.
struct NeighborIndex<'a, V> {
    vertices: Vec<&'a V>,
    neighbors: Vec<HashSet<usize>>,
}

impl<'a, V> NeighborIndex<'a, V>
where
    V: crate::types::Id,
{
    fn new<G: Adjacency<Vertex = V>>(graph: &'a G) -> Self {
        let vertices: Vec<&V> = graph.vertices().sorted().collect();
        let numbers: HashMap<&V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let neighbors = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                graph
                    .neighbors(v)
                    .filter_map(|n| numbers.get(n).copied())
                    .filter(|&j| j != i)
                    .collect::<HashSet<_>>()
            })
            .collect();
        Self {
            vertices,
            neighbors,
        }
    }

    /// Reports every maximal clique containing all of `r`, some of `p` and
    /// none of `x`.
    fn extend(
        &self,
        r: Vec<usize>,
        mut p: HashSet<usize>,
        mut x: HashSet<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        if p.is_empty() && x.is_empty() {
            debug!("maximal clique of size {}", r.len());
            found.push(r);
            return;
        }
        let pivot = match p
            .iter()
            .chain(x.iter())
            .copied()
            .max_by_key(|&u| (self.degree_within(u, &p), Reverse(u)))
        {
            Some(pivot) => pivot,
            None => return,
        };
        let candidates: Vec<usize> = p
            .iter()
            .copied()
            .filter(|v| !self.neighbors[pivot].contains(v))
            .sorted()
            .collect();
        for v in candidates {
            let neighbors = &self.neighbors[v];
            let mut r_next = r.clone();
            r_next.push(v);
            self.extend(
                r_next,
                p.intersection(neighbors).copied().collect(),
                x.intersection(neighbors).copied().collect(),
                found,
            );
            p.remove(&v);
            x.insert(v);
        }
    }

    fn degree_within(&self, u: usize, p: &HashSet<usize>) -> usize {
        self.neighbors[u].iter().filter(|w| p.contains(w)).count()
    }
}
