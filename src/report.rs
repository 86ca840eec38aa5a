//! Presentation of clusters.

use crate::clique::Clique;
use itertools::Itertools;
use rayon::slice::ParallelSliceMut;
use std::fmt::Display;

/// Minimum number of members of a reported cluster.
pub const MIN_CLUSTER_SIZE: usize = 3;

/// Sorts the members of each clique, then sorts the cliques lexicographically.
pub fn sort_clusters<V: Ord + Send>(cliques: Vec<Clique<V>>) -> Vec<Vec<V>> {
    let mut clusters: Vec<Vec<V>> = cliques
        .into_iter()
        .map(|clique| clique.into_iter().sorted().collect())
        .collect();
    clusters.par_sort_unstable();
    clusters
}

/// Keeps the clusters with at least `min_size` members.
pub fn retain_min_size<V>(clusters: &mut Vec<Vec<V>>, min_size: usize) {
    clusters.retain(|cluster| cluster.len() >= min_size);
}

/// Formats the members of a cluster as `a, b, c`.
pub fn pretty_print<V: Display>(cluster: &[V]) -> String {
    cluster.iter().join(", ")
}
