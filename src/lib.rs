//! Communication cluster discovery with maximal cliques.

pub mod clique;
pub mod graph;
pub mod record;
pub mod report;
pub mod task;
pub mod types;
