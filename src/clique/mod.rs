//! Maximal clique enumeration.

pub use bron_kerbosch::{BronKerbosch, Clique};

mod bron_kerbosch;
