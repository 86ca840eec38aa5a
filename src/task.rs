use crate::{
    clique::BronKerbosch,
    graph::{error::Result, Reciprocity, UnlabeledGraph},
    record::Record,
    report::{retain_min_size, sort_clusters, MIN_CLUSTER_SIZE},
    types::UserId,
};
use log::{debug, info, warn};
use std::time::Instant;

/// Finds the clusters of users communicating with each other.
pub struct Task {
    records: Vec<Record>,
    reciprocity: Reciprocity,
    min_size: usize,
    biggest_only: bool,
}

impl Task {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            reciprocity: Reciprocity::default(),
            min_size: MIN_CLUSTER_SIZE,
            biggest_only: false,
        }
    }

    pub fn reciprocity(mut self, reciprocity: Reciprocity) -> Self {
        self.reciprocity = reciprocity;
        self
    }

    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Reports only the clusters of maximum size.
    pub fn biggest_only(mut self, biggest_only: bool) -> Self {
        self.biggest_only = biggest_only;
        self
    }

    /// Builds the undirected communication graph.
    pub fn build_graph(&self) -> Result<UnlabeledGraph<UserId>> {
        let mut graph = UnlabeledGraph::new();
        for record in &self.records {
            if record.source() == record.target() {
                warn!("{} connects a user to itself", record);
            }
            graph.add_connection(record.source().to_owned(), record.target().to_owned())?;
            graph.add_vertex(record.target().to_owned())?;
        }
        info!(
            "built graph: {} vertices, {} connections",
            graph.len(),
            graph.num_edges()
        );
        let num_removed = graph.symmetrize(self.reciprocity);
        info!("removed {} one-way connections", num_removed);
        debug!("graph:\n{}", graph);
        Ok(graph)
    }

    /// Returns the sorted clusters with at least `min_size` members.
    pub fn run(&self) -> Result<Vec<Vec<UserId>>> {
        let start_time = Instant::now();
        let graph = self.build_graph()?;
        let mut finder = BronKerbosch::new(&graph);
        let cliques = if self.biggest_only {
            finder.biggest_maximal_cliques()
        } else {
            finder.all_maximal_cliques()
        };
        let mut clusters = sort_clusters(cliques);
        for cluster in clusters.iter().filter(|c| c.len() < self.min_size) {
            debug!("cluster {:?} is smaller than {}", cluster, self.min_size);
        }
        retain_min_size(&mut clusters, self.min_size);
        info!(
            "found {} clusters in {:?}",
            clusters.len(),
            start_time.elapsed()
        );
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::EdgeContainer, record::parse_records};

    const LOG: &str = "\
Thu Dec 11 17:53:01 PST 2008    a@facebook.com    b@facebook.com
Thu Dec 11 17:53:02 PST 2008    b@facebook.com    a@facebook.com
Thu Dec 11 17:53:03 PST 2008    a@facebook.com    c@facebook.com
Thu Dec 11 17:53:04 PST 2008    c@facebook.com    a@facebook.com
Thu Dec 11 17:53:05 PST 2008    b@facebook.com    c@facebook.com
Thu Dec 11 17:53:06 PST 2008    c@facebook.com    b@facebook.com
Thu Dec 11 17:53:07 PST 2008    d@facebook.com    a@facebook.com
Thu Dec 11 17:54:08 PST 2008    e@facebook.com    f@facebook.com
Thu Dec 11 17:54:09 PST 2008    f@facebook.com    e@facebook.com
";

    fn records() -> Vec<Record> {
        parse_records(LOG.as_bytes()).unwrap()
    }

    fn user(name: &str) -> UserId {
        format!("{}@facebook.com", name)
    }

    #[test]
    fn test_build_graph() {
        let graph = Task::new(records()).build_graph().unwrap();
        assert_eq!(graph.len(), 6);
        assert_eq!(graph.contains_edge(&user("a"), &user("b")), true);
        assert_eq!(graph.contains_edge(&user("e"), &user("f")), true);
        assert_eq!(graph.edges(&user("d")).map(|edges| edges.len()), Some(1));
    }

    #[test]
    fn test_build_graph_mutual() {
        let graph = Task::new(records())
            .reciprocity(Reciprocity::Mutual)
            .build_graph()
            .unwrap();
        assert_eq!(graph.contains_edge(&user("d"), &user("a")), false);
        assert_eq!(graph.num_edges(), 8);
    }

    #[test]
    fn test_run() {
        assert_eq!(
            Task::new(records()).run().unwrap(),
            vec![vec!["a@facebook.com", "b@facebook.com", "c@facebook.com"]]
        );
        assert_eq!(
            Task::new(records()).min_size(2).run().unwrap(),
            vec![
                vec!["a@facebook.com", "b@facebook.com", "c@facebook.com"],
                vec!["e@facebook.com", "f@facebook.com"],
            ]
        );
        assert_eq!(
            Task::new(records())
                .min_size(1)
                .biggest_only(true)
                .run()
                .unwrap(),
            vec![vec!["a@facebook.com", "b@facebook.com", "c@facebook.com"]]
        );
    }

    #[test]
    fn test_run_self_connection() {
        let mut records = records();
        records.push(Record::new(
            String::from("Thu Dec 11 17:55:00 PST 2008"),
            user("a"),
            user("a"),
        ));
        let graph = Task::new(records.clone()).build_graph().unwrap();
        assert_eq!(graph.contains_edge(&user("a"), &user("a")), true);
        assert_eq!(
            Task::new(records).run().unwrap(),
            vec![vec!["a@facebook.com", "b@facebook.com", "c@facebook.com"]]
        );
    }

    #[test]
    fn test_run_absent_user() {
        let records = vec![Record::new(
            String::from("Thu Dec 11 17:53:01 PST 2008"),
            String::new(),
            String::from("a@facebook.com"),
        )];
        assert_eq!(Task::new(records).run().is_err(), true);
    }
}
