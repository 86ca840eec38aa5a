use peaktraffic::{
    clique::BronKerbosch,
    graph::{Reciprocity, UnlabeledGraph},
    record::read_records,
    report::{pretty_print, sort_clusters},
    task::Task,
};
use std::io::Write;

const LOG: &str = "\
Thu Dec 11 17:53:01 PST 2008    a@facebook.com    b@facebook.com
Thu Dec 11 17:53:02 PST 2008    a@facebook.com    c@facebook.com
Thu Dec 11 17:53:03 PST 2008    a@facebook.com    d@facebook.com
Thu Dec 11 17:53:04 PST 2008    b@facebook.com    a@facebook.com
Thu Dec 11 17:53:05 PST 2008    b@facebook.com    c@facebook.com
Thu Dec 11 17:53:06 PST 2008    b@facebook.com    d@facebook.com
Thu Dec 11 17:53:07 PST 2008    c@facebook.com    a@facebook.com
Thu Dec 11 17:53:08 PST 2008    c@facebook.com    b@facebook.com
Thu Dec 11 17:53:09 PST 2008    c@facebook.com    d@facebook.com
Thu Dec 11 17:53:10 PST 2008    d@facebook.com    a@facebook.com
Thu Dec 11 17:53:11 PST 2008    d@facebook.com    b@facebook.com
Thu Dec 11 17:53:12 PST 2008    d@facebook.com    c@facebook.com
Thu Dec 11 17:53:13 PST 2008    e@facebook.com    d@facebook.com
Thu Dec 11 17:53:14 PST 2008    d@facebook.com    e@facebook.com
Thu Dec 11 17:53:15 PST 2008    e@facebook.com    f@facebook.com
Thu Dec 11 17:53:16 PST 2008    f@facebook.com    e@facebook.com
Thu Dec 11 17:53:17 PST 2008    d@facebook.com    f@facebook.com
Thu Dec 11 17:53:18 PST 2008    f@facebook.com    d@facebook.com
Thu Dec 11 17:53:19 PST 2008    g@facebook.com    a@facebook.com
";

fn write_log() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LOG.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_peak_traffic() {
    let file = write_log();
    let records = read_records(file.path()).unwrap();
    assert_eq!(records.len(), 19);
    let lines: Vec<_> = Task::new(records)
        .run()
        .unwrap()
        .iter()
        .map(|cluster| pretty_print(cluster))
        .collect();
    assert_eq!(
        lines,
        [
            "a@facebook.com, b@facebook.com, c@facebook.com, d@facebook.com",
            "d@facebook.com, e@facebook.com, f@facebook.com",
        ]
    );
}

#[test]
fn test_peak_traffic_biggest_strict() {
    let file = write_log();
    let clusters = Task::new(read_records(file.path()).unwrap())
        .reciprocity(Reciprocity::Mutual)
        .biggest_only(true)
        .run()
        .unwrap();
    assert_eq!(
        clusters,
        vec![vec![
            "a@facebook.com",
            "b@facebook.com",
            "c@facebook.com",
            "d@facebook.com"
        ]]
    );
}

#[test]
fn test_cliques_after_symmetrization() {
    let mut g = UnlabeledGraph::new();
    for &(u, v) in &[
        ("v1", "v2"),
        ("v2", "v1"),
        ("v2", "v3"),
        ("v3", "v2"),
        ("v1", "v3"),
        ("v3", "v1"),
        ("v4", "v1"),
        ("v5", "v6"),
    ] {
        g.add_connection(u, v).unwrap();
    }
    g.add_vertex("v6").unwrap();
    assert_eq!(g.symmetrize(Reciprocity::Mutual), 2);
    assert_eq!(g.contains_edge(&"v4", &"v1"), false);
    assert_eq!(g.contains_edge(&"v5", &"v6"), false);
    let clusters = sort_clusters(BronKerbosch::new(&g).all_maximal_cliques());
    assert_eq!(clusters[0], vec!["v1", "v2", "v3"]);
    assert_eq!(clusters.iter().all(|c| !c.is_empty()), true);
    assert_eq!(clusters.iter().filter(|c| c.len() == 1).count(), 3);
}
