#![allow(missing_docs)]

use std::sync::{Arc, Mutex};
use std::thread;

use hopgraph::storage::CounterMetrics;
use hopgraph::{
    Capabilities, DisplayPrinter, Graph, GraphError, GraphOptions, InEdgePolicy, VertexId,
};

fn graph_with(vertices: &[i32]) -> Graph<i32> {
    let mut graph = Graph::new();
    for v in vertices {
        graph.insert_vertex(*v).expect("insert vertex");
    }
    graph
}

#[test]
fn insert_then_remove_all_vertices_empties_graph() {
    let mut graph = graph_with(&[1, 2, 3, 4, 5]);
    assert_eq!(graph.vertex_count(), 5);

    for v in [3, 1, 5, 2, 4] {
        assert_eq!(graph.remove_vertex(&v).expect("remove vertex"), v);
    }
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.is_empty());
    assert_eq!(graph.adjacency_records().count(), 0);
}

#[test]
fn duplicate_vertex_is_rejected_without_growth() {
    let mut graph = graph_with(&[1, 2]);
    assert!(matches!(
        graph.insert_vertex(2),
        Err(GraphError::DuplicateVertex)
    ));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn directed_edge_is_one_way() {
    let mut graph = graph_with(&[1, 2, 3]);
    graph.insert_edge(&1, &2).expect("edge");

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_adjacent(&1, &2));
    assert!(!graph.is_adjacent(&2, &1));

    graph.insert_edge(&2, &1).expect("edge");
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.is_adjacent(&2, &1));
}

#[test]
fn each_insert_edge_adds_exactly_one() {
    let mut graph = graph_with(&[1, 2, 3]);
    let pairs = [(1, 2), (2, 3), (3, 1), (1, 1), (1, 2)];
    for (count, (a, b)) in pairs.iter().enumerate() {
        graph.insert_edge(a, b).expect("edge");
        assert_eq!(graph.edge_count(), count + 1);
        assert!(graph.is_adjacent(a, b));
    }
    assert_eq!(graph.out_degree(&1).expect("degree"), 3);
}

#[test]
fn missing_endpoints_leave_graph_untouched() {
    let mut graph = graph_with(&[1, 2]);

    assert!(matches!(
        graph.insert_edge(&9, &2),
        Err(GraphError::SourceNotFound)
    ));
    assert!(matches!(
        graph.insert_edge(&1, &9),
        Err(GraphError::EdgeTargetNotFound)
    ));
    assert!(matches!(
        graph.insert_edge(&8, &9),
        Err(GraphError::SourceNotFound)
    ));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_degree(&1).expect("degree"), 0);
}

#[test]
fn non_empty_adjacency_blocks_removal_until_cleared() {
    let mut graph = graph_with(&[1, 2]);
    graph.insert_edge(&1, &2).expect("edge");

    match graph.remove_vertex(&1) {
        Err(GraphError::NonEmptyAdjacency { degree, .. }) => assert_eq!(degree, 1),
        other => panic!("unexpected result {other:?}"),
    }
    assert_eq!(graph.vertex_count(), 2);

    graph.remove_edge(&1, &2).expect("remove edge");
    assert_eq!(graph.remove_vertex(&1).expect("remove"), 1);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn remove_edge_reports_absent_target() {
    let mut graph = graph_with(&[1, 2, 3]);
    graph.insert_edge(&1, &2).expect("edge");

    assert!(matches!(
        graph.remove_edge(&1, &3),
        Err(GraphError::EdgeNotFound)
    ));
    assert!(matches!(
        graph.remove_edge(&1, &42),
        Err(GraphError::EdgeNotFound)
    ));
    assert!(matches!(
        graph.remove_edge(&42, &1),
        Err(GraphError::SourceNotFound)
    ));
    assert_eq!(graph.edge_count(), 1);

    graph.remove_edge(&1, &2).expect("remove");
    assert_eq!(graph.edge_count(), 0);
    assert!(matches!(
        graph.remove_edge(&1, &2),
        Err(GraphError::EdgeNotFound)
    ));
}

#[test]
fn parallel_edges_are_removed_one_at_a_time() {
    let mut graph = graph_with(&[1, 2]);
    graph.insert_edge(&1, &2).expect("edge");
    graph.insert_edge(&1, &2).expect("edge");
    assert_eq!(graph.edge_count(), 2);

    graph.remove_edge(&1, &2).expect("remove");
    assert!(graph.is_adjacent(&1, &2));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn in_edges_reject_or_detach_by_policy() {
    let mut graph = graph_with(&[1, 2, 3]);
    graph.insert_edge(&1, &3).expect("edge");
    graph.insert_edge(&2, &3).expect("edge");

    match graph.remove_vertex(&3) {
        Err(GraphError::VertexReferenced { referrers, .. }) => assert_eq!(referrers, 2),
        other => panic!("unexpected result {other:?}"),
    }

    let mut graph: Graph<i32> =
        Graph::with_options(GraphOptions::new().in_edge_policy(InEdgePolicy::Detach));
    for v in [1, 2, 3] {
        graph.insert_vertex(v).expect("insert");
    }
    graph.insert_edge(&1, &3).expect("edge");
    graph.insert_edge(&2, &3).expect("edge");
    assert_eq!(graph.remove_vertex(&3).expect("remove"), 3);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.is_adjacent(&1, &3));
    assert_eq!(graph.out_degree(&2).expect("degree"), 0);
}

#[test]
fn handles_survive_unrelated_removals() {
    let mut graph = graph_with(&[10, 20, 30]);
    let thirty = graph.vertex_id(&30).expect("id");
    let ten = graph.vertex_id(&10).expect("id");

    graph.remove_vertex(&20).expect("remove");
    assert_eq!(graph.vertex(thirty), Some(&30));

    graph.insert_edge_by_id(ten, thirty).expect("edge");
    assert!(graph.is_adjacent(&10, &30));
    graph.remove_edge_by_id(ten, thirty).expect("remove edge");
    assert_eq!(graph.remove_vertex_by_id(thirty).expect("remove"), 30);
    assert_eq!(graph.vertex(thirty), None);
    assert!(matches!(
        graph.remove_vertex_by_id(VertexId(999)),
        Err(GraphError::VertexNotFound)
    ));
}

#[test]
fn undirected_edges_are_mirrored() {
    let mut graph: Graph<i32> = Graph::with_options(GraphOptions::new().directed(false));
    for v in [1, 2, 3] {
        graph.insert_vertex(v).expect("insert");
    }
    graph.insert_edge(&1, &2).expect("edge");
    graph.insert_edge(&3, &3).expect("self loop");

    assert!(graph.is_adjacent(&1, &2));
    assert!(graph.is_adjacent(&2, &1));
    assert_eq!(graph.edge_count(), 3);

    graph.remove_edge(&2, &1).expect("remove");
    assert!(!graph.is_adjacent(&1, &2));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn adjacency_of_exposes_neighbors_in_insertion_order() {
    let mut graph = graph_with(&[1, 2, 3, 4]);
    for to in [4, 2, 3] {
        graph.insert_edge(&1, &to).expect("edge");
    }
    let record = graph.adjacency_of(&1).expect("record");
    assert_eq!(record.vertex(), &1);
    assert_eq!(record.weight(), 0);
    let neighbors: Vec<i32> = graph.neighbors(&1).expect("neighbors").copied().collect();
    assert_eq!(neighbors, vec![4, 2, 3]);
    assert!(matches!(
        graph.adjacency_of(&7),
        Err(GraphError::VertexNotFound)
    ));
}

#[test]
fn destroyer_runs_on_teardown_but_not_on_remove() {
    let released = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&released);
    let caps = Capabilities::partial_eq()
        .destroyer(move |v: String| sink.lock().expect("lock").push(v));
    let mut graph = Graph::create(caps, GraphOptions::default());
    for label in ["a", "b", "c"] {
        graph.insert_vertex(label.to_string()).expect("insert");
    }

    let removed = graph.remove_vertex(&"b".to_string()).expect("remove");
    assert_eq!(removed, "b");
    assert!(released.lock().expect("lock").is_empty());

    graph.destroy();
    assert_eq!(*released.lock().expect("lock"), vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn iterate_prints_summary_and_lists() {
    let caps = Capabilities::partial_eq().printer(DisplayPrinter);
    let mut graph = Graph::create(caps, GraphOptions::default());
    for v in [2, 6, 4] {
        graph.insert_vertex(v).expect("insert");
    }
    graph.insert_edge(&2, &6).expect("edge");
    graph.insert_edge(&2, &4).expect("edge");

    let rendered = graph.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], " - graph: (#vertices:   3, #edges:   2) ");
    assert_eq!(lines[1], "  vertex:   2\tadjacency lst: [   6    4 ]");
    assert_eq!(lines[2], "  vertex:   6\tadjacency lst: []");
    assert_eq!(lines.len(), 4);
}

#[test]
fn metrics_count_successful_operations() {
    let metrics = Arc::new(CounterMetrics::default());
    let mut graph: Graph<i32> = Graph::with_options(GraphOptions::new().metrics(metrics.clone()));
    for v in [1, 2] {
        graph.insert_vertex(v).expect("insert");
    }
    let _ = graph.insert_vertex(1);
    graph.insert_edge(&1, &2).expect("edge");
    graph.remove_edge(&1, &2).expect("remove edge");
    graph.remove_vertex(&2).expect("remove");

    assert_eq!(CounterMetrics::get(&metrics.vertices_inserted), 2);
    assert_eq!(CounterMetrics::get(&metrics.vertices_removed), 1);
    assert_eq!(CounterMetrics::get(&metrics.edges_inserted), 1);
    assert_eq!(CounterMetrics::get(&metrics.edges_removed), 1);
}

#[test]
fn mutex_guarded_graph_is_shared_across_threads() {
    let graph = Arc::new(Mutex::new(graph_with(&[0])));
    let workers: Vec<_> = (1..=4)
        .map(|v| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                let mut graph = graph.lock().expect("lock");
                graph.insert_vertex(v).expect("insert vertex");
                graph.insert_edge(&0, &v).expect("insert edge");
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker");
    }

    let graph = graph.lock().expect("lock");
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    let mut reached: Vec<(i32, u32)> = graph
        .bfs(&0)
        .expect("bfs")
        .iter()
        .map(|visit| (*visit.vertex, visit.hops))
        .collect();
    reached.sort_unstable();
    assert_eq!(reached, vec![(0, 0), (1, 1), (2, 1), (3, 1), (4, 1)]);
}
