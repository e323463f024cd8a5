use ahash::HashSet;
use mesh_routes::{
    graphs::{edge::DefaultEdge, weighted_graph::WeightedGraph},
    search::arborescence::minimum_arborescence,
    steiner::{
        approximate_steiner_tree, metric_closure,
        steiner_tree::{construct_tree, reconstruct},
        RoutePlanner, RouteRequest, RoutingLimits,
    },
    tree::Tree,
    utility::random_mesh,
    RoutingError,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn terminals<V: Clone + Eq + std::hash::Hash>(vertices: &[V]) -> HashSet<V> {
    vertices.iter().cloned().collect()
}

fn two_branch_graph() -> WeightedGraph<&'static str, DefaultEdge> {
    let mut graph = WeightedGraph::new();
    graph.add_edge("root", "p1", DefaultEdge::new(1.0));
    graph.add_edge("p1", "t1", DefaultEdge::new(1.0));
    graph.add_edge("root", "p2", DefaultEdge::new(1.0));
    graph.add_edge("p2", "t2", DefaultEdge::new(1.0));
    graph
}

fn chain_graph() -> WeightedGraph<char, DefaultEdge> {
    let mut graph = WeightedGraph::new();
    graph.add_edge('a', 'b', DefaultEdge::new(1.0));
    graph.add_edge('b', 'c', DefaultEdge::new(2.0));
    graph.add_edge('a', 'c', DefaultEdge::new(10.0));
    graph.add_edge('c', 'd', DefaultEdge::new(1.0));
    graph
}

fn sorted_edges(graph: &WeightedGraph<u32, DefaultEdge>) -> Vec<(u32, u32, f64)> {
    let mut edges: Vec<_> = graph
        .all_edges()
        .into_iter()
        .map(|edge| (edge.tail, edge.head, edge.annotation.weight))
        .collect();
    edges.sort_by(|a, b| a.partial_cmp(b).unwrap());
    edges
}

#[test]
fn closure_keeps_shortest_distance_and_path() {
    let graph = chain_graph();
    let closure = metric_closure(&graph, &terminals(&['a', 'd']));

    assert_eq!(closure.number_of_vertices(), 2);
    assert_eq!(closure.number_of_edges(), 1);
    let edge = closure.shortest_edge(&'a', &'d').unwrap();
    assert_eq!(edge.annotation.weight, 4.0);
    assert_eq!(edge.annotation.path, vec!['b', 'c']);
}

#[test]
fn two_branches() {
    let graph = two_branch_graph();
    let steiner_tree = approximate_steiner_tree(&graph, &"root", &terminals(&["t1", "t2"]));

    let mut expected = Tree::new("root");
    let p1 = expected.add_child(expected.root(), "p1");
    expected.add_child(p1, "t1");
    let p2 = expected.add_child(expected.root(), "p2");
    expected.add_child(p2, "t2");

    assert!(steiner_tree.tree.structurally_equal(&expected));
    assert_eq!(steiner_tree.number_of_edges(), 4);
    assert_eq!(steiner_tree.weight, 4.0);
    assert!(steiner_tree.is_complete());
}

#[test]
fn shared_waypoint_is_used_once() {
    let mut graph = WeightedGraph::new();
    graph.add_edge("root", "x", DefaultEdge::new(1.0));
    graph.add_edge("x", "t1", DefaultEdge::new(1.0));
    graph.add_edge("x", "t2", DefaultEdge::new(1.0));

    let steiner_tree = approximate_steiner_tree(&graph, &"root", &terminals(&["t1", "t2"]));

    let mut expected = Tree::new("root");
    let x = expected.add_child(expected.root(), "x");
    expected.add_child(x, "t1");
    expected.add_child(x, "t2");

    assert!(steiner_tree.tree.structurally_equal(&expected));
    assert_eq!(steiner_tree.weight, 3.0);
}

#[test]
fn routes_through_other_terminals() {
    let mut graph = WeightedGraph::new();
    graph.add_edge('r', 'a', DefaultEdge::new(1.0));
    graph.add_edge('a', 'b', DefaultEdge::new(1.0));
    graph.add_edge('r', 'b', DefaultEdge::new(5.0));

    let steiner_tree = approximate_steiner_tree(&graph, &'r', &terminals(&['a', 'b']));

    let a = steiner_tree.tree.find(&'a').unwrap();
    let b = steiner_tree.tree.find(&'b').unwrap();
    assert_eq!(steiner_tree.tree.parent(b), Some(a));
    assert_eq!(steiner_tree.weight, 2.0);
}

#[test]
fn unreachable_terminals_are_reported() {
    let mut graph = two_branch_graph();
    graph.add_edge("t3", "root", DefaultEdge::default());

    let steiner_tree =
        approximate_steiner_tree(&graph, &"root", &terminals(&["t1", "t2", "t3", "ghost"]));

    assert!(!steiner_tree.is_complete());
    assert_eq!(steiner_tree.unreached, terminals(&["t3", "ghost"]));
    assert!(steiner_tree.tree.contains(&"t1"));
    assert!(steiner_tree.tree.contains(&"t2"));
}

#[test]
fn missing_root_yields_lonely_tree() {
    let graph = two_branch_graph();
    let steiner_tree = approximate_steiner_tree(&graph, &"nowhere", &terminals(&["t1"]));

    assert_eq!(steiner_tree.tree.size(), 1);
    assert_eq!(steiner_tree.tree.value(0), Some(&"nowhere"));
    assert_eq!(steiner_tree.unreached, terminals(&["t1"]));
    assert_eq!(steiner_tree.weight, 0.0);
}

#[test]
fn construct_tree_survives_cycles() {
    let mut graph = WeightedGraph::new();
    graph.add_edge('a', 'b', DefaultEdge::new(1.0));
    graph.add_edge('b', 'a', DefaultEdge::new(1.0));
    graph.add_edge('b', 'c', DefaultEdge::new(2.0));
    graph.add_edge('c', 'a', DefaultEdge::new(1.0));

    let (tree, weight) = construct_tree(&graph, &'a');

    assert_eq!(tree.size(), 3);
    assert_eq!(weight, 3.0);
}

#[test]
fn reconstruct_expands_paths() {
    let graph = chain_graph();
    let closure = metric_closure(&graph, &terminals(&['a', 'd']));
    let arborescence = minimum_arborescence(&closure, &'a');
    let reconstructed = reconstruct(&graph, &arborescence);

    assert_eq!(reconstructed.number_of_edges(), 3);
    assert!(reconstructed.contains_edge(&'a', &'b'));
    assert!(reconstructed.contains_edge(&'b', &'c'));
    assert!(reconstructed.contains_edge(&'c', &'d'));
    assert_eq!(reconstructed.total_weight(), 4.0);
}

#[test]
fn planner_rejects_negative_weights() {
    let mut graph = two_branch_graph();
    graph.add_edge("p1", "t2", DefaultEdge::new(-3.0));

    let result = RoutePlanner::default().plan(&graph, &"root", &terminals(&["t1", "t2"]));
    assert!(matches!(result, Err(RoutingError::NegativeWeight { .. })));
}

#[test]
fn planner_enforces_limits() {
    let graph = two_branch_graph();
    let limits = RoutingLimits {
        max_vertices: 4,
        max_edges: 100,
    };
    let result = RoutePlanner::new(limits).plan(&graph, &"root", &terminals(&["t1"]));
    assert!(matches!(
        result,
        Err(RoutingError::TooManyVertices {
            actual: 5,
            limit: 4
        })
    ));

    let limits = RoutingLimits {
        max_vertices: 5,
        max_edges: 3,
    };
    let result = RoutePlanner::new(limits).plan(&graph, &"root", &terminals(&["t1"]));
    assert!(matches!(result, Err(RoutingError::TooManyEdges { .. })));
}

#[test]
fn plan_many_keeps_request_order() {
    let graph = two_branch_graph();
    let requests = vec![
        RouteRequest {
            root: "root",
            terminals: terminals(&["t1"]),
        },
        RouteRequest {
            root: "p2",
            terminals: terminals(&["t2", "t1"]),
        },
    ];

    let results = RoutePlanner::default().plan_many(&graph, &requests).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].weight, 2.0);
    assert!(results[0].is_complete());
    assert_eq!(results[1].tree.value(0), Some(&"p2"));
    assert_eq!(results[1].unreached, terminals(&["t1"]));
}

proptest! {
    #[test]
    fn closure_over_all_vertices_reconstructs_arborescence(
        seed in any::<u64>(),
        vertices in 1u32..30,
        degree in 0u32..4,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_mesh(&mut rng, vertices, degree, 10.0);
        let all: HashSet<u32> = graph.vertices().copied().collect();

        let closure = metric_closure(&graph, &all);
        let reconstructed = reconstruct(&graph, &minimum_arborescence(&closure, &0));
        let direct = minimum_arborescence(&graph, &0);

        prop_assert_eq!(sorted_edges(&reconstructed), sorted_edges(&direct));
    }

    #[test]
    fn steiner_tree_covers_reachable_terminals(
        seed in any::<u64>(),
        vertices in 2u32..30,
        degree in 0u32..4,
        picks in proptest::collection::vec(0u32..30, 1..6),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_mesh(&mut rng, vertices, degree, 10.0);
        let wanted: HashSet<u32> = picks.into_iter().filter(|&pick| pick < vertices).collect();

        let steiner_tree = approximate_steiner_tree(&graph, &0, &wanted);
        let reachable = graph.reachable_vertices(&0);

        for terminal in wanted.iter() {
            prop_assert_eq!(steiner_tree.tree.contains(terminal), reachable.contains(terminal));
            prop_assert_eq!(steiner_tree.unreached.contains(terminal), !reachable.contains(terminal));
        }
        for index in 0..steiner_tree.tree.size() {
            let children: usize = steiner_tree
                .tree
                .children(index)
                .iter()
                .map(|&child| steiner_tree.tree.size_of(child))
                .sum();
            prop_assert_eq!(steiner_tree.tree.size_of(index), 1 + children);
        }
        let values: HashSet<u32> = steiner_tree.tree.values().copied().collect();
        prop_assert_eq!(values.len(), steiner_tree.tree.size());
    }
}
