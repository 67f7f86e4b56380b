use depview::core::{
    DependencyGraph, GraphBuilder, RawExclusion, ResolvedNode, ResolvedProject, TraversalConfig,
    TreeWalker,
};
use petgraph::visit::EdgeRef;

fn dep(group: &str, name: &str, scope: &str, dependencies: Vec<ResolvedNode>) -> ResolvedNode {
    ResolvedNode {
        group: group.to_string(),
        name: name.to_string(),
        version: "1.0".to_string(),
        packaging: "jar".to_string(),
        classifier: None,
        scope: scope.to_string(),
        dependencies,
    }
}

fn project(dependencies: Vec<ResolvedNode>) -> ResolvedProject {
    ResolvedProject {
        group: "com.example".to_string(),
        name: "app".to_string(),
        version: "1.0".to_string(),
        packaging: "jar".to_string(),
        dependencies,
    }
}

fn walk(project: &ResolvedProject, config: &TraversalConfig) -> DependencyGraph {
    let mut builder = GraphBuilder::new();
    TreeWalker::new(config).walk(project, &mut builder);
    builder.build()
}

fn node_names(graph: &DependencyGraph) -> Vec<String> {
    let mut names: Vec<String> = graph
        .node_indices()
        .map(|idx| graph[idx].id.name.clone())
        .collect();
    names.sort();
    names
}

fn edge_triples(graph: &DependencyGraph) -> Vec<(String, String, String)> {
    let mut triples: Vec<(String, String, String)> = graph
        .edge_references()
        .map(|edge| {
            let weight = edge.weight();
            (
                weight.from.name.clone(),
                weight.to.name.clone(),
                weight.scope.clone(),
            )
        })
        .collect();
    triples.sort();
    triples
}

#[test]
fn root_project_is_a_flagged_node() {
    let graph = walk(&project(vec![]), &TraversalConfig::unrestricted());
    assert_eq!(graph.node_count(), 1);
    let root = &graph[graph.node_indices().next().unwrap()];
    assert!(root.is_root);
    assert_eq!(root.id.name, "app");
}

#[test]
fn unrestricted_walk_keeps_everything() {
    let tree = project(vec![
        dep(
            "org.lib",
            "a",
            "compile",
            vec![dep("org.lib", "b", "compile", vec![])],
        ),
        dep("org.lib", "c", "runtime", vec![]),
    ]);

    let graph = walk(&tree, &TraversalConfig::unrestricted());
    assert_eq!(node_names(&graph), ["a", "app", "b", "c"]);
    assert_eq!(
        edge_triples(&graph),
        [
            ("a".to_string(), "b".to_string(), "compile".to_string()),
            ("app".to_string(), "a".to_string(), "compile".to_string()),
            ("app".to_string(), "c".to_string(), "runtime".to_string()),
        ]
    );
}

#[test]
fn max_depth_zero_keeps_only_direct_dependencies() {
    let tree = project(vec![dep(
        "org.lib",
        "direct",
        "compile",
        vec![dep("org.lib", "grandchild", "compile", vec![])],
    )]);

    let config = TraversalConfig::new("", 0, &[], &[]).unwrap();
    let graph = walk(&tree, &config);
    assert_eq!(node_names(&graph), ["app", "direct"]);
}

#[test]
fn depth_boundary_node_is_kept_its_children_are_not() {
    let tree = project(vec![dep(
        "org.lib",
        "d0",
        "compile",
        vec![dep(
            "org.lib",
            "d1",
            "compile",
            vec![dep("org.lib", "d2", "compile", vec![])],
        )],
    )]);

    let config = TraversalConfig::new("", 1, &[], &[]).unwrap();
    let graph = walk(&tree, &config);
    assert_eq!(node_names(&graph), ["app", "d0", "d1"]);
}

#[test]
fn disallowed_scope_skips_the_whole_subtree() {
    let tree = project(vec![dep(
        "org.lib",
        "testlib",
        "test",
        // compile-scoped child must not resurface through a skipped parent
        vec![dep("org.lib", "hidden", "compile", vec![])],
    )]);

    let config = TraversalConfig::new("", -1, &["compile".to_string()], &[]).unwrap();
    let graph = walk(&tree, &config);
    assert_eq!(node_names(&graph), ["app"]);
}

#[test]
fn includes_prune_non_matching_subtrees() {
    let tree = project(vec![
        dep("com.shared", "kept", "compile", vec![]),
        dep(
            "org.other",
            "dropped",
            "compile",
            vec![dep("com.shared", "unreachable", "compile", vec![])],
        ),
    ]);

    let config = TraversalConfig::new("com.shared", -1, &[], &[])
        .unwrap()
        .with_root_group("com.example");
    let graph = walk(&tree, &config);
    assert_eq!(node_names(&graph), ["app", "kept"]);
}

#[test]
fn excluded_node_takes_its_subtree_with_it() {
    let tree = project(vec![dep(
        "org.legacy",
        "old",
        "compile",
        vec![dep("org.lib", "inner", "compile", vec![])],
    )]);

    let raw = vec![RawExclusion {
        group: Some("^org\\.legacy$".to_string()),
        ..Default::default()
    }];
    let config = TraversalConfig::new("", -1, &[], &raw).unwrap();
    let graph = walk(&tree, &config);
    assert_eq!(node_names(&graph), ["app"]);
}

#[test]
fn test_scope_exclusion_spares_nodes_reached_by_other_scopes() {
    let shared = |scope: &str| dep("org.lib", "shared", scope, vec![]);
    let tree = project(vec![
        dep("org.lib", "junit", "test", vec![shared("test")]),
        dep("org.lib", "main", "compile", vec![shared("compile")]),
    ]);

    let raw = vec![RawExclusion {
        scope: Some("test".to_string()),
        ..Default::default()
    }];
    let config = TraversalConfig::new("", -1, &[], &raw).unwrap();
    let graph = walk(&tree, &config);

    assert_eq!(node_names(&graph), ["app", "main", "shared"]);
    let triples = edge_triples(&graph);
    assert!(triples.iter().all(|(_, _, scope)| scope != "test"));
    assert!(triples.contains(&(
        "main".to_string(),
        "shared".to_string(),
        "compile".to_string()
    )));
}

#[test]
fn shared_artifact_collapses_to_one_node_with_multiple_parents() {
    let common = || dep("org.lib", "common", "compile", vec![]);
    let tree = project(vec![
        dep("org.lib", "a", "compile", vec![common()]),
        dep("org.lib", "b", "compile", vec![common()]),
    ]);

    let graph = walk(&tree, &TraversalConfig::unrestricted());
    assert_eq!(node_names(&graph), ["a", "app", "b", "common"]);
    let triples = edge_triples(&graph);
    assert!(triples.contains(&(
        "a".to_string(),
        "common".to_string(),
        "compile".to_string()
    )));
    assert!(triples.contains(&(
        "b".to_string(),
        "common".to_string(),
        "compile".to_string()
    )));
}

#[test]
fn every_edge_endpoint_is_a_graph_node() {
    let tree = project(vec![dep(
        "org.lib",
        "a",
        "compile",
        vec![dep("org.lib", "b", "runtime", vec![])],
    )]);

    let graph = walk(&tree, &TraversalConfig::unrestricted());
    for edge in graph.edge_references() {
        assert!(graph.node_weight(edge.source()).is_some());
        assert!(graph.node_weight(edge.target()).is_some());
    }
}

#[test]
fn walking_twice_yields_identical_sets() {
    let tree = project(vec![
        dep(
            "org.lib",
            "a",
            "compile",
            vec![dep("org.lib", "shared", "compile", vec![])],
        ),
        dep(
            "org.lib",
            "b",
            "runtime",
            vec![dep("org.lib", "shared", "runtime", vec![])],
        ),
    ]);

    let config = TraversalConfig::unrestricted();
    let first = walk(&tree, &config);
    let second = walk(&tree, &config);

    assert_eq!(node_names(&first), node_names(&second));
    assert_eq!(edge_triples(&first), edge_triples(&second));
}
