use super::*;
use crate::helpers::*;
use crate::models::{Address, Connection};
use proptest::prelude::*;

fn find_path(addresses: &[Address], start: AddressId, end: AddressId) -> GenericResult<Vec<AddressId>> {
    let graph = Graph::new(addresses);
    let tree = shortest_path_tree(&graph, start);

    reconstruct_path(&tree, start, end)
}

#[test]
fn can_prefer_shorter_path_over_direct_edge() {
    let addresses = create_triangle_addresses();
    let graph = Graph::new(addresses.as_slice());

    let tree = shortest_path_tree(&graph, 1);
    let path = reconstruct_path(&tree, 1, 3).expect("path should exist");

    assert_eq!(path, vec![1, 2, 3]);
    assert_eq!(path_distance(&graph, path.as_slice()), Some(8.));
    assert_eq!(tree.distance(3), Some(8.));
    assert_eq!(tree.predecessor(3), Some(2));
    assert_eq!(tree.source(), 1);
}

#[test]
fn can_return_single_vertex_path_when_start_is_end() {
    let addresses = create_triangle_addresses();

    assert_eq!(find_path(addresses.as_slice(), 2, 2), Ok(vec![2]));
}

#[test]
fn can_return_error_when_end_is_unreachable() {
    let addresses = create_addresses(&[(1, &[(2, 4.)]), (2, &[]), (3, &[(1, 1.)])]);

    let result = find_path(addresses.as_slice(), 1, 3);

    let err = result.expect_err("path should not exist");
    assert!(err.to_string().contains("no path found from 1 to 3"));
    assert!(err.to_string().contains("current node: 3"));
}

#[test]
fn can_report_partial_trace_in_error() {
    let addresses = create_addresses(&[(1, &[(2, 1.)]), (2, &[]), (3, &[(4, 1.)]), (4, &[])]);
    let graph = Graph::new(addresses.as_slice());
    let tree = shortest_path_tree(&graph, 3);

    let err = reconstruct_path(&tree, 1, 4).expect_err("path should not exist");

    assert_eq!(err.to_string(), "no path found from 1 to 4, current node: 3, path so far: 4");
}

#[test]
fn can_treat_zero_distance_as_no_connection() {
    let addresses = create_addresses(&[(1, &[(2, 0.)]), (2, &[])]);

    assert!(find_path(addresses.as_slice(), 1, 2).is_err());
}

#[test]
fn can_use_cheapest_parallel_edge() {
    let addresses = create_addresses(&[(1, &[(2, 9.), (2, 2.)]), (2, &[])]);
    let graph = Graph::new(addresses.as_slice());

    let tree = shortest_path_tree(&graph, 1);

    assert_eq!(tree.distance(2), Some(2.));
}

#[test]
fn can_break_ties_by_vertex_id() {
    let addresses = create_addresses(&[(1, &[(3, 2.), (2, 2.)]), (2, &[(4, 3.)]), (3, &[(4, 3.)]), (4, &[])]);

    assert_eq!(find_path(addresses.as_slice(), 1, 4), Ok(vec![1, 2, 4]));
}

#[test]
fn can_skip_stale_frontier_entries() {
    // 3 is first reached through the direct edge, then improved via 2
    let addresses = create_addresses(&[(1, &[(3, 10.), (2, 1.)]), (2, &[(3, 1.)]), (3, &[(4, 1.)]), (4, &[])]);
    let graph = Graph::new(addresses.as_slice());

    let tree = shortest_path_tree(&graph, 1);

    assert_eq!(tree.distance(3), Some(2.));
    assert_eq!(tree.distance(4), Some(3.));
    assert_eq!(reconstruct_path(&tree, 1, 4), Ok(vec![1, 2, 3, 4]));
}

#[test]
fn can_reach_vertex_outside_of_address_list() {
    let addresses = create_addresses(&[(1, &[(99, 4.)])]);
    let graph = Graph::new(addresses.as_slice());

    let tree = shortest_path_tree(&graph, 1);

    assert_eq!(tree.distance(99), Some(4.));
    assert!(tree.predecessors().get(&1).is_none());
}

#[test]
fn can_return_none_distance_for_missing_hop() {
    let graph = Graph::new(create_triangle_addresses().as_slice());

    assert_eq!(path_distance(&graph, &[3, 1]), None);
    assert_eq!(path_distance(&graph, &[1]), Some(0.));
}

fn get_distances_by_bellman_ford(
    vertices: &[AddressId],
    edges: &[(AddressId, AddressId, f64)],
    source: AddressId,
) -> Vec<Option<f64>> {
    let mut distances = vertices.iter().map(|&v| (v == source).then_some(0.)).collect::<Vec<Option<f64>>>();
    let index = |id: AddressId| vertices.iter().position(|&v| v == id).expect("unknown vertex");

    (0..vertices.len()).for_each(|_| {
        edges.iter().for_each(|&(from, to, weight)| {
            if let Some(from_distance) = distances[index(from)] {
                let candidate = from_distance + weight;
                if distances[index(to)].is_none_or(|current| candidate < current) {
                    distances[index(to)] = Some(candidate);
                }
            }
        });
    });

    distances
}

prop_compose! {
    fn generate_network()
        (size in 1_i64..8)
        (edges in prop::collection::vec((1..=size, 1..=size, 1_u32..20), 0..24), size in Just(size))
        -> (Vec<AddressId>, Vec<(AddressId, AddressId, f64)>) {
        let vertices = (1..=size).collect::<Vec<_>>();
        let edges = edges.into_iter().map(|(from, to, weight)| (from, to, weight as f64)).collect();

        (vertices, edges)
    }
}

proptest! {
    #[test]
    fn can_match_bellman_ford_distances((vertices, edges) in generate_network()) {
        let addresses = vertices
            .iter()
            .map(|&id| {
                let connections = edges
                    .iter()
                    .filter(|(from, _, _)| *from == id)
                    .map(|&(_, to, weight)| Connection::new(to, weight))
                    .collect();
                Address::new(id, connections)
            })
            .collect::<Vec<_>>();
        let graph = Graph::new(addresses.as_slice());
        let source = vertices[0];

        let tree = shortest_path_tree(&graph, source);
        let expected = get_distances_by_bellman_ford(vertices.as_slice(), edges.as_slice(), source);

        for (&vertex, expected) in vertices.iter().zip(expected) {
            prop_assert_eq!(tree.distance(vertex), expected);

            match (reconstruct_path(&tree, source, vertex), expected) {
                (Ok(path), Some(expected)) => {
                    prop_assert_eq!(path.first().copied(), Some(source));
                    prop_assert_eq!(path.last().copied(), Some(vertex));
                    prop_assert_eq!(path_distance(&graph, path.as_slice()), Some(expected));
                }
                (Err(_), None) => {}
                (result, expected) => prop_assert!(false, "unexpected result {result:?} for {expected:?}"),
            }
        }
    }
}
