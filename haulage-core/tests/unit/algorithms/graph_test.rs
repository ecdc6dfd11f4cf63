use super::*;
use crate::helpers::*;

#[test]
fn can_create_vertex_for_every_address() {
    let addresses = create_addresses(&[(1, &[(2, 1.)]), (2, &[]), (3, &[(0, 0.)])]);

    let graph = Graph::new(addresses.as_slice());

    assert_eq!(graph.vertices(), &[1, 2, 3]);
    assert_eq!(graph.vertices().len(), 3);
    assert!(graph.contains(3));
    assert!(graph.neighbours(2).is_empty());
    assert!(graph.neighbours(3).is_empty());
}

parameterized_test! {can_filter_edges_by_distance, (distance, expected), {
    let addresses = create_addresses(&[(1, &[(2, distance)]), (2, &[])]);

    let graph = Graph::new(addresses.as_slice());

    assert_eq!(graph.edge_count(), expected);
}}

can_filter_edges_by_distance! {
    case01_positive: (3., 1),
    case02_fractional: (0.5, 1),
    case03_zero: (0., 0),
    case04_negative: (-2., 0),
    case05_nan: (f64::NAN, 0),
    case06_infinite: (f64::INFINITY, 0),
}

#[test]
fn can_keep_parallel_edges() {
    let addresses = create_addresses(&[(1, &[(2, 7.), (2, 4.)]), (2, &[])]);

    let graph = Graph::new(addresses.as_slice());

    assert_eq!(graph.neighbours(1), &[(2, 7.), (2, 4.)]);
    assert_eq!(graph.weight(1, 2), Some(4.));
}

#[test]
fn can_merge_repeated_addresses() {
    let addresses = create_addresses(&[(1, &[(2, 1.)]), (2, &[]), (1, &[(3, 2.)]), (3, &[])]);

    let graph = Graph::new(addresses.as_slice());

    assert_eq!(graph.vertices(), &[1, 2, 3]);
    assert_eq!(graph.neighbours(1), &[(2, 1.), (3, 2.)]);
}

#[test]
fn can_handle_unknown_vertex() {
    let graph = Graph::new(create_triangle_addresses().as_slice());

    assert!(!graph.contains(42));
    assert!(graph.neighbours(42).is_empty());
    assert_eq!(graph.weight(42, 1), None);
    assert_eq!(graph.weight(2, 1), None);
}

#[test]
fn can_create_empty_graph() {
    let graph = Graph::new(&[]);

    assert_eq!(graph.vertices().len(), 0);
    assert_eq!(graph.edge_count(), 0);
}
