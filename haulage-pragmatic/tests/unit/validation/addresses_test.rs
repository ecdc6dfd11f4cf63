use super::*;
use crate::helpers::*;

fn validate_with_addresses(addresses: Vec<Address>) -> Result<(), Vec<FormatError>> {
    let problem = Problem { addresses, ..create_test_problem() };
    let limits = ValidationLimits::default();

    validate_addresses(&ValidationContext::new(&problem, &limits))
}

#[test]
fn can_accept_valid_network() {
    assert!(validate_with_addresses(create_test_problem().addresses).is_ok());
}

#[test]
fn can_accept_zero_and_negative_distances() {
    let result = validate_with_addresses(vec![create_address(1, &[(2, 0.)]), create_address(2, &[(1, -3.)])]);

    assert!(result.is_ok());
}

#[test]
fn can_detect_unknown_targets() {
    let result = validate_with_addresses(vec![
        create_address(1, &[(2, 1.), (9, 1.)]),
        create_address(2, &[(7, 2.)]),
    ]);

    let errors = result.expect_err("should fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E1201");
    assert_eq!(errors[0].cause, "distances target unknown addresses: 1->9, 2->7");
}

#[test]
fn can_detect_targets_defined_later() {
    let result = validate_with_addresses(vec![create_address(1, &[(3, 1.)]), create_address(3, &[(1, 1.)])]);

    assert!(result.is_ok());
}

parameterized_test! {can_detect_non_finite_distance, (distance, expected), {
    can_detect_non_finite_distance_impl(distance, expected);
}}

can_detect_non_finite_distance! {
    case01_finite: (2.5, None),
    case02_nan: (f64::NAN, Some("invalid distances: 1->2")),
    case03_infinite: (f64::INFINITY, Some("invalid distances: 1->2")),
}

fn can_detect_non_finite_distance_impl(distance: f64, expected: Option<&str>) {
    let problem = Problem {
        addresses: vec![create_address(1, &[(2, distance)]), create_address(2, &[])],
        ..Problem::default()
    };
    let limits = ValidationLimits::default();

    let result = check_e1202_distance_is_finite(&ValidationContext::new(&problem, &limits));

    assert_eq!(result.err().map(|err| err.cause), expected.map(|cause| cause.to_string()));
}
