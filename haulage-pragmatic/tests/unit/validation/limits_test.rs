use super::*;
use crate::helpers::*;

#[test]
fn can_use_default_limits() {
    let limits = ValidationLimits::default();

    assert_eq!(limits.max_capacity, 1_000_000.);
    assert_eq!(limits.max_table_size, 50_000_000);
}

#[test]
fn can_validate_correct_problem() {
    let problem = create_test_problem();
    let limits = ValidationLimits::default();

    assert!(ValidationContext::new(&problem, &limits).validate().is_ok());
}

#[test]
fn can_validate_degenerate_problem() {
    let problem = Problem::default();
    let limits = ValidationLimits::default();

    assert!(ValidationContext::new(&problem, &limits).validate().is_ok());
}

#[test]
fn can_collect_errors_from_all_rules() {
    let problem = Problem {
        cargos: vec![create_cargo("A", f64::NAN, -1.)],
        addresses: vec![create_address(1, &[(2, f64::INFINITY)])],
        trucks: vec![create_truck("T1", f64::NAN), create_truck("T1", 2_000_000.)],
    };
    let limits = ValidationLimits::default();

    let result = ValidationContext::new(&problem, &limits).validate();

    assert_eq!(
        result.expect_err("should fail").codes(),
        vec!["E1001", "E1002", "E1101", "E1102", "E1103", "E1201", "E1202"]
    );
}
