use super::*;
use crate::helpers::*;
use std::fs::File;
use std::sync::{Arc, Mutex};

fn open_problem(path: &str) -> BufReader<File> {
    BufReader::new(File::open(path).expect("cannot open problem"))
}

#[test]
fn can_solve_problems_in_input_order() {
    let readers = vec![open_problem(SIMPLE_PROBLEM_PATH), open_problem(DISCONNECTED_PROBLEM_PATH)];

    let results = solve_problems(readers, &ValidationLimits::default(), &Environment::new_silent());

    assert_eq!(results.len(), 2);
    let (problem, solution) = results[0].as_ref().expect("cannot solve first problem");
    assert_eq!(problem.cargos.len(), 3);
    assert_eq!(solution.assignments.len(), 2);
    assert!(solution.unassigned.is_empty());
    assert!(results[1].as_ref().expect_err("should fail").message().starts_with("no path found from 1 to 2"));
}

#[test]
fn can_return_validation_errors() {
    let reader = BufReader::new(r#"{ "cargos": [{ "name": "A", "weight": -1, "value": 1 }] }"#.as_bytes());

    let result = solve_problem(reader, &ValidationLimits::default(), &Environment::new_silent());

    let message = result.expect_err("should fail").to_string();
    assert!(message.starts_with("problem has the following errors:"));
    assert!(message.contains("E1001"));
}

#[test]
fn can_log_using_shared_environment() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let environment = Environment::new({
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    });
    let readers = vec![open_problem(SIMPLE_PROBLEM_PATH), open_problem(SIMPLE_PROBLEM_PATH)];

    let results = solve_problems(readers, &ValidationLimits::default(), &environment);

    assert!(results.iter().all(|result| result.is_ok()));
    let messages = messages.lock().unwrap();
    assert_eq!(messages.iter().filter(|msg| msg.starts_with("solving problem with 3 cargos")).count(), 2);
}
