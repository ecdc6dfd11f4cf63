//! Contains functionality to solve many problems at once.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;

use haulage_core::prelude::*;
use haulage_pragmatic::format::problem::PragmaticProblem;
use haulage_pragmatic::validation::ValidationLimits;
use rayon::prelude::*;
use std::io::{BufReader, Read};

/// A problem read from the input together with its solution.
pub type SolvedProblem = (Problem, Solution);

/// Reads, validates and solves given problems. Problems are processed in parallel, results are
/// returned in input order. A problem which cannot be read or solved does not affect others.
pub fn solve_problems<R: Read + Send>(
    readers: Vec<BufReader<R>>,
    limits: &ValidationLimits,
    environment: &Environment,
) -> Vec<GenericResult<SolvedProblem>> {
    readers.into_par_iter().map(|reader| solve_problem(reader, limits, environment)).collect()
}

/// Reads, validates and solves a single problem.
pub fn solve_problem<R: Read>(
    reader: BufReader<R>,
    limits: &ValidationLimits,
    environment: &Environment,
) -> GenericResult<SolvedProblem> {
    let problem = reader.read_pragmatic_with_limits(limits)?;
    let solution = solve(&problem, environment)?;

    Ok((problem, solution))
}
