//! A crate which exposes the haulage solver as a command line tool and a small library API.
//!
//! The library part solves problems defined in pragmatic json format:
//!
//! ```
//! use haulage_cli::extensions::solve::config::Config;
//! use haulage_cli::get_solution_serialized;
//!
//! let problem = r#"{
//!   "cargos": [{ "name": "books", "weight": 2, "value": 3 }],
//!   "addresses": [{ "id": 1, "distances": [{ "to": 2, "distance": 4 }] }, { "id": 2 }],
//!   "trucks": [{ "name": "T1", "capacity": 5 }]
//! }"#;
//!
//! let solution = get_solution_serialized(problem.to_string(), &Config::default()).unwrap();
//!
//! assert!(solution.contains("\"books\""));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use haulage_core as core;
pub use haulage_pragmatic as pragmatic;

pub mod extensions;

use crate::extensions::solve::config::{Config, create_environment, create_limits};
use haulage_core::prelude::solve;
use haulage_pragmatic::format::MultiFormatError;
use haulage_pragmatic::format::problem::PragmaticProblem;
use haulage_pragmatic::format::solution::PragmaticSolution;
use std::io::BufWriter;

/// Returns serialized into json errors.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}

/// Reads the problem in pragmatic format, solves it and returns its solution serialized into json.
/// Validation errors are returned serialized into json as well.
pub fn get_solution_serialized(problem: String, config: &Config) -> Result<String, String> {
    let problem = problem
        .read_pragmatic_with_limits(&create_limits(config))
        .map_err(|errors| get_errors_serialized(&errors))?;

    let solution = solve(&problem, &create_environment(config)).map_err(|err| err.to_string())?;

    let mut buffer = Vec::new();
    solution.write_pragmatic_json(&problem, BufWriter::new(&mut buffer))?;

    String::from_utf8(buffer).map_err(|err| err.to_string())
}
