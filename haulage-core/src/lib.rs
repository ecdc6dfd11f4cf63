//! Core crate contains the building blocks to distribute cargo between trucks of a fleet and to route
//! the fleet through a road network.
//!
//! The pipeline has two stages:
//! - **allocation**: every truck, in the given order, picks a value-maximal subset of the remaining
//!   cargo which fits into its capacity (0/1 knapsack solved with dynamic programming).
//! - **routing**: a shortest path is found from the first to the last address of the network
//!   (Dijkstra's algorithm) and the same route is assigned to every truck.
//!
//! # Examples
//!
//! ```
//! use haulage_core::prelude::*;
//!
//! let problem = Problem {
//!     cargos: vec![Cargo::new(CargoId(0), "books", 2., 3.), Cargo::new(CargoId(1), "chairs", 3., 4.)],
//!     addresses: vec![
//!         Address::new(1, vec![Connection::new(2, 5.)]),
//!         Address::new(2, vec![]),
//!     ],
//!     trucks: vec![Truck::new("t1", 5.)],
//! };
//!
//! let solution = solve(&problem, &Environment::default()).expect("cannot solve");
//! let report = format_report(&solution);
//!
//! assert!(report.contains("Cargos: books, chairs"));
//! assert!(report.contains("Route: 1 -> 2"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
