//! A collection of models to represent the problem and its solution.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
