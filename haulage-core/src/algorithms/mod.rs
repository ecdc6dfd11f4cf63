//! This module contains the algorithms used by the solver.

pub mod graph;
pub mod knapsack;
pub mod shortest_path;
