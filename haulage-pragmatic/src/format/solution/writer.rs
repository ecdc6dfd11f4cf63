#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::format::solution::{Solution as ApiSolution, Statistic, Tour, serialize_solution};
use haulage_core::algorithms::graph::Graph;
use haulage_core::algorithms::shortest_path::path_distance;
use haulage_core::models::{Problem, Solution};
use std::io::{BufWriter, Write};

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for Solution {
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = create_solution(problem, self);

        serialize_solution(writer, &solution).map_err(|err| err.to_string())
    }
}

/// Creates pragmatic solution from the core one.
pub fn create_solution(problem: &Problem, solution: &Solution) -> ApiSolution {
    let graph = Graph::new(problem.addresses.as_slice());

    let tours = solution
        .assignments
        .iter()
        .map(|assignment| Tour {
            truck: assignment.truck.clone(),
            cargos: assignment.cargos.iter().map(|cargo| cargo.name.clone()).collect(),
            weight: assignment.total_weight(),
            value: assignment.total_value(),
            route: assignment.route.clone(),
            distance: path_distance(&graph, assignment.route.as_slice()).unwrap_or_default(),
        })
        .collect::<Vec<_>>();

    let statistic = tours.iter().fold(
        Statistic { unassigned: solution.unassigned.len(), ..Statistic::default() },
        |acc, tour| Statistic {
            weight: acc.weight + tour.weight,
            value: acc.value + tour.value,
            distance: acc.distance + tour.distance,
            assigned: acc.assigned + tour.cargos.len(),
            unassigned: acc.unassigned,
        },
    );

    ApiSolution {
        statistic,
        tours,
        unassigned: solution.unassigned.iter().map(|cargo| cargo.name.clone()).collect(),
    }
}
