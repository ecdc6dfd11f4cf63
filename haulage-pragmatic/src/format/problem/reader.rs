#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::Problem as ApiProblem;
use crate::format::MultiFormatError;
use crate::validation::{ValidationContext, ValidationLimits};
use haulage_core::models::{Address, Cargo, CargoId, Connection, Problem as CoreProblem, Truck};

/// Validates the problem and maps it into the core model. Cargo ids are assigned in input order.
pub fn map_to_problem(problem: ApiProblem, limits: &ValidationLimits) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&problem, limits).validate()?;

    let cargos = problem
        .cargos
        .into_iter()
        .enumerate()
        .map(|(idx, cargo)| Cargo::new(CargoId(idx), cargo.name, cargo.weight, cargo.value))
        .collect();

    let addresses = problem
        .addresses
        .into_iter()
        .map(|address| {
            let connections = address
                .distances
                .into_iter()
                .map(|distance| Connection::new(distance.to, distance.distance))
                .collect();

            Address::new(address.id, connections)
        })
        .collect();

    let trucks = problem.trucks.into_iter().map(|truck| Truck::new(truck.name, truck.capacity)).collect();

    Ok(CoreProblem { cargos, addresses, trucks })
}
