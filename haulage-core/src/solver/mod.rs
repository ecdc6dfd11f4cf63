//! The solver module sequences the pipeline: cargo allocation truck by truck, then routing.
//!
//! Allocation is greedy and order dependent: trucks are processed in the given order, each one picks
//! a value-maximal subset of what is left in the cargo pool, and picked cargo is removed from the
//! pool before the next truck is processed. There is no rebalancing afterwards.
//!
//! Routing is computed once, from the first to the last address, and the same route is assigned to
//! every truck.

#[cfg(test)]
#[path = "../../tests/unit/solver/solve_test.rs"]
mod solve_test;

mod pool;
pub use self::pool::CargoPool;

mod report;
pub use self::report::{format_report, write_report};

use crate::algorithms::graph::Graph;
use crate::algorithms::knapsack::allocate;
use crate::algorithms::shortest_path::{path_distance, reconstruct_path, shortest_path_tree};
use crate::models::{Address, Assignment, Cargo, Problem, Route, Solution, Truck};
use crate::utils::{Environment, GenericResult};

/// Cargo allocated to a truck, keyed by the truck name.
pub type Allocation = (String, Vec<Cargo>);

/// Solves the problem: allocates cargo to trucks and assigns them the route from the first to the
/// last address. Fails when the last address cannot be reached from the first one.
pub fn solve(problem: &Problem, environment: &Environment) -> GenericResult<Solution> {
    environment.log(&format!(
        "solving problem with {} cargos, {} addresses and {} trucks",
        problem.cargos.len(),
        problem.addresses.len(),
        problem.trucks.len()
    ));

    let (allocations, pool) = allocate_fleet(CargoPool::new(problem.cargos.clone()), &problem.trucks, environment);
    let route = find_route(&problem.addresses, environment)?;

    let assignments = allocations
        .into_iter()
        .map(|(truck, cargos)| Assignment { truck, cargos, route: route.clone() })
        .collect::<Vec<_>>();

    if !pool.is_empty() {
        environment.log(&format!("{} cargos left unassigned", pool.len()));
    }

    Ok(Solution { assignments, unassigned: pool.into_cargos() })
}

/// Allocates cargo from the pool to a single truck. Returns cargo selected for the truck and the
/// remaining pool.
pub fn allocate_truck(pool: CargoPool, truck: &Truck) -> (Vec<Cargo>, CargoPool) {
    let selected = allocate(pool.cargos(), truck.capacity);

    pool.take(selected.as_slice())
}

/// Allocates cargo to trucks sequentially in the given order, each truck sees only what previous
/// trucks have left. Returns allocations in truck order and the remaining pool.
pub fn allocate_fleet(pool: CargoPool, trucks: &[Truck], environment: &Environment) -> (Vec<Allocation>, CargoPool) {
    trucks.iter().fold((Vec::with_capacity(trucks.len()), pool), |(mut allocations, pool), truck| {
        let (cargos, pool) = allocate_truck(pool, truck);

        environment.log(&format!(
            "truck {} (capacity {}) takes {} cargos with total weight {} and value {}, {} left in pool",
            truck.name,
            truck.capacity,
            cargos.len(),
            cargos.iter().map(|cargo| cargo.weight).sum::<f64>(),
            cargos.iter().map(|cargo| cargo.value).sum::<f64>(),
            pool.len()
        ));

        allocations.push((truck.name.clone(), cargos));

        (allocations, pool)
    })
}

/// Finds the shortest route from the first to the last address. An empty address list gives an
/// empty route.
pub fn find_route(addresses: &[Address], environment: &Environment) -> GenericResult<Route> {
    let (Some(start), Some(end)) = (addresses.first(), addresses.last()) else {
        environment.log("no addresses specified, routing is skipped");
        return Ok(Route::default());
    };

    let graph = Graph::new(addresses);
    let tree = shortest_path_tree(&graph, start.id);
    let route = reconstruct_path(&tree, start.id, end.id)?;

    environment.log(&format!(
        "route from {} to {} has {} stops and total distance {}",
        start.id,
        end.id,
        route.len(),
        path_distance(&graph, route.as_slice()).unwrap_or_default()
    ));

    Ok(route)
}
