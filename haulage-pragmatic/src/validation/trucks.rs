#[cfg(test)]
#[path = "../../tests/unit/validation/trucks_test.rs"]
mod trucks_test;

use super::*;
use haulage_core::algorithms::knapsack::table_size;

/// Checks that fleet has no trucks with duplicate names.
fn check_e1101_no_trucks_with_duplicate_names(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.trucks().map(|truck| &truck.name)).map_or(Ok(()), |names| {
        Err(FormatError::new(
            "E1101",
            format!("duplicated truck names: {}", names.join(", ")),
            "remove duplicated trucks or give them unique names",
        ))
    })
}

/// Checks that truck capacity is a finite number. Zero or negative capacity is allowed: such truck
/// gets no cargo.
fn check_e1102_truck_capacity_is_finite(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names =
        ctx.trucks().filter(|truck| !truck.capacity.is_finite()).map(|truck| truck.name.clone()).collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1102",
            format!("invalid truck capacity: {}", names.join(", ")),
            "ensure that truck capacity is a finite number",
        ))
    }
}

/// Checks that truck capacity keeps the allocation table within limits.
fn check_e1103_truck_capacity_within_limits(ctx: &ValidationContext) -> Result<(), FormatError> {
    let cargo_size = ctx.problem.cargos.len();
    let names = ctx
        .trucks()
        .filter(|truck| truck.capacity.is_finite())
        .filter(|truck| {
            truck.capacity > ctx.limits.max_capacity
                || table_size(cargo_size, truck.capacity) > ctx.limits.max_table_size
        })
        .map(|truck| truck.name.clone())
        .collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1103",
            format!("truck capacity is too big: {}", names.join(", ")),
            "reduce truck capacity, split cargo into bigger units or increase limits",
            format!(
                "max capacity: {}, max table size: {}, cargo size: {cargo_size}",
                ctx.limits.max_capacity, ctx.limits.max_table_size
            ),
        ))
    }
}

/// Validates trucks of the fleet.
pub fn validate_trucks(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1101_no_trucks_with_duplicate_names(ctx),
        check_e1102_truck_capacity_is_finite(ctx),
        check_e1103_truck_capacity_within_limits(ctx),
    ])
}
