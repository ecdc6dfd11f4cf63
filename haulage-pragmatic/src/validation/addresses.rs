#[cfg(test)]
#[path = "../../tests/unit/validation/addresses_test.rs"]
mod addresses_test;

use super::*;
use rustc_hash::FxHashSet;

/// Checks that every distance targets a known address.
fn check_e1201_distance_targets_known_address(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx.addresses().map(|address| address.id).collect::<FxHashSet<_>>();
    let unknown = ctx
        .addresses()
        .flat_map(|address| address.distances.iter().map(move |distance| (address.id, distance.to)))
        .filter(|(_, to)| !ids.contains(to))
        .map(|(from, to)| format!("{from}->{to}"))
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1201",
            format!("distances target unknown addresses: {}", unknown.join(", ")),
            "add missing addresses or remove distances to them",
        ))
    }
}

/// Checks that distances are finite numbers. Zero or negative distance is allowed: it means
/// there is no connection.
fn check_e1202_distance_is_finite(ctx: &ValidationContext) -> Result<(), FormatError> {
    let invalid = ctx
        .addresses()
        .flat_map(|address| address.distances.iter().map(move |distance| (address.id, distance)))
        .filter(|(_, distance)| !distance.distance.is_finite())
        .map(|(from, distance)| format!("{from}->{}", distance.to))
        .collect::<Vec<_>>();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1202",
            format!("invalid distances: {}", invalid.join(", ")),
            "ensure that distance is a finite number",
        ))
    }
}

/// Validates addresses.
pub fn validate_addresses(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1201_distance_targets_known_address(ctx), check_e1202_distance_is_finite(ctx)])
}
