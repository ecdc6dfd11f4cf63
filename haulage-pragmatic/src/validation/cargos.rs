#[cfg(test)]
#[path = "../../tests/unit/validation/cargos_test.rs"]
mod cargos_test;

use super::*;

/// Checks that cargo weights are finite non-negative numbers.
fn check_e1001_cargo_weight_is_correct(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names =
        ctx.cargos().filter(|cargo| !is_non_negative(cargo.weight)).map(|cargo| cargo.name.clone()).collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001",
            format!("invalid cargo weight: {}", names.join(", ")),
            "ensure that cargo weight is a non-negative number",
        ))
    }
}

/// Checks that cargo values are finite non-negative numbers.
fn check_e1002_cargo_value_is_correct(ctx: &ValidationContext) -> Result<(), FormatError> {
    let names =
        ctx.cargos().filter(|cargo| !is_non_negative(cargo.value)).map(|cargo| cargo.name.clone()).collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002",
            format!("invalid cargo value: {}", names.join(", ")),
            "ensure that cargo value is a non-negative number",
        ))
    }
}

/// Validates cargos.
pub fn validate_cargos(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1001_cargo_weight_is_correct(ctx), check_e1002_cargo_value_is_correct(ctx)])
}
