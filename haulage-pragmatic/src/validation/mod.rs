//! This module provides functionality to validate problem definition for logical correctness.
//!
//! All rules are evaluated and their errors are collected, so the user sees every issue at once.
//! Degenerate inputs (no cargo, no trucks, no addresses, zero capacity, zero distance) are valid.

#[cfg(test)]
#[path = "../../tests/unit/validation/limits_test.rs"]
mod limits_test;

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};

mod addresses;
use self::addresses::validate_addresses;

mod cargos;
use self::cargos::validate_cargos;

mod common;
use self::common::*;

mod trucks;
use self::trucks::validate_trucks;

/// Specifies limits which keep the allocation table within reasonable size.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationLimits {
    /// Max truck capacity.
    pub max_capacity: f64,
    /// Max amount of cells in the allocation table built for a single truck.
    pub max_table_size: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self { max_capacity: 1_000_000., max_table_size: 50_000_000 }
    }
}

/// A validation context which keeps the problem and the limits.
pub struct ValidationContext<'a> {
    /// A problem to validate.
    pub problem: &'a Problem,
    /// Limits to apply.
    pub limits: &'a ValidationLimits,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem, limits: &'a ValidationLimits) -> Self {
        Self { problem, limits }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_cargos(self)
            .err()
            .into_iter()
            .chain(validate_trucks(self).err())
            .chain(validate_addresses(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    fn cargos(&self) -> impl Iterator<Item = &Cargo> {
        self.problem.cargos.iter()
    }

    fn trucks(&self) -> impl Iterator<Item = &Truck> {
        self.problem.trucks.iter()
    }

    fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.problem.addresses.iter()
    }
}
