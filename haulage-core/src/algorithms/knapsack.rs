//! This module contains a 0/1 knapsack solver used to pick cargo for a single truck.
//!
//! Capacity is truncated to whole units before the table is built. Weights keep their fractional
//! part when checked against a budget, only the budget left after an item is truncated, so the
//! selected weight never exceeds the capacity.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/knapsack_test.rs"]
mod knapsack_test;

use crate::models::{Cargo, CargoId};

/// Selects a subset of `cargos` with maximal total value whose total weight does not exceed
/// `capacity`. Returned ids follow the order of `cargos`.
///
/// Capacity is truncated to whole units and the table has one column per unit, so the caller must
/// keep `table_size` within memory limits. An item fits a budget only when its exact weight does,
/// what is left after taking it is truncated to whole units again.
///
/// An item is taken only when it strictly improves the best value, so among equally valuable
/// subsets the one built from earlier items wins.
pub fn allocate(cargos: &[Cargo], capacity: f64) -> Vec<CargoId> {
    let capacity = to_units(capacity);
    if capacity == 0 || cargos.is_empty() {
        return vec![];
    }

    let table = KnapsackTable::new(cargos, capacity);

    let mut selected = vec![];
    let mut remaining = capacity;

    for item in (1..=cargos.len()).rev() {
        let cargo = &cargos[item - 1];
        let is_taken = table.get(item, remaining) != table.get(item - 1, remaining);

        if let (true, Some(rest)) = (is_taken, remaining_budget(remaining, cargo.weight)) {
            selected.push(cargo.id);
            remaining = rest;
        }
    }

    selected.reverse();

    selected
}

/// Returns amount of cells in the table built for the given amount of items and capacity.
pub fn table_size(items: usize, capacity: f64) -> usize {
    (items + 1).saturating_mul(to_units(capacity).saturating_add(1))
}

/// Converts a weight or capacity into whole units: fractional part is truncated, negative and
/// non finite values become zero.
pub fn to_units(amount: f64) -> usize {
    if amount.is_finite() && amount > 0. { amount.trunc() as usize } else { 0 }
}

/// Returns whole units left from `budget` after putting an item of `weight`, or `None` when the
/// item does not fit.
fn remaining_budget(budget: usize, weight: f64) -> Option<usize> {
    (weight <= budget as f64).then(|| to_units(budget as f64 - weight).min(budget))
}

/// A dynamic programming table where cell `[i][w]` keeps the best value achievable with weight
/// budget `w` using the first `i` items.
struct KnapsackTable {
    width: usize,
    cells: Vec<f64>,
}

impl KnapsackTable {
    fn new(cargos: &[Cargo], capacity: usize) -> Self {
        let width = capacity.saturating_add(1);
        let mut cells = vec![0_f64; (cargos.len() + 1).saturating_mul(width)];

        cargos.iter().enumerate().for_each(|(idx, cargo)| {
            let (previous, current) = cells[idx * width..(idx + 2) * width].split_at_mut(width);

            (0..width).for_each(|budget| {
                current[budget] = match remaining_budget(budget, cargo.weight) {
                    Some(rest) => previous[budget].max(previous[rest] + cargo.value),
                    None => previous[budget],
                };
            });
        });

        Self { width, cells }
    }

    fn get(&self, item: usize, budget: usize) -> f64 {
        self.cells[item * self.width + budget]
    }
}
