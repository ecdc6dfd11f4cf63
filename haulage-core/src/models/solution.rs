use crate::models::{AddressId, Cargo};

/// A route is an ordered sequence of addresses.
pub type Route = Vec<AddressId>;

/// Keeps what was assigned to a single truck.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// A truck name.
    pub truck: String,
    /// Cargo selected for the truck, in intake order.
    pub cargos: Vec<Cargo>,
    /// A route the truck should follow.
    pub route: Route,
}

impl Assignment {
    /// Returns total weight of the assigned cargo.
    pub fn total_weight(&self) -> f64 {
        self.cargos.iter().map(|cargo| cargo.weight).sum()
    }

    /// Returns total value of the assigned cargo.
    pub fn total_value(&self) -> f64 {
        self.cargos.iter().map(|cargo| cargo.value).sum()
    }
}

/// Represents a solution: one assignment per truck in processing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Assignments in truck processing order.
    pub assignments: Vec<Assignment>,
    /// Cargo which no truck has taken.
    pub unassigned: Vec<Cargo>,
}
