#[cfg(test)]
#[path = "../../tests/unit/solver/pool_test.rs"]
mod pool_test;

use crate::models::{Cargo, CargoId};
use rustc_hash::FxHashSet;

/// A collection of cargo not yet assigned to any truck. The pool is depleted monotonically:
/// every allocation step consumes the pool and returns what is left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CargoPool {
    cargos: Vec<Cargo>,
}

impl CargoPool {
    /// Creates a new instance of `CargoPool`.
    pub fn new(cargos: Vec<Cargo>) -> Self {
        Self { cargos }
    }

    /// Returns cargo left in the pool, in intake order.
    pub fn cargos(&self) -> &[Cargo] {
        self.cargos.as_slice()
    }

    /// Returns amount of cargo in the pool.
    pub fn len(&self) -> usize {
        self.cargos.len()
    }

    /// Checks whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cargos.is_empty()
    }

    /// Removes cargo with given ids from the pool. Returns removed cargo (in intake order) and the
    /// remaining pool. Ids which are not in the pool are ignored.
    pub fn take(self, ids: &[CargoId]) -> (Vec<Cargo>, CargoPool) {
        let ids = ids.iter().copied().collect::<FxHashSet<_>>();
        let (taken, remaining): (Vec<_>, Vec<_>) = self.cargos.into_iter().partition(|cargo| ids.contains(&cargo.id));

        (taken, CargoPool::new(remaining))
    }

    /// Consumes the pool returning its cargo.
    pub fn into_cargos(self) -> Vec<Cargo> {
        self.cargos
    }
}
