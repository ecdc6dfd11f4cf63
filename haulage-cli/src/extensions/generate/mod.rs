//! Generates random problems in pragmatic format.
//!
//! Addresses form a chain where each one is connected to the next one, so the last address is
//! always reachable from the first one. Some random shortcuts and back edges are added on top of
//! the chain.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use haulage_pragmatic::format::problem::*;
use rand::Rng;

/// Specifies sizes of the problem to generate.
#[derive(Clone, Debug)]
pub struct GenerateSizes {
    /// Amount of cargo.
    pub cargos: usize,
    /// Amount of addresses.
    pub addresses: usize,
    /// Amount of trucks.
    pub trucks: usize,
}

/// Generates a problem of given sizes.
pub fn generate_problem<R: Rng>(sizes: &GenerateSizes, random: &mut R) -> Problem {
    Problem {
        cargos: generate_cargos(sizes.cargos, random),
        addresses: generate_addresses(sizes.addresses, random),
        trucks: generate_trucks(sizes.trucks, random),
    }
}

fn generate_cargos<R: Rng>(size: usize, random: &mut R) -> Vec<Cargo> {
    (1..=size)
        .map(|idx| Cargo {
            name: format!("cargo{idx}"),
            weight: random.gen_range(1..=10) as f64,
            value: random.gen_range(1..=100) as f64,
        })
        .collect()
}

fn generate_addresses<R: Rng>(size: usize, random: &mut R) -> Vec<Address> {
    let ids = 1..=size as i64;

    ids.clone()
        .map(|id| {
            let next = (id < size as i64)
                .then(|| AddressDistance { to: id + 1, distance: random.gen_range(1..=20) as f64 });
            let targets = (0..random.gen_range(0..=2)).map(|_| random.gen_range(ids.clone())).collect::<Vec<_>>();
            let extra = targets
                .into_iter()
                .filter(|to| *to != id && *to != id + 1)
                .map(|to| AddressDistance { to, distance: random.gen_range(1..=50) as f64 })
                .collect::<Vec<_>>();

            Address { id, distances: next.into_iter().chain(extra).collect() }
        })
        .collect()
}

fn generate_trucks<R: Rng>(size: usize, random: &mut R) -> Vec<Truck> {
    (1..=size).map(|idx| Truck { name: format!("truck{idx}"), capacity: random.gen_range(5..=30) as f64 }).collect()
}
