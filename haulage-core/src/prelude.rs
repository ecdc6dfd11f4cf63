//! This module reimports commonly used types.

pub use crate::models::{Address, AddressId, Assignment, Cargo, CargoId, Connection, Distance, Problem};
pub use crate::models::{Route, Solution, Truck};
pub use crate::solver::{CargoPool, format_report, solve, write_report};
pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
