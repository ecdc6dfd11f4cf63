//! Pragmatic crate allows to specify haulage problems via a simple **pragmatic** json format,
//! validates them and writes solutions back as json.
//!
//! A problem consists of three lists:
//! - `cargos`: items with `name`, `weight` and `value`
//! - `addresses`: road network vertices with `id` and outgoing `distances`
//! - `trucks`: fleet with `name` and `capacity`
//!
//! Route goes from the first to the last address.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod format;
pub mod validation;
