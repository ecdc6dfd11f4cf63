#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A cargo item to be delivered.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    /// A cargo name.
    pub name: String,
    /// Cargo weight.
    pub weight: f64,
    /// Cargo value, bigger value - more chances to be picked.
    pub value: f64,
}

/// A distance from an address to another one.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDistance {
    /// Target address id.
    pub to: i64,
    /// Distance value. Zero or negative distance means there is no connection.
    pub distance: f64,
}

/// An address of the road network.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address id.
    pub id: i64,
    /// Outgoing distances.
    #[serde(default)]
    pub distances: Vec<AddressDistance>,
}

/// A truck of the fleet.
#[derive(Clone, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    /// A unique truck name.
    pub name: String,
    /// Truck capacity.
    pub capacity: f64,
}

/// A haulage problem definition.
#[derive(Clone, Default, Deserialize, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Cargo to distribute.
    #[serde(default)]
    pub cargos: Vec<Cargo>,
    /// Addresses: the route starts at the first one and ends at the last one.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Trucks in processing order.
    #[serde(default)]
    pub trucks: Vec<Truck>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new("E0000", "cannot deserialize problem", format!("check input json: '{err}'")).into()
    })
}

/// Serializes problem in json format into `BufWriter`.
pub fn serialize_problem<W: Write>(writer: BufWriter<W>, problem: &Problem) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
