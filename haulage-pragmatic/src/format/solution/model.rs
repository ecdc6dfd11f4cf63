use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// Represents solution statistic.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// Total weight of assigned cargo.
    pub weight: f64,
    /// Total value of assigned cargo.
    pub value: f64,
    /// Total distance driven by all trucks.
    pub distance: f64,
    /// Amount of assigned cargo.
    pub assigned: usize,
    /// Amount of unassigned cargo.
    pub unassigned: usize,
}

/// A tour of a single truck.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// A truck name.
    pub truck: String,
    /// Names of cargo loaded into the truck.
    pub cargos: Vec<String>,
    /// Total weight of loaded cargo.
    pub weight: f64,
    /// Total value of loaded cargo.
    pub value: f64,
    /// Address ids to visit.
    pub route: Vec<i64>,
    /// Route distance.
    pub distance: f64,
}

/// A pragmatic solution.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Total statistic.
    pub statistic: Statistic,
    /// List of tours in truck processing order.
    pub tours: Vec<Tour>,
    /// Names of cargo which were not assigned to any truck.
    pub unassigned: Vec<String>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
