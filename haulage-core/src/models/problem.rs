#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

/// An address identifier. Addresses are the vertices of the road network.
pub type AddressId = i64;

/// Specifies distance between two addresses.
pub type Distance = f64;

/// A unique cargo identifier assigned at intake. Cargo with identical name, weight and value are
/// still distinguished by their ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CargoId(pub usize);

impl CargoId {
    /// Returns underlying index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Represents a cargo item which can be put into a truck.
#[derive(Clone, Debug, PartialEq)]
pub struct Cargo {
    /// A unique id.
    pub id: CargoId,
    /// A name used in reports.
    pub name: String,
    /// Cargo weight, non-negative.
    pub weight: f64,
    /// Cargo value, non-negative.
    pub value: f64,
}

impl Cargo {
    /// Creates a new instance of `Cargo`.
    pub fn new(id: CargoId, name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self { id, name: name.into(), weight, value }
    }
}

/// A directed connection from one address to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    /// Target address.
    pub to: AddressId,
    /// Distance to the target address. Only strictly positive distances form an edge.
    pub distance: Distance,
}

impl Connection {
    /// Creates a new instance of `Connection`.
    pub fn new(to: AddressId, distance: Distance) -> Self {
        Self { to, distance }
    }
}

/// An address with its outgoing connections.
#[derive(Clone, Debug, PartialEq)]
pub struct Address {
    /// Address id.
    pub id: AddressId,
    /// Outgoing connections, can be empty.
    pub connections: Vec<Connection>,
}

impl Address {
    /// Creates a new instance of `Address`.
    pub fn new(id: AddressId, connections: Vec<Connection>) -> Self {
        Self { id, connections }
    }
}

/// A truck of the fleet.
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    /// A truck name, used to identify the truck in reports.
    pub name: String,
    /// Max total weight the truck can carry.
    pub capacity: f64,
}

impl Truck {
    /// Creates a new instance of `Truck`.
    pub fn new(name: impl Into<String>, capacity: f64) -> Self {
        Self { name: name.into(), capacity }
    }
}

/// Defines the problem: cargo to distribute, road network and the fleet.
#[derive(Clone, Debug, Default)]
pub struct Problem {
    /// Cargo in intake order.
    pub cargos: Vec<Cargo>,
    /// Addresses in input order: the first one is the route start, the last one is the route end.
    pub addresses: Vec<Address>,
    /// Trucks in processing order.
    pub trucks: Vec<Truck>,
}
