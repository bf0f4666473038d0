use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vehicle {
    Motorcycle,
    ElectricScooter,
    Bicycle,
}

impl Vehicle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vehicle::Motorcycle => "MOTORCYCLE",
            Vehicle::ElectricScooter => "ELECTRIC_SCOOTER",
            Vehicle::Bicycle => "BICYCLE",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vehicle {
    type Err = String;

    // Accepts "electric_scooter", "ELECTRIC_SCOOTER" and "electric-scooter".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "MOTORCYCLE" => Ok(Vehicle::Motorcycle),
            "ELECTRIC_SCOOTER" => Ok(Vehicle::ElectricScooter),
            "BICYCLE" => Ok(Vehicle::Bicycle),
            _ => Err(s.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "box")]
    pub has_box: bool,
    pub vehicle: Vehicle,
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub vip: bool,
    pub pickup: Coordinate,
    pub delivery: Coordinate,
}

/// What a courier gets to see of an order once it has been filtered and ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOrderView {
    pub id: String,
    pub description: String,
}

impl From<&Order> for RankedOrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            description: order.description.clone(),
        }
    }
}

/// Records addressable by a string identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Courier {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }
}
