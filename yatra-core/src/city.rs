use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The cities the network serves. Routes and bookings only ever reference
/// this closed list; free-text city names are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Mumbai,
    Delhi,
    Bangalore,
    Kolkata,
    Chennai,
    Hyderabad,
    Pune,
    Ahmedabad,
    Jaipur,
    Lucknow,
    Kanpur,
    Nagpur,
    Indore,
    Thane,
    Bhopal,
    Visakhapatnam,
}

impl City {
    pub const ALL: [City; 16] = [
        City::Mumbai,
        City::Delhi,
        City::Bangalore,
        City::Kolkata,
        City::Chennai,
        City::Hyderabad,
        City::Pune,
        City::Ahmedabad,
        City::Jaipur,
        City::Lucknow,
        City::Kanpur,
        City::Nagpur,
        City::Indore,
        City::Thane,
        City::Bhopal,
        City::Visakhapatnam,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bangalore => "Bangalore",
            City::Kolkata => "Kolkata",
            City::Chennai => "Chennai",
            City::Hyderabad => "Hyderabad",
            City::Pune => "Pune",
            City::Ahmedabad => "Ahmedabad",
            City::Jaipur => "Jaipur",
            City::Lucknow => "Lucknow",
            City::Kanpur => "Kanpur",
            City::Nagpur => "Nagpur",
            City::Indore => "Indore",
            City::Thane => "Thane",
            City::Bhopal => "Bhopal",
            City::Visakhapatnam => "Visakhapatnam",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| CoreError::ValidationError(format!("unknown city: {}", s)))
    }
}
