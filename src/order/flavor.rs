use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cupcake flavors on the menu.
///
/// Identified by a stable snake_case id; display names come from
/// [`crate::labels::Labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Vanilla,
    Chocolate,
    RedVelvet,
    SaltedCaramel,
    Coffee,
}

impl Flavor {
    /// Menu order.
    pub const ALL: [Flavor; 5] = [
        Flavor::Vanilla,
        Flavor::Chocolate,
        Flavor::RedVelvet,
        Flavor::SaltedCaramel,
        Flavor::Coffee,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Flavor::Vanilla => "vanilla",
            Flavor::Chocolate => "chocolate",
            Flavor::RedVelvet => "red_velvet",
            Flavor::SaltedCaramel => "salted_caramel",
            Flavor::Coffee => "coffee",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string is not a known flavor id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFlavor(pub String);

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.id() == s)
            .ok_or_else(|| UnknownFlavor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for flavor in Flavor::ALL {
            assert_eq!(flavor.id().parse::<Flavor>(), Ok(flavor));
        }
    }

    #[test]
    fn display_names_are_not_ids() {
        assert_eq!(
            "Vanilla".parse::<Flavor>(),
            Err(UnknownFlavor("Vanilla".to_string()))
        );
    }
}
