//! The closed set of room features.

use std::fmt;

/// A main feature a room can be built around.
///
/// The names returned by [`Feature::name`] are the exact entry names used in
/// the `main_features` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// A passage between areas.
    Corridor,
    /// An enclosed room with a size and shape.
    Chamber,
    /// A creature encounter.
    Creature,
    /// Another group of explorers.
    Explorers,
    /// A hollow between structural layers.
    InterstitialCavity,
    /// A connection between distinct areas.
    Accessway,
    /// A breach in the structure.
    Rupture,
    /// A vertical passage.
    Shaft,
    /// A settlement of abhumans.
    AbhumanColony,
    /// A machine built into the structure.
    IntegratedMachine,
    /// Strange matter escaping containment.
    MatterLeak,
    /// Discharging energy.
    EnergyDischarge,
    /// An inexplicable phenomenon.
    WeirdEvent,
    /// A sealed store of valuables.
    Vault,
    /// A chamber holding a relic.
    RelicChamber,
}

impl Feature {
    /// Every feature, in `main_features` table order.
    pub const ALL: [Feature; 15] = [
        Feature::Corridor,
        Feature::Chamber,
        Feature::Creature,
        Feature::Explorers,
        Feature::InterstitialCavity,
        Feature::Accessway,
        Feature::Rupture,
        Feature::Shaft,
        Feature::AbhumanColony,
        Feature::IntegratedMachine,
        Feature::MatterLeak,
        Feature::EnergyDischarge,
        Feature::WeirdEvent,
        Feature::Vault,
        Feature::RelicChamber,
    ];

    /// The feature's table entry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Corridor => "Corridor",
            Self::Chamber => "Chamber",
            Self::Creature => "Creature",
            Self::Explorers => "Explorers",
            Self::InterstitialCavity => "Interstitial cavity",
            Self::Accessway => "Accessway",
            Self::Rupture => "Rupture",
            Self::Shaft => "Shaft",
            Self::AbhumanColony => "Abhuman Colony",
            Self::IntegratedMachine => "Integrated Machine",
            Self::MatterLeak => "Matter leak",
            Self::EnergyDischarge => "Energy discharge",
            Self::WeirdEvent => "Weird event",
            Self::Vault => "Vault",
            Self::RelicChamber => "Relic Chamber",
        }
    }

    /// Look up a feature by its exact (case-sensitive) entry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The optional sub-table this feature rolls its description on.
    pub fn detail_table(self) -> &'static str {
        match self {
            Self::Corridor => "corridor_details",
            Self::Chamber => "chamber_features",
            Self::Creature => "creature_details",
            Self::Explorers => "explorers_details",
            Self::InterstitialCavity => "interstitial_cavity_details",
            Self::Accessway => "accessway_details",
            Self::Rupture => "rupture_details",
            Self::Shaft => "shaft_details",
            Self::AbhumanColony => "abhuman_colony_details",
            Self::IntegratedMachine => "integrated_machine_details",
            Self::MatterLeak => "matter_leak_details",
            Self::EnergyDischarge => "energy_discharge_details",
            Self::WeirdEvent => "weird_event_details",
            Self::Vault => "vault_details",
            Self::RelicChamber => "relic_chamber_details",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
