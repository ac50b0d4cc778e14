//! Transport mode attached to plan legs.

use std::str::FromStr;

/// The means by which a traveler makes a trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TransportMode {
    /// Private vehicle.
    #[default]
    Car,
    /// On foot.
    Walk,
    /// Bicycle.
    Bike,
    /// Scheduled public transport.
    Pt,
}

impl TransportMode {
    /// Label used in output files (`car`, `walk`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car  => "car",
            TransportMode::Walk => "walk",
            TransportMode::Bike => "bike",
            TransportMode::Pt   => "pt",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "car"  => Ok(TransportMode::Car),
            "walk" => Ok(TransportMode::Walk),
            "bike" => Ok(TransportMode::Bike),
            "pt"   => Ok(TransportMode::Pt),
            other  => Err(format!("unknown transport mode {other:?}")),
        }
    }
}
