use serde::{Deserialize, Serialize};

/// Reported crime level along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrimeLevel {
    Low,
    Moderate,
    High,
}

/// Street lighting quality along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lighting {
    WellLit,
    Moderate,
    Poor,
}

/// Pedestrian activity along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Busy,
    Moderate,
    Quiet,
}

/// Construction obstruction along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Construction {
    None,
    Moderate,
    Heavy,
}

impl CrimeLevel {
    pub(crate) fn weight(self) -> u32 {
        match self {
            Self::Low => 4,
            Self::Moderate => 2,
            Self::High => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low crime",
            Self::Moderate => "Moderate crime",
            Self::High => "High crime",
        }
    }
}

impl Lighting {
    pub(crate) fn weight(self) -> u32 {
        match self {
            Self::WellLit => 4,
            Self::Moderate => 3,
            Self::Poor => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WellLit => "Well-lit",
            Self::Moderate => "Moderately lit",
            Self::Poor => "Poorly lit",
        }
    }
}

impl ActivityLevel {
    pub(crate) fn weight(self) -> u32 {
        match self {
            Self::Busy => 4,
            Self::Moderate => 3,
            Self::Quiet => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Busy => "Busy area",
            Self::Moderate => "Moderate foot traffic",
            Self::Quiet => "Quiet area",
        }
    }
}

impl Construction {
    pub(crate) fn weight(self) -> u32 {
        match self {
            Self::None => 4,
            Self::Moderate => 3,
            Self::Heavy => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No construction",
            Self::Moderate => "Some construction",
            Self::Heavy => "Heavy construction",
        }
    }
}

/// The four categorical risk factors describing one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFactors {
    pub crime: CrimeLevel,
    pub lighting: Lighting,
    pub activity: ActivityLevel,
    pub construction: Construction,
}

impl SafetyFactors {
    /// Sum of the factor weights, in [5, 16].
    pub(crate) fn weight_sum(self) -> u32 {
        self.crime.weight()
            + self.lighting.weight()
            + self.activity.weight()
            + self.construction.weight()
    }

    /// Descriptive tags for display alongside the numeric score.
    pub fn tags(self) -> Vec<&'static str> {
        vec![
            self.crime.label(),
            self.lighting.label(),
            self.activity.label(),
            self.construction.label(),
        ]
    }
}
