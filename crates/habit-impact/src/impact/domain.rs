use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical vocabulary of loggable sustainable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Biking,
    Walking,
    PublicTransport,
    Recycling,
    ReusableBag,
    EnergySaving,
    WaterConservation,
    Carpooling,
    PlantBasedMeal,
    Compost,
    LedBulb,
    ShorterShower,
}

impl ActionType {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Biking,
            Self::Walking,
            Self::PublicTransport,
            Self::Recycling,
            Self::ReusableBag,
            Self::EnergySaving,
            Self::WaterConservation,
            Self::Carpooling,
            Self::PlantBasedMeal,
            Self::Compost,
            Self::LedBulb,
            Self::ShorterShower,
        ]
    }

    /// Case-sensitive lookup; anything outside the vocabulary is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let action_type = match raw {
            "biking" => Self::Biking,
            "walking" => Self::Walking,
            "public_transport" => Self::PublicTransport,
            "recycling" => Self::Recycling,
            "reusable_bag" => Self::ReusableBag,
            "energy_saving" => Self::EnergySaving,
            "water_conservation" => Self::WaterConservation,
            "carpooling" => Self::Carpooling,
            "plant_based_meal" => Self::PlantBasedMeal,
            "compost" => Self::Compost,
            "led_bulb" => Self::LedBulb,
            "shorter_shower" => Self::ShorterShower,
            _ => return None,
        };
        Some(action_type)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biking => "biking",
            Self::Walking => "walking",
            Self::PublicTransport => "public_transport",
            Self::Recycling => "recycling",
            Self::ReusableBag => "reusable_bag",
            Self::EnergySaving => "energy_saving",
            Self::WaterConservation => "water_conservation",
            Self::Carpooling => "carpooling",
            Self::PlantBasedMeal => "plant_based_meal",
            Self::Compost => "compost",
            Self::LedBulb => "led_bulb",
            Self::ShorterShower => "shorter_shower",
        }
    }

    pub const fn category(self) -> ActionCategory {
        match self {
            Self::Biking | Self::Walking | Self::PublicTransport | Self::Carpooling => {
                ActionCategory::Transport
            }
            Self::Recycling | Self::ReusableBag | Self::Compost => ActionCategory::Waste,
            Self::EnergySaving | Self::LedBulb => ActionCategory::Energy,
            Self::WaterConservation | Self::ShorterShower => ActionCategory::Water,
            Self::PlantBasedMeal => ActionCategory::Food,
        }
    }

    /// Gamification weight applied by [`super::calculate_points`].
    pub const fn points_multiplier(self) -> f64 {
        match self {
            Self::Biking | Self::Walking => 1.2,
            Self::PublicTransport | Self::Carpooling => 1.1,
            Self::Recycling => 1.1,
            Self::ReusableBag => 1.0,
            Self::EnergySaving | Self::LedBulb => 1.3,
            Self::WaterConservation | Self::ShorterShower => 1.2,
            Self::PlantBasedMeal => 1.4,
            Self::Compost => 1.2,
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Transport,
    Waste,
    Energy,
    Water,
    Food,
}

impl ActionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Waste => "Waste",
            Self::Energy => "Energy",
            Self::Water => "Water",
            Self::Food => "Food",
        }
    }
}

/// What a logged quantity measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Km,
    Kg,
    Minutes,
    Times,
    Other(String),
}

impl Unit {
    pub const DEFAULT: &'static str = "times";

    /// Exact match against the canonical unit tags; `None` means the default `times`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or(Self::DEFAULT) {
            "km" => Self::Km,
            "kg" => Self::Kg,
            "minutes" => Self::Minutes,
            "times" => Self::Times,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Km => "km",
            Self::Kg => "kg",
            Self::Minutes => "minutes",
            Self::Times => "times",
            Self::Other(raw) => raw,
        }
    }
}

/// Caller-supplied description of one logged action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionClassification {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl ActionClassification {
    pub fn new(action_type: impl Into<String>, quantity: Option<f64>, unit: Option<&str>) -> Self {
        Self {
            action_type: action_type.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }
}

/// Estimated savings for one action, already rounded for storage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    pub co2_saved_kg: f64,
    pub water_saved_liters: f64,
    pub trees_preserved: f64,
}

pub const CO2_DECIMALS: i32 = 3;
pub const WATER_DECIMALS: i32 = 2;
pub const TREES_DECIMALS: i32 = 4;

impl ImpactResult {
    pub const ZERO: Self = Self {
        co2_saved_kg: 0.0,
        water_saved_liters: 0.0,
        trees_preserved: 0.0,
    };

    /// Rounds raw metrics to the storage precisions. Negative inputs clamp to zero.
    pub fn rounded(co2_saved_kg: f64, water_saved_liters: f64, trees_preserved: f64) -> Self {
        Self {
            co2_saved_kg: round_to(co2_saved_kg, CO2_DECIMALS),
            water_saved_liters: round_to(water_saved_liters, WATER_DECIMALS),
            trees_preserved: round_to(trees_preserved, TREES_DECIMALS),
        }
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    // Values this large carry no fractional digits to round away.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Absent, non-positive or non-finite quantities count as one occurrence.
pub fn effective_quantity(quantity: Option<f64>) -> f64 {
    match quantity {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 1.0,
    }
}
