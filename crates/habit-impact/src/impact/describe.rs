use super::domain::{round_to, ImpactResult};
use serde::{Deserialize, Serialize};

/// Display strings for an [`ImpactResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDescription {
    pub co2_description: String,
    pub water_description: String,
    pub trees_description: String,
    pub summary: String,
}

/// Below one tree the preserved amount is shown as grams of tree-equivalent.
pub fn format_impact_description(result: &ImpactResult) -> ImpactDescription {
    let co2_description = format!("{} kg CO2 saved", result.co2_saved_kg);
    let water_description = format!("{} L water saved", result.water_saved_liters);
    let trees_description = if result.trees_preserved < 1.0 {
        let grams = round_to(result.trees_preserved * 1000.0, 1);
        format!("{grams}g tree-equivalent preserved")
    } else {
        format!("{} trees preserved", result.trees_preserved.round())
    };

    let summary = format!(
        "You saved {} kg of CO2 and {} L of water, {}",
        result.co2_saved_kg, result.water_saved_liters, trees_description
    );

    ImpactDescription {
        co2_description,
        water_description,
        trees_description,
        summary,
    }
}
