use super::domain::ActionType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const STANDARD_RATE_TABLE_VERSION: &str = "v1";

/// Savings attributed to one unit of an action (one occurrence, one km, one kg, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricRates {
    pub co2_kg: f64,
    pub water_liters: f64,
    pub trees: f64,
}

impl MetricRates {
    pub const fn new(co2_kg: f64, water_liters: f64, trees: f64) -> Self {
        Self {
            co2_kg,
            water_liters,
            trees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Paper,
    Plastic,
    Glass,
    Metal,
}

/// One component of a mixed-recycling blend, rates are per kg of that material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialRate {
    pub material: Material,
    pub share: f64,
    pub co2_kg: f64,
    pub water_liters: f64,
}

/// Unit-aware arithmetic for action types that support a measured quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitRates {
    /// Applied when the unit is `km`.
    Distance { per_km: MetricRates },
    /// Applied when the unit is `kg`. Trees come from paper alone.
    MaterialBlend {
        materials: Vec<MaterialRate>,
        paper_trees_per_kg: f64,
    },
    /// Applied when the unit is `minutes`; the quantity is scaled by `baseline_minutes`.
    Duration {
        baseline_minutes: f64,
        per_baseline: MetricRates,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRates {
    pub per_occurrence: MetricRates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_unit: Option<UnitRates>,
}

impl ActionRates {
    const fn flat(co2_kg: f64, water_liters: f64, trees: f64) -> Self {
        Self {
            per_occurrence: MetricRates::new(co2_kg, water_liters, trees),
            per_unit: None,
        }
    }

    fn with_unit(mut self, per_unit: UnitRates) -> Self {
        self.per_unit = Some(per_unit);
        self
    }
}

/// Read-only conversion factors keyed by action type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub version: String,
    pub actions: BTreeMap<ActionType, ActionRates>,
}

impl RateTable {
    pub fn standard() -> Self {
        let actions = ActionType::ordered()
            .into_iter()
            .map(|action_type| (action_type, standard_rates(action_type)))
            .collect();

        Self {
            version: STANDARD_RATE_TABLE_VERSION.to_string(),
            actions,
        }
    }

    pub fn get(&self, action_type: ActionType) -> Option<&ActionRates> {
        self.actions.get(&action_type)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RateTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RateTableError> {
        let table: Self = serde_json::from_reader(reader)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), RateTableError> {
        for (&action_type, rates) in &self.actions {
            check_metrics(action_type, "per_occurrence", &rates.per_occurrence)?;

            match &rates.per_unit {
                None => {}
                Some(UnitRates::Distance { per_km }) => {
                    check_metrics(action_type, "per_km", per_km)?;
                }
                Some(UnitRates::MaterialBlend {
                    materials,
                    paper_trees_per_kg,
                }) => {
                    check_rate(action_type, "paper_trees_per_kg", *paper_trees_per_kg)?;
                    for material in materials {
                        check_rate(action_type, "share", material.share)?;
                        check_rate(action_type, "material.co2_kg", material.co2_kg)?;
                        check_rate(action_type, "material.water_liters", material.water_liters)?;
                    }
                    let total: f64 = materials.iter().map(|material| material.share).sum();
                    if (total - 1.0).abs() > 1e-9 {
                        return Err(RateTableError::BlendShares { action_type, total });
                    }
                }
                Some(UnitRates::Duration {
                    baseline_minutes,
                    per_baseline,
                }) => {
                    if !baseline_minutes.is_finite() || *baseline_minutes <= 0.0 {
                        return Err(RateTableError::Baseline {
                            action_type,
                            minutes: *baseline_minutes,
                        });
                    }
                    check_metrics(action_type, "per_baseline", per_baseline)?;
                }
            }
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_metrics(
    action_type: ActionType,
    scope: &'static str,
    metrics: &MetricRates,
) -> Result<(), RateTableError> {
    check_rate(action_type, scope, metrics.co2_kg)?;
    check_rate(action_type, scope, metrics.water_liters)?;
    check_rate(action_type, scope, metrics.trees)
}

fn check_rate(
    action_type: ActionType,
    field: &'static str,
    value: f64,
) -> Result<(), RateTableError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RateTableError::InvalidRate {
            action_type,
            field,
            value,
        })
    }
}

// Mixed recycling by mass assumes 40% paper, 30% plastic, 20% glass, 10% metal.
fn recycling_blend() -> UnitRates {
    UnitRates::MaterialBlend {
        materials: vec![
            MaterialRate {
                material: Material::Paper,
                share: 0.4,
                co2_kg: 3.3,
                water_liters: 26.0,
            },
            MaterialRate {
                material: Material::Plastic,
                share: 0.3,
                co2_kg: 2.0,
                water_liters: 5.0,
            },
            MaterialRate {
                material: Material::Glass,
                share: 0.2,
                co2_kg: 0.31,
                water_liters: 1.2,
            },
            MaterialRate {
                material: Material::Metal,
                share: 0.1,
                co2_kg: 1.5,
                water_liters: 8.0,
            },
        ],
        paper_trees_per_kg: 0.017,
    }
}

fn standard_rates(action_type: ActionType) -> ActionRates {
    match action_type {
        ActionType::Biking => ActionRates::flat(2.1, 0.0, 0.001).with_unit(UnitRates::Distance {
            per_km: MetricRates::new(0.21, 0.0, 0.0001),
        }),
        ActionType::Walking => ActionRates::flat(1.05, 0.0, 0.0005).with_unit(UnitRates::Distance {
            per_km: MetricRates::new(0.21, 0.0, 0.0001),
        }),
        ActionType::PublicTransport => {
            ActionRates::flat(2.1, 0.0, 0.001).with_unit(UnitRates::Distance {
                per_km: MetricRates::new(0.14, 0.0, 0.00007),
            })
        }
        ActionType::Recycling => ActionRates::flat(2.5, 30.0, 0.02).with_unit(recycling_blend()),
        ActionType::ReusableBag => ActionRates::flat(0.04, 0.5, 0.0),
        ActionType::EnergySaving => ActionRates::flat(0.5, 2.0, 0.005),
        // 5-minute shower reduction baseline.
        ActionType::WaterConservation => {
            ActionRates::flat(1.0, 40.0, 0.0).with_unit(UnitRates::Duration {
                baseline_minutes: 5.0,
                per_baseline: MetricRates::new(2.5, 45.0, 0.0),
            })
        }
        ActionType::Carpooling => ActionRates::flat(2.5, 0.0, 0.001),
        ActionType::PlantBasedMeal => ActionRates::flat(1.5, 800.0, 0.002),
        ActionType::Compost => ActionRates::flat(0.8, 5.0, 0.002),
        ActionType::LedBulb => ActionRates::flat(0.3, 1.0, 0.003),
        ActionType::ShorterShower => ActionRates::flat(2.5, 45.0, 0.0),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateTableError {
    #[error("failed to read rate table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rate table JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{action_type} has invalid {field} rate {value}, rates must be non-negative")]
    InvalidRate {
        action_type: ActionType,
        field: &'static str,
        value: f64,
    },
    #[error("{action_type} blend shares sum to {total}, expected 1.0")]
    BlendShares { action_type: ActionType, total: f64 },
    #[error("{action_type} baseline of {minutes} minutes must be positive")]
    Baseline { action_type: ActionType, minutes: f64 },
}
