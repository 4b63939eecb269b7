//! Environmental impact estimation for logged sustainable actions.
//!
//! Every operation here is pure: estimation reads only the immutable [`RateTable`] held by the
//! [`ImpactEstimator`], never fails, and rounds its outputs exactly once before returning them.
//! Unknown action types estimate to zero rather than erroring so that logging still succeeds.

mod describe;
mod dispatch;
pub mod domain;
mod points;
pub mod rates;

#[cfg(test)]
mod tests;

pub use describe::{format_impact_description, ImpactDescription};
pub use domain::{
    effective_quantity, ActionCategory, ActionClassification, ActionType, ImpactResult, Unit,
};
pub use points::{calculate_points, MINIMUM_POINTS};
pub use rates::{
    ActionRates, Material, MaterialRate, MetricRates, RateTable, RateTableError, UnitRates,
    STANDARD_RATE_TABLE_VERSION,
};

use domain::{round_to, CO2_DECIMALS, TREES_DECIMALS, WATER_DECIMALS};

/// Stateless estimator that applies a rate table to action classifications.
#[derive(Debug, Clone)]
pub struct ImpactEstimator {
    rates: RateTable,
}

impl ImpactEstimator {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn standard() -> Self {
        Self::new(RateTable::standard())
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn estimate_co2(
        &self,
        action_type: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> f64 {
        let raw = self.raw(action_type, quantity, unit);
        round_to(raw.co2_kg, CO2_DECIMALS)
    }

    pub fn estimate_water(
        &self,
        action_type: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> f64 {
        let raw = self.raw(action_type, quantity, unit);
        round_to(raw.water_liters, WATER_DECIMALS)
    }

    pub fn estimate_trees_preserved(
        &self,
        action_type: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> f64 {
        let raw = self.raw(action_type, quantity, unit);
        round_to(raw.trees, TREES_DECIMALS)
    }

    pub fn estimate_all(
        &self,
        action_type: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> ImpactResult {
        let raw = self.raw(action_type, quantity, unit);
        ImpactResult::rounded(raw.co2_kg, raw.water_liters, raw.trees)
    }

    pub fn estimate(&self, classification: &ActionClassification) -> ImpactResult {
        self.estimate_all(
            &classification.action_type,
            classification.quantity,
            classification.unit.as_deref(),
        )
    }

    fn raw(&self, action_type: &str, quantity: Option<f64>, unit: Option<&str>) -> MetricRates {
        let Some(rates) = ActionType::parse(action_type).and_then(|kind| self.rates.get(kind))
        else {
            return MetricRates::default();
        };

        dispatch::raw_metrics(rates, effective_quantity(quantity), &Unit::parse(unit))
    }
}

impl Default for ImpactEstimator {
    fn default() -> Self {
        Self::standard()
    }
}
