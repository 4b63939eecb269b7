use super::domain::Unit;
use super::rates::{ActionRates, MetricRates, UnitRates};

/// Unrounded savings for `quantity` units of an action.
pub(crate) fn raw_metrics(rates: &ActionRates, quantity: f64, unit: &Unit) -> MetricRates {
    match (&rates.per_unit, unit) {
        (Some(UnitRates::Distance { per_km }), Unit::Km) => scale(per_km, quantity),
        (
            Some(UnitRates::MaterialBlend {
                materials,
                paper_trees_per_kg,
            }),
            Unit::Kg,
        ) => {
            let mut blended = MetricRates::default();
            for material in materials {
                blended.co2_kg += material.co2_kg * quantity * material.share;
                blended.water_liters += material.water_liters * quantity * material.share;
            }
            blended.trees = paper_trees_per_kg * quantity;
            blended
        }
        (
            Some(UnitRates::Duration {
                baseline_minutes,
                per_baseline,
            }),
            Unit::Minutes,
        ) => scale(per_baseline, quantity / baseline_minutes),
        _ => scale(&rates.per_occurrence, quantity),
    }
}

fn scale(rates: &MetricRates, factor: f64) -> MetricRates {
    MetricRates {
        co2_kg: rates.co2_kg * factor,
        water_liters: rates.water_liters * factor,
        trees: rates.trees * factor,
    }
}
