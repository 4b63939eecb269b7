use crate::impact::{ActionType, ImpactEstimator, ImpactResult};

pub(super) fn estimator() -> ImpactEstimator {
    ImpactEstimator::standard()
}

pub(super) fn core_types() -> [ActionType; 7] {
    [
        ActionType::Biking,
        ActionType::Walking,
        ActionType::PublicTransport,
        ActionType::Recycling,
        ActionType::ReusableBag,
        ActionType::EnergySaving,
        ActionType::WaterConservation,
    ]
}

pub(super) fn result(co2: f64, water: f64, trees: f64) -> ImpactResult {
    ImpactResult {
        co2_saved_kg: co2,
        water_saved_liters: water,
        trees_preserved: trees,
    }
}
