use super::domain::ActionType;

pub const MINIMUM_POINTS: u32 = 1;

/// Gamification points for an estimated impact.
///
/// The base score is `round(co2 * 10 + water / 10)`, weighted by the action type's multiplier
/// (1.0 for unknown types) and never lower than [`MINIMUM_POINTS`].
pub fn calculate_points(action_type: &str, co2_saved: f64, water_saved: f64) -> u32 {
    let base = (non_negative(co2_saved) * 10.0 + non_negative(water_saved) / 10.0).round();
    let multiplier = ActionType::parse(action_type)
        .map(ActionType::points_multiplier)
        .unwrap_or(1.0);

    let weighted = (base * multiplier).round();
    if weighted < MINIMUM_POINTS as f64 {
        MINIMUM_POINTS
    } else if weighted >= u32::MAX as f64 {
        u32::MAX
    } else {
        weighted as u32
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
