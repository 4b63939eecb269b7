use crate::impact::{calculate_points, ActionType, MINIMUM_POINTS};

#[test]
fn points_weight_base_score_by_type_multiplier() {
    // round(2.1 * 10 + 0 / 10) = 21, biking multiplier 1.2
    assert_eq!(calculate_points("biking", 2.1, 0.0), 25);
    // round(5.0 * 10 + 90 / 10) = 59, water conservation multiplier 1.2
    assert_eq!(calculate_points("water_conservation", 5.0, 90.0), 71);
}

#[test]
fn unknown_types_use_neutral_multiplier() {
    assert_eq!(calculate_points("skydiving", 1.0, 50.0), 15);
}

#[test]
fn points_never_drop_below_minimum() {
    assert_eq!(calculate_points("reusable_bag", 0.0, 0.0), MINIMUM_POINTS);
    assert_eq!(calculate_points("skydiving", 0.0, 0.0), MINIMUM_POINTS);
    assert_eq!(calculate_points("biking", -3.0, f64::NAN), MINIMUM_POINTS);
}

#[test]
fn multipliers_stay_within_documented_range() {
    for action_type in ActionType::ordered() {
        let multiplier = action_type.points_multiplier();
        assert!((1.0..=1.4).contains(&multiplier), "{action_type}: {multiplier}");
    }
}
