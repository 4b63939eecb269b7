use super::common::result;
use crate::impact::format_impact_description;

#[test]
fn trees_below_one_render_as_grams() {
    let description = format_impact_description(&result(2.1, 0.0, 0.05));
    assert_eq!(description.trees_description, "50g tree-equivalent preserved");
    assert_eq!(description.co2_description, "2.1 kg CO2 saved");
    assert_eq!(description.water_description, "0 L water saved");
}

#[test]
fn trees_at_or_above_one_render_as_count() {
    let description = format_impact_description(&result(10.0, 120.5, 1.2));
    assert_eq!(description.trees_description, "1 trees preserved");

    let description = format_impact_description(&result(0.0, 0.0, 1.0));
    assert_eq!(description.trees_description, "1 trees preserved");
}

#[test]
fn summary_combines_all_metrics() {
    let description = format_impact_description(&result(1.982, 12.5, 0.0068));
    assert_eq!(
        description.summary,
        "You saved 1.982 kg of CO2 and 12.5 L of water, 6.8g tree-equivalent preserved"
    );
}

#[test]
fn formatting_is_idempotent() {
    let impact = result(0.173, 0.0, 0.0001);
    assert_eq!(
        format_impact_description(&impact),
        format_impact_description(&impact)
    );
}
