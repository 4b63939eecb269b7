use crate::infra::{parse_goal_metric, InMemoryActionRepository};
use chrono::NaiveDate;
use clap::Args;
use habit_impact::error::AppError;
use habit_impact::impact::{
    calculate_points, effective_quantity, format_impact_description, ActionType,
    ImpactDescription, ImpactEstimator, ImpactResult,
};
use habit_impact::tracking::{
    ActionCsvImporter, ActionLogError, ActionLogService, ActionSubmission, Goal, GoalMetric,
    GoalProgress, UserImpactStats,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Action type, e.g. biking, recycling, water_conservation
    #[arg(long)]
    pub(crate) action_type: String,
    /// Measured quantity (defaults to 1)
    #[arg(long)]
    pub(crate) quantity: Option<f64>,
    /// Unit of the quantity: km, kg, minutes or times (default)
    #[arg(long)]
    pub(crate) unit: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV with user_id,action_type,description,quantity,unit,logged_on columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Report progress toward a goal on this metric (co2, water, trees, actions, points)
    #[arg(long, value_parser = parse_goal_metric, requires = "goal_target")]
    pub(crate) goal_metric: Option<GoalMetric>,
    /// Goal target for --goal-metric
    #[arg(long, requires = "goal_metric")]
    pub(crate) goal_target: Option<f64>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RatesArgs {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    action_type: String,
    category: Option<&'static str>,
    quantity: f64,
    unit: String,
    impact: ImpactResult,
    points: u32,
    description: ImpactDescription,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    logged: usize,
    rejected: usize,
    users: Vec<UserReport>,
}

#[derive(Debug, Serialize)]
struct UserReport {
    stats: UserImpactStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    goal: Option<GoalProgress>,
}

pub(crate) fn run_estimate(
    estimator: &ImpactEstimator,
    args: EstimateArgs,
) -> Result<(), AppError> {
    let report = estimate_report(estimator, args.action_type, args.quantity, args.unit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_estimate(&report));
    }
    Ok(())
}

pub(crate) fn run_import(estimator: ImpactEstimator, args: ImportArgs) -> Result<(), AppError> {
    let submissions = ActionCsvImporter::from_path(&args.csv)?;
    info!(rows = submissions.len(), path = %args.csv.display(), "action export loaded");

    let goal = args.goal_metric.zip(args.goal_target);
    let report = import_report(estimator, submissions, goal)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_import(&report));
    }
    Ok(())
}

pub(crate) fn run_rates(estimator: &ImpactEstimator, args: RatesArgs) -> Result<(), AppError> {
    let json = if args.pretty {
        serde_json::to_string_pretty(estimator.rates())?
    } else {
        serde_json::to_string(estimator.rates())?
    };
    println!("{json}");
    Ok(())
}

fn estimate_report(
    estimator: &ImpactEstimator,
    action_type: String,
    quantity: Option<f64>,
    unit: Option<String>,
) -> EstimateReport {
    let impact = estimator.estimate_all(&action_type, quantity, unit.as_deref());
    let points = calculate_points(&action_type, impact.co2_saved_kg, impact.water_saved_liters);

    EstimateReport {
        category: ActionType::parse(&action_type).map(|kind| kind.category().label()),
        quantity: effective_quantity(quantity),
        unit: unit.unwrap_or_else(|| "times".to_string()),
        description: format_impact_description(&impact),
        action_type,
        impact,
        points,
    }
}

fn import_report(
    estimator: ImpactEstimator,
    submissions: Vec<ActionSubmission>,
    goal: Option<(GoalMetric, f64)>,
) -> Result<ImportReport, AppError> {
    let service = ActionLogService::new(
        Arc::new(InMemoryActionRepository::default()),
        Arc::new(estimator),
    );

    let mut users = BTreeSet::new();
    let mut logged = 0;
    let mut rejected = 0;
    let mut earliest: Option<NaiveDate> = None;

    for (row, submission) in submissions.into_iter().enumerate() {
        let user_id = submission.user_id.clone();
        let logged_on = submission.logged_on;
        match service.log(submission) {
            Ok(_) => {
                logged += 1;
                users.insert(user_id);
                earliest = Some(
                    earliest.map_or(logged_on, |current| current.min(logged_on)),
                );
            }
            Err(ActionLogError::Validation(err)) => {
                rejected += 1;
                warn!(row = row + 1, %err, "skipping invalid action");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut reports = Vec::with_capacity(users.len());
    for user_id in users {
        let stats = service.user_stats(&user_id)?;
        let goal_progress = match (goal, earliest) {
            (Some((metric, target)), Some(starts_on)) => Some(service.goal_progress(&Goal {
                id: format!("{}-{}", user_id, metric_key(metric)),
                user_id: user_id.clone(),
                metric,
                target,
                action_type: None,
                starts_on,
                ends_on: None,
            })?),
            _ => None,
        };
        reports.push(UserReport {
            stats,
            goal: goal_progress,
        });
    }

    Ok(ImportReport {
        logged,
        rejected,
        users: reports,
    })
}

fn metric_key(metric: GoalMetric) -> &'static str {
    match metric {
        GoalMetric::Co2SavedKg => "co2",
        GoalMetric::WaterSavedLiters => "water",
        GoalMetric::TreesPreserved => "trees",
        GoalMetric::ActionCount => "actions",
        GoalMetric::Points => "points",
    }
}

fn render_estimate(report: &EstimateReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} {})",
        report.action_type, report.quantity, report.unit
    );
    match report.category {
        Some(category) => {
            let _ = writeln!(out, "- category: {category}");
        }
        None => {
            let _ = writeln!(out, "- category: unrecognized (no claimed impact)");
        }
    }
    let _ = writeln!(out, "- {}", report.description.co2_description);
    let _ = writeln!(out, "- {}", report.description.water_description);
    let _ = writeln!(out, "- {}", report.description.trees_description);
    let _ = writeln!(out, "- {} points", report.points);
    out
}

fn render_import(report: &ImportReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Logged {} action(s), rejected {}",
        report.logged, report.rejected
    );
    for user in &report.users {
        render_user(&mut out, user);
    }
    out
}

fn render_user(out: &mut String, user: &UserReport) {
    let stats = &user.stats;
    let _ = writeln!(
        out,
        "{}: {} action(s), {} points",
        stats.user_id, stats.total_actions, stats.total_points
    );
    let _ = writeln!(
        out,
        "  - {} kg CO2 | {} L water | {} trees",
        stats.totals.co2_saved_kg, stats.totals.water_saved_liters, stats.totals.trees_preserved
    );
    for (category, count) in &stats.actions_by_category {
        let _ = writeln!(out, "  - {}: {}", category.label(), count);
    }
    if let Some(goal) = &user.goal {
        let status = if goal.completed { "completed" } else { "in progress" };
        let _ = writeln!(
            out,
            "  - goal: {} / {} {} ({}%, {})",
            goal.current,
            goal.target,
            goal.metric.label(),
            goal.percent,
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_impact::tracking::UserId;

    fn submission(
        user: &str,
        action_type: &str,
        quantity: Option<f64>,
        unit: &str,
    ) -> ActionSubmission {
        ActionSubmission {
            user_id: UserId(user.to_string()),
            action_type: action_type.to_string(),
            description: "logged from test".to_string(),
            quantity,
            unit: Some(unit.to_string()),
            logged_on: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        }
    }

    #[test]
    fn estimate_report_renders_description_lines() {
        let report = estimate_report(
            &ImpactEstimator::standard(),
            "biking".to_string(),
            Some(10.0),
            Some("km".to_string()),
        );

        assert_eq!(report.points, 25);
        assert_eq!(report.category, Some("Transport"));
        let text = render_estimate(&report);
        assert!(text.starts_with("biking (10 km)"));
        assert!(text.contains("- 2.1 kg CO2 saved"));
        assert!(text.contains("- 1g tree-equivalent preserved"));
    }

    #[test]
    fn estimate_report_echoes_the_quantity_it_estimated() {
        let report = estimate_report(
            &ImpactEstimator::standard(),
            "biking".to_string(),
            Some(0.0),
            Some("km".to_string()),
        );

        assert_eq!(report.quantity, 1.0);
        assert_eq!(report.impact.co2_saved_kg, 0.21);
        let text = render_estimate(&report);
        assert!(text.starts_with("biking (1 km)"));
        assert!(text.contains("- 0.21 kg CO2 saved"));

        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["quantity"], 1.0);
    }

    #[test]
    fn estimate_report_flags_unknown_types() {
        let report = estimate_report(
            &ImpactEstimator::standard(),
            "skydiving".to_string(),
            None,
            None,
        );

        assert_eq!(report.impact, ImpactResult::ZERO);
        assert_eq!(report.unit, "times");
        assert!(render_estimate(&report).contains("unrecognized"));
    }

    #[test]
    fn import_report_skips_invalid_rows_and_tracks_goals() {
        let mut missing_description = submission("ana", "walking", Some(2.0), "km");
        missing_description.description = String::new();
        let submissions = vec![
            submission("ana", "biking", Some(10.0), "km"),
            submission("ben", "water_conservation", Some(10.0), "minutes"),
            missing_description,
            submission("ana", "biking", Some(-1.0), "km"),
        ];

        let report = import_report(
            ImpactEstimator::standard(),
            submissions,
            Some((GoalMetric::Co2SavedKg, 4.2)),
        )
        .expect("report builds");

        assert_eq!(report.logged, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(report.users.len(), 2);

        let ana = &report.users[0];
        assert_eq!(ana.stats.user_id, UserId("ana".to_string()));
        let goal = ana.goal.as_ref().expect("goal progress");
        assert_eq!(goal.current, 2.1);
        assert_eq!(goal.percent, 50.0);

        let text = render_import(&report);
        assert!(text.contains("Logged 2 action(s), rejected 2"));
        assert!(text.contains("ben: 1 action(s), 71 points"));
    }
}
