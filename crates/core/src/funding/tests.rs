use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::budget_line::{BudgetLine, BudgetLineStatus};

fn figures() -> FundingFigures {
    FundingFigures {
        total_funding: dec!(10000),
        received_funding: dec!(6000),
        carry_forward_funding: dec!(2500),
    }
}

#[test]
fn test_is_over_budget_is_strict() {
    assert!(!is_over_budget(dec!(100), dec!(100)));
    assert!(is_over_budget(dec!(100.01), dec!(100)));
    assert!(!is_over_budget(dec!(99.99), dec!(100)));
}

#[test]
fn test_calculate_percent_rounds_half_up() {
    assert_eq!(calculate_percent(dec!(1), dec!(8)), dec!(13));
    assert_eq!(calculate_percent(dec!(2), dec!(3)), dec!(67));
    assert_eq!(calculate_percent(dec!(3500), dec!(10000)), dec!(35));
    assert_eq!(calculate_percent(dec!(12000), dec!(10000)), dec!(120));
}

#[test]
fn test_calculate_percent_zero_whole() {
    assert_eq!(calculate_percent(dec!(500), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percent_label(dec!(500), Decimal::ZERO), "0%");
}

#[test]
fn test_budget_status_series_shape() {
    let series = build_budget_status_series(
        dec!(10000),
        dec!(1000.49),
        dec!(2000.5),
        dec!(3000),
        dec!(500),
    );

    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Draft", "Planned", "Executing", "Obligated"]);

    assert_eq!(series[0].value, dec!(1000));
    assert_eq!(series[1].value, dec!(2001));
    assert_eq!(series[0].percent, "10%");
    assert_eq!(series[1].percent, "20%");
    assert_eq!(series[2].percent, "30%");
    assert_eq!(series[3].percent, "5%");
}

#[test]
fn test_budget_status_series_without_funding() {
    let series = build_budget_status_series(
        Decimal::ZERO,
        dec!(1),
        dec!(2),
        dec!(3),
        dec!(4),
    );
    assert!(series.iter().all(|s| s.percent == "0%"));
}

#[test]
fn test_funding_summary_from_lines() {
    let lines = vec![
        BudgetLine::new(1, dec!(1000), BudgetLineStatus::Planned).with_fee(dec!(0.05)),
        BudgetLine::new(2, dec!(2000), BudgetLineStatus::Executing),
        BudgetLine::new(3, dec!(500), BudgetLineStatus::Obligated),
        BudgetLine::new(4, dec!(4000), BudgetLineStatus::Draft),
        BudgetLine::new(5, dec!(999), BudgetLineStatus::InReview),
    ];

    let summary = build_funding_summary(&figures(), &lines);

    assert_eq!(summary.planned_funding, dec!(1050));
    assert_eq!(summary.in_execution_funding, dec!(2000));
    assert_eq!(summary.obligated_funding, dec!(500));
    assert_eq!(summary.in_draft_funding, dec!(4000));
    assert_eq!(summary.spending(), dec!(3550));
    assert_eq!(summary.available_funding, dec!(6450));
    assert_eq!(summary.new_funding, dec!(7500));
    assert!(!is_over_budget(summary.spending(), summary.total_funding));
}

#[test]
fn test_funding_summary_over_budget() {
    let lines = vec![BudgetLine::new(1, dec!(12000), BudgetLineStatus::Obligated)];

    let summary = build_funding_summary(&figures(), &lines);

    assert_eq!(summary.available_funding, dec!(-2000));
    assert!(is_over_budget(summary.spending(), summary.total_funding));
}

#[test]
fn test_summary_status_series_matches_summary() {
    let lines = vec![
        BudgetLine::new(1, dec!(2500), BudgetLineStatus::Planned),
        BudgetLine::new(2, dec!(500), BudgetLineStatus::Draft),
    ];
    let summary = build_funding_summary(&figures(), &lines);

    let series = summary_status_series(&summary);

    assert_eq!(series[0].value, dec!(500));
    assert_eq!(series[0].percent, "5%");
    assert_eq!(series[1].value, dec!(2500));
    assert_eq!(series[1].percent, "25%");
}

#[test]
fn test_funding_received_series() {
    let summary = build_funding_summary(&figures(), &[]);
    let series = funding_received_series(&summary);

    assert_eq!(series[0].label, "Funding Received");
    assert_eq!(series[0].value, dec!(6000));
    assert_eq!(series[0].percent, "60%");
    assert_eq!(series[1].label, "Funding Expected");
    assert_eq!(series[1].value, dec!(4000));
    assert_eq!(series[1].percent, "40%");
}

#[test]
fn test_carry_forward_series() {
    let summary = build_funding_summary(&figures(), &[]);
    let series = carry_forward_series(&summary);

    assert_eq!(series[0].value, dec!(2500));
    assert_eq!(series[0].percent, "25%");
    assert_eq!(series[1].value, dec!(7500));
    assert_eq!(series[1].percent, "75%");
}

#[test]
fn test_funding_figures_tolerate_malformed_values() {
    let figures: FundingFigures =
        serde_json::from_str(r#"{"total_funding": "5000", "received_funding": null}"#).unwrap();

    assert_eq!(figures.total_funding, dec!(5000));
    assert_eq!(figures.received_funding, Decimal::ZERO);
    assert_eq!(figures.carry_forward_funding, Decimal::ZERO);
}
