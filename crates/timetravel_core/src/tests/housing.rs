//! Tests for housing schedule adjustments
//!
//! These tests verify:
//! - Owning adds the scheduled payment and recognises equity once
//! - Selling/renting removes the carried payment and the flat cost
//! - Missing schedule years produce warnings instead of errors

use crate::config::{EngineBuilder, EngineConfig};
use crate::engine::ProjectionEngine;
use crate::error::EngineWarning;
use crate::model::{
    Balances, Category, HousingLabel, HousingSchedule, HousingVariant, Impact, ScenarioOption,
    ScheduleEntry,
};

fn schedule() -> HousingSchedule {
    HousingSchedule::new(300.0)
        .entry(
            2024,
            ScheduleEntry {
                home_value: 400_000.0,
                rate: 4.5,
                monthly_payment: 2_000.0,
            },
        )
        .entry(
            2025,
            ScheduleEntry {
                home_value: 412_000.0,
                rate: 4.5,
                monthly_payment: 2_100.0,
            },
        )
}

fn housing_config(horizon: u32, schedule: Option<HousingSchedule>) -> EngineConfig {
    let builder = EngineBuilder::new()
        .horizon(horizon)
        .without_random_events()
        .initial_position(Balances::new(100_000.0, 50_000.0, 50_000.0, 3_000.0))
        .housing_variant(HousingVariant::KeepRent)
        .empty_catalog()
        .option(ScenarioOption::new("invest-hold", "Hold", Impact::NONE))
        .option(ScenarioOption::new("keep-house", "Keep the house", Impact::NONE))
        .option(ScenarioOption::new("sell-house", "Sell and rent", Impact::NONE))
        .option(ScenarioOption::new("cut-no-expenses", "No cuts", Impact::NONE))
        .option(ScenarioOption::new("no-savings-account", "No savings", Impact::NONE));

    match schedule {
        Some(schedule) => builder.housing_schedule(schedule).build().unwrap(),
        None => builder.build().unwrap(),
    }
}

fn play_year(engine: &mut ProjectionEngine, housing: &str) {
    engine
        .apply_decision(Category::Investment, "invest-hold")
        .unwrap();
    engine.apply_decision(Category::Housing, housing).unwrap();
    engine
        .apply_decision(Category::Expense, "cut-no-expenses")
        .unwrap();
    engine
        .apply_decision(Category::Savings, "no-savings-account")
        .unwrap();
}

#[test]
fn test_keeping_the_house_follows_the_schedule() {
    let mut engine = ProjectionEngine::new(housing_config(2, Some(schedule())), 0).unwrap();

    play_year(&mut engine, "keep-house");
    assert_eq!(engine.position().expenses, 5_000.0);
    assert_eq!(engine.position().net_worth, 500_000.0);

    play_year(&mut engine, "keep-house");
    assert_eq!(engine.position().expenses, 5_100.0);
    assert_eq!(engine.position().net_worth, 500_000.0);
    assert!(engine.warnings().is_empty());

    let housing: Vec<_> = engine
        .history()
        .iter()
        .filter_map(|d| d.housing_choice)
        .collect();
    assert_eq!(housing, vec![HousingLabel::Keep, HousingLabel::Keep]);
}

#[test]
fn test_selling_drops_payment_and_flat_cost() {
    let mut engine = ProjectionEngine::new(housing_config(2, Some(schedule())), 0).unwrap();

    play_year(&mut engine, "keep-house");
    play_year(&mut engine, "sell-house");

    assert_eq!(engine.position().expenses, 5_000.0 - 2_000.0 - 300.0);
    assert_eq!(
        engine.history()[5].housing_choice,
        Some(HousingLabel::Rent)
    );
}

#[test]
fn test_missing_schedule_year_warns_and_continues() {
    let mut engine = ProjectionEngine::new(housing_config(3, Some(schedule())), 0).unwrap();

    play_year(&mut engine, "keep-house");
    play_year(&mut engine, "keep-house");
    play_year(&mut engine, "keep-house");

    assert!(engine.is_complete());
    assert_eq!(engine.position().expenses, 5_100.0);
    assert_eq!(
        engine.warnings(),
        &[EngineWarning::MissingScheduleEntry { year: 2026 }]
    );
    assert_eq!(engine.report().unwrap().warnings.len(), 1);
}

#[test]
fn test_equity_waits_for_a_scheduled_year() {
    let late_schedule = HousingSchedule::new(0.0).entry(
        2025,
        ScheduleEntry {
            home_value: 250_000.0,
            rate: 5.0,
            monthly_payment: 1_500.0,
        },
    );
    let mut engine = ProjectionEngine::new(housing_config(2, Some(late_schedule)), 0).unwrap();

    play_year(&mut engine, "keep-house");
    assert_eq!(engine.position().net_worth, 100_000.0);
    assert_eq!(engine.warnings().len(), 1);

    play_year(&mut engine, "keep-house");
    assert_eq!(engine.position().net_worth, 350_000.0);
    assert_eq!(engine.position().expenses, 4_500.0);
}

#[test]
fn test_without_schedule_housing_only_applies_impact() {
    let mut engine = ProjectionEngine::new(housing_config(1, None), 0).unwrap();

    play_year(&mut engine, "keep-house");

    assert_eq!(engine.position().expenses, 3_000.0);
    assert_eq!(engine.position().net_worth, 100_000.0);
    assert!(engine.warnings().is_empty());
}

#[test]
fn test_buy_variant_labels_owning_as_buy() {
    let config = EngineBuilder::from_config(housing_config(1, None))
        .housing_variant(HousingVariant::BuyRent)
        .build()
        .unwrap();
    let mut engine = ProjectionEngine::new(config, 0).unwrap();

    play_year(&mut engine, "keep-house");

    assert_eq!(engine.history()[1].housing_choice, Some(HousingLabel::Buy));
    assert_eq!(engine.history()[0].housing_choice, None);
}
