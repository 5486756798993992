//! Tests for configuration validation and the builder
//!
//! Invalid configurations fail at construction, never partway through a run.

use crate::config::{EngineBuilder, EngineConfig, ImpactMode, InitialPosition, ScenarioCatalog};
use crate::engine::ProjectionEngine;
use crate::error::{ConfigError, EngineError};
use crate::model::{Balances, Category, Impact, ScenarioOption};

#[test]
fn test_builder_defaults() {
    let config = EngineBuilder::new().build().unwrap();

    assert_eq!(config.start_year, 2024);
    assert_eq!(config.horizon_years, 10);
    assert_eq!(config.categories, Category::ALL.to_vec());
    assert_eq!(config.impact_mode, ImpactMode::Percentage);
    assert_eq!(config.random_event_sample, 2);
    assert_eq!(config.catalog, ScenarioCatalog::classic());
}

#[test]
fn test_zero_horizon_is_rejected() {
    let err = EngineBuilder::new().horizon(0).build().unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveHorizon);

    let config = EngineConfig {
        horizon_years: 0,
        ..Default::default()
    };
    assert_eq!(
        ProjectionEngine::new(config, 0).unwrap_err(),
        EngineError::InvalidConfiguration(ConfigError::NonPositiveHorizon)
    );
}

#[test]
fn test_horizon_past_last_year_is_rejected() {
    let err = EngineBuilder::new()
        .start_year(i32::MAX)
        .horizon(1)
        .without_random_events()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::YearOutOfRange {
            start_year: i32::MAX,
            horizon_years: 1,
        }
    );

    let config = EngineConfig {
        start_year: 0,
        horizon_years: u32::MAX,
        ..Default::default()
    };
    assert_eq!(
        ProjectionEngine::new(config, 0).unwrap_err(),
        EngineError::InvalidConfiguration(ConfigError::YearOutOfRange {
            start_year: 0,
            horizon_years: u32::MAX,
        })
    );
}

#[test]
fn test_horizon_ending_on_last_year_completes() {
    let config = EngineBuilder::new()
        .start_year(i32::MAX - 1)
        .horizon(1)
        .without_random_events()
        .build()
        .unwrap();
    assert_eq!(config.end_year(), Ok(i32::MAX));

    let mut engine = ProjectionEngine::new(config, 0).unwrap();
    let position = super::play_first_options(&mut engine);

    assert!(engine.is_complete());
    assert_eq!(position.year, i32::MAX);
    assert_eq!(engine.report().unwrap().trajectory[0].year, i32::MAX - 1);
}

#[test]
fn test_empty_catalog_for_required_category() {
    let err = EngineBuilder::new()
        .without_random_events()
        .empty_catalog()
        .option(ScenarioOption::new("invest-stocks", "Stocks", Impact::NONE))
        .build()
        .unwrap_err();

    assert_eq!(err, ConfigError::EmptyCatalog(Category::Housing));
}

#[test]
fn test_category_list_rules() {
    assert_eq!(
        EngineBuilder::new()
            .categories(Vec::new())
            .build()
            .unwrap_err(),
        ConfigError::NoCategories
    );
    assert_eq!(
        EngineBuilder::new()
            .categories([Category::Investment, Category::Investment])
            .build()
            .unwrap_err(),
        ConfigError::DuplicateCategory(Category::Investment)
    );
    assert_eq!(
        EngineBuilder::new()
            .categories([Category::Housing, Category::Investment])
            .build()
            .unwrap_err(),
        ConfigError::CategoryOrder {
            before: Category::Housing,
            after: Category::Investment,
        }
    );

    let subset = EngineBuilder::new()
        .categories([Category::Investment, Category::Savings])
        .build()
        .unwrap();
    assert_eq!(subset.categories_per_year(), 2);
}

#[test]
fn test_misfiled_option_is_rejected() {
    let mut catalog = ScenarioCatalog::classic();
    catalog.insert(
        Category::Savings,
        ScenarioOption::new("invest-bonds", "Bonds", Impact::NONE),
    );

    let err = EngineBuilder::new().catalog(catalog).build().unwrap_err();

    assert_eq!(
        err,
        ConfigError::MisclassifiedOption {
            option_id: "invest-bonds".to_string(),
            listed_under: Category::Savings,
            classified_as: Category::Investment,
        }
    );
}

#[test]
fn test_duplicate_option_ids_are_rejected() {
    let err = EngineBuilder::new()
        .option(ScenarioOption::new("invest-stocks", "Again", Impact::NONE))
        .build()
        .unwrap_err();

    assert_eq!(err, ConfigError::DuplicateOptionId("invest-stocks".to_string()));
}

#[test]
fn test_zero_random_sample_only_matters_with_random_events() {
    assert_eq!(
        EngineBuilder::new()
            .random_event_sample(0)
            .build()
            .unwrap_err(),
        ConfigError::ZeroRandomSample
    );
    assert!(
        EngineBuilder::new()
            .random_event_sample(0)
            .without_random_events()
            .build()
            .is_ok()
    );
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let err = EngineBuilder::new()
        .option(ScenarioOption::new(
            "invest-moon",
            "Moon",
            Impact::new(f64::NAN, 0.0, 0.0),
        ))
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::NonFiniteValue("catalog"));

    let err = EngineBuilder::new()
        .initial_position(Balances::new(f64::INFINITY, 0.0, 0.0, 0.0))
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::NonFiniteValue("initial_position"));
}

#[test]
fn test_config_deserializes_with_defaults() {
    let json = r#"{
        "horizon_years": 3,
        "impact_mode": "absolute",
        "categories": ["investment", "housing", "expense", "savings"],
        "initial_position": {
            "kind": "fixed",
            "netWorth": 10.0,
            "savings": 5.0,
            "investments": 5.0,
            "expenses": 1.0
        },
        "housing": { "variant": "keep-rent" }
    }"#;

    let config: EngineConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.start_year, 2024);
    assert_eq!(config.horizon_years, 3);
    assert_eq!(config.impact_mode, ImpactMode::Absolute);
    assert_eq!(
        config.initial_position,
        InitialPosition::Fixed(Balances::new(10.0, 5.0, 5.0, 1.0))
    );
    assert_eq!(config.catalog.len(), 16);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = EngineBuilder::new()
        .randomized_start(
            Balances::new(50_000.0, 20_000.0, 20_000.0, 2_000.0),
            Balances::new(1_000.0, 1_000.0, 1_000.0, 100.0),
        )
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let reloaded: EngineConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, config);
}
