//! Tests for scripted and prompted sessions

use std::io::Cursor;

use timetravel_core::model::{Category, HousingLabel};
use timetravel_core::{EngineConfig, EngineError, ImpactMode, ProjectionEngine};

use super::two_year_config;
use crate::session::{
    ChoiceScript, ChoiceSource, PromptChoices, ScriptedChoice, ScriptedChoices, Session,
};

fn ids(ids: &[&str]) -> ChoiceScript {
    ChoiceScript {
        choices: ids
            .iter()
            .map(|id| ScriptedChoice::Id(id.to_string()))
            .collect(),
        repeat: false,
    }
}

#[test]
fn test_scripted_ids_match_direct_engine_calls() {
    let script = ids(&[
        "invest-stocks",
        "buy-house",
        "reduce-luxuries-expenses",
        "conservative-savings",
        "invest-keep-money",
        "select-rent",
        "cut-no-expenses",
        "no-savings-account",
    ]);

    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let report = Session::new(engine, ScriptedChoices::new(script.clone()))
        .run()
        .unwrap();

    let mut direct = ProjectionEngine::new(two_year_config(), 1).unwrap();
    for choice in &script.choices {
        let ScriptedChoice::Id(id) = choice else {
            unreachable!()
        };
        let category = direct.next_category().unwrap();
        direct.apply_decision(category, id).unwrap();
    }

    assert_eq!(report, direct.report().unwrap());
    assert_eq!(report.decisions.len(), 8);
    assert_eq!(report.decisions[1].housing_choice, Some(HousingLabel::Buy));
    assert_eq!(report.decisions[5].housing_choice, Some(HousingLabel::Rent));
}

#[test]
fn test_repeating_pick_script_plays_a_full_run() {
    let yaml = "choices:\n  - pick: 0\nrepeat: true\n";
    let script: ChoiceScript = serde_saphyr::from_str(yaml).unwrap();
    assert_eq!(script.choices, vec![ScriptedChoice::Pick { pick: 0 }]);

    let engine = ProjectionEngine::new(EngineConfig::default(), 42).unwrap();
    let mut session = Session::new(engine, ScriptedChoices::new(script));
    let report = session.run().unwrap();

    assert_eq!(report.decisions.len(), 50);
    assert_eq!(report.final_position.year, 2034);
    assert_eq!(session.source().consumed(), 50);
    assert!(session.engine().is_complete());
}

#[test]
fn test_script_that_runs_out_fails() {
    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let err = Session::new(engine, ScriptedChoices::new(ids(&["invest-stocks"])))
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("script ran out after 1 choices"));
}

#[test]
fn test_rejected_scripted_choice_aborts_with_context() {
    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let err = Session::new(engine, ScriptedChoices::new(ids(&["buy-house"])))
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("scripted choice #1 rejected for investment"));
    let cause = err.downcast_ref::<EngineError>().unwrap();
    assert!(matches!(cause, EngineError::CategoryMismatch { .. }));
}

#[test]
fn test_pick_out_of_range_fails() {
    let script = ChoiceScript {
        choices: vec![ScriptedChoice::Pick { pick: 9 }],
        repeat: true,
    };
    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();

    let err = Session::new(engine, ScriptedChoices::new(script))
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("picks option 9 but only 3 are offered"));
}

#[test]
fn test_prompt_reasks_until_a_valid_answer() {
    // Invalid number, unknown id, then valid answers for the rest of the run
    let mut input = String::from("7\nnot-an-option\n1\n");
    input.push_str("buy-house\n");
    input.push_str(&"1\n".repeat(6));

    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let prompt = PromptChoices::new(Cursor::new(input), Vec::new(), ImpactMode::Percentage);
    let mut session = Session::new(engine, prompt);
    let report = session.run().unwrap();

    assert_eq!(report.decisions[0].investment_choice, "invest-stocks");
    assert_eq!(report.decisions[1].investment_choice, "buy-house");
    assert_eq!(report.decisions.len(), 8);
}

#[test]
fn test_prompt_output_lists_numbered_options() {
    let mut engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let options = engine.list_options(Category::Investment).unwrap();
    let position = engine.position();

    let mut prompt = PromptChoices::new(Cursor::new("x\n2\n"), Vec::new(), ImpactMode::Percentage);
    let id = prompt
        .choose(&position, Category::Investment, &options)
        .unwrap();
    let output = String::from_utf8(prompt.into_output()).unwrap();

    assert_eq!(id, options[1].id);
    assert!(output.contains("Year 2024 - Investments"));
    assert!(output.contains("Net worth $100,000"));
    assert!(output.contains(&format!("  1. {}", options[0].title)));
    assert!(output.contains("Choose 1-3: "));
    assert!(output.contains("'x' is not one of the options"));
}

#[test]
fn test_prompt_fails_when_input_closes() {
    let engine = ProjectionEngine::new(two_year_config(), 1).unwrap();
    let prompt = PromptChoices::new(Cursor::new("1\n"), Vec::new(), ImpactMode::Percentage);

    let err = Session::new(engine, prompt).run().unwrap_err();

    assert!(err.to_string().contains("input closed before choosing housing"));
}

#[test]
fn test_prompt_rejection_is_reported_and_retried() {
    let mut prompt = PromptChoices::new(Cursor::new(""), Vec::new(), ImpactMode::Absolute);

    prompt
        .rejected(Category::Housing, &EngineError::SimulationComplete)
        .unwrap();

    let output = String::from_utf8(prompt.into_output()).unwrap();
    assert!(output.contains("That choice was not accepted: simulation is already complete"));
}
