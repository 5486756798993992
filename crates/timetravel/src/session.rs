//! Interactive and scripted play
//!
//! A [`Session`] asks a [`ChoiceSource`] for one option per category until
//! the engine completes, then returns the report. Prompted input may be
//! retried after a rejection. Scripted input may not.

use std::io::{BufRead, Write};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use timetravel_core::model::{Category, FinancialPosition, Report, ScenarioOption};
use timetravel_core::{EngineError, ImpactMode, ProjectionEngine};

use crate::summary::{describe_impact, position_line};

/// One scripted answer: an option id, or a zero-based index into the
/// options offered at that point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptedChoice {
    Id(String),
    Pick { pick: usize },
}

/// Choices for a whole run, consumed in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceScript {
    #[serde(default)]
    pub choices: Vec<ScriptedChoice>,
    /// Start again from the first choice once the list is exhausted
    #[serde(default)]
    pub repeat: bool,
}

/// Supplies the option id to submit for each category
pub trait ChoiceSource {
    fn choose(
        &mut self,
        position: &FinancialPosition,
        category: Category,
        options: &[ScenarioOption],
    ) -> Result<String>;

    /// Called when the engine rejects a choice. `Ok` asks again for the same
    /// category; `Err` ends the session.
    fn rejected(&mut self, category: Category, err: &EngineError) -> Result<()>;
}

pub struct ScriptedChoices {
    script: ChoiceScript,
    next: usize,
}

impl ScriptedChoices {
    pub fn new(script: ChoiceScript) -> Self {
        Self { script, next: 0 }
    }

    /// Number of choices consumed so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(
        &mut self,
        position: &FinancialPosition,
        category: Category,
        options: &[ScenarioOption],
    ) -> Result<String> {
        let len = self.script.choices.len();
        let entry = if self.next < len {
            &self.script.choices[self.next]
        } else if self.script.repeat && len > 0 {
            &self.script.choices[self.next % len]
        } else {
            bail!(
                "script ran out after {} choices ({category} in {})",
                self.next,
                position.year
            );
        };
        let number = self.next + 1;
        self.next += 1;

        match entry {
            ScriptedChoice::Id(id) => Ok(id.clone()),
            ScriptedChoice::Pick { pick } => options
                .get(*pick)
                .map(|option| option.id.clone())
                .ok_or_else(|| {
                    eyre!(
                        "choice #{number} picks option {pick} but only {} are offered for {category} in {}",
                        options.len(),
                        position.year
                    )
                }),
        }
    }

    fn rejected(&mut self, category: Category, err: &EngineError) -> Result<()> {
        Err(err.clone())
            .wrap_err_with(|| format!("scripted choice #{} rejected for {category}", self.next))
    }
}

/// Reads numbered choices (or option ids) line by line
pub struct PromptChoices<B, W> {
    input: B,
    output: W,
    mode: ImpactMode,
}

impl<B: BufRead, W: Write> PromptChoices<B, W> {
    pub fn new(input: B, output: W, mode: ImpactMode) -> Self {
        Self {
            input,
            output,
            mode,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(
        &mut self,
        position: &FinancialPosition,
        category: Category,
        options: &[ScenarioOption],
    ) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Year {} - {}", position.year, category.label())?;
        writeln!(self.output, "{}", position_line(position))?;
        for (i, option) in options.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({})",
                i + 1,
                option.title,
                describe_impact(&option.impact, self.mode)
            )?;
            if !option.description.is_empty() {
                writeln!(self.output, "     {}", option.description)?;
            }
        }
        Ok(())
    }
}

impl<B: BufRead, W: Write> ChoiceSource for PromptChoices<B, W> {
    fn choose(
        &mut self,
        position: &FinancialPosition,
        category: Category,
        options: &[ScenarioOption],
    ) -> Result<String> {
        if options.is_empty() {
            bail!("no options offered for {category} in {}", position.year);
        }
        self.show(position, category, options)?;

        loop {
            write!(self.output, "Choose 1-{}: ", options.len())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before choosing {category} for {}", position.year);
            }
            let answer = line.trim();

            if let Ok(n) = answer.parse::<usize>()
                && (1..=options.len()).contains(&n)
            {
                return Ok(options[n - 1].id.clone());
            }
            if let Some(option) = options.iter().find(|o| o.id == answer) {
                return Ok(option.id.clone());
            }
            writeln!(self.output, "'{answer}' is not one of the options")?;
        }
    }

    fn rejected(&mut self, _category: Category, err: &EngineError) -> Result<()> {
        writeln!(self.output, "That choice was not accepted: {err}")?;
        Ok(())
    }
}

/// One simulation driven to completion by a choice source
pub struct Session<S, R = SmallRng> {
    engine: ProjectionEngine<R>,
    source: S,
}

impl<S: ChoiceSource, R: Rng> Session<S, R> {
    pub fn new(engine: ProjectionEngine<R>, source: S) -> Self {
        Self { engine, source }
    }

    pub fn engine(&self) -> &ProjectionEngine<R> {
        &self.engine
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Play until the engine completes and return its report
    pub fn run(&mut self) -> Result<Report> {
        while let Some(category) = self.engine.next_category() {
            let options = self
                .engine
                .list_options(category)
                .wrap_err_with(|| format!("listing {category} options"))?;
            let position = self.engine.position();
            let choice = self.source.choose(&position, category, &options)?;

            match self.engine.apply_decision(category, &choice) {
                Ok(updated) => {
                    tracing::debug!(
                        year = position.year,
                        %category,
                        choice = %choice,
                        net_worth = updated.net_worth,
                        "decision applied"
                    );
                }
                Err(err) => {
                    tracing::info!(%category, choice = %choice, error = %err, "choice rejected");
                    self.source.rejected(category, &err)?;
                }
            }
        }

        let report = self.engine.report()?;
        tracing::info!(
            final_year = report.final_position.year,
            net_worth = report.final_position.net_worth,
            "session finished"
        );
        Ok(report)
    }
}
