//! Scenario catalog
//!
//! Maps each category to the options a player may choose from. The classic
//! catalog reproduces the ten-year "time travel" simulator's choices.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Impact, ScenarioOption};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    options: BTreeMap<Category, Vec<ScenarioOption>>,
}

impl ScenarioCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// File an option under the category its id classifies into
    pub fn add(&mut self, option: ScenarioOption) {
        let category = option.category();
        self.insert(category, option);
    }

    /// File an option under an explicit category.
    ///
    /// Validation rejects options whose id does not classify into `category`.
    pub fn insert(&mut self, category: Category, option: ScenarioOption) {
        self.options.entry(category).or_default().push(option);
    }

    #[must_use]
    pub fn with(mut self, option: ScenarioOption) -> Self {
        self.add(option);
        self
    }

    /// Options for a category, in catalog order
    pub fn options(&self, category: Category) -> &[ScenarioOption] {
        self.options
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&ScenarioOption> {
        self.options(category).iter().find(|o| o.id == id)
    }

    /// Every (category, option) pair
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ScenarioOption)> {
        self.options
            .iter()
            .flat_map(|(category, options)| options.iter().map(move |o| (*category, o)))
    }

    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookup from option id to the category it is filed under
    pub(crate) fn category_index(&self) -> FxHashMap<String, Category> {
        self.iter()
            .map(|(category, option)| (option.id.clone(), category))
            .collect()
    }

    /// The classic decision options and random events.
    ///
    /// Impacts are percentages.
    pub fn classic() -> Self {
        let decisions = [
            ScenarioOption::new(
                "invest-stocks",
                "Invest in High-Growth Stocks",
                Impact::new(15.0, -10.0, 0.0),
            )
            .description(
                "Allocate a significant portion of your portfolio to promising tech stocks.",
            ),
            ScenarioOption::new(
                "invest-mutual-funds",
                "Invest in Mutual Funds",
                Impact::new(10.0, -5.0, 0.0),
            )
            .description("Diversify your portfolio with a mix of mutual funds."),
            ScenarioOption::new("invest-keep-money", "Keep Money", Impact::NONE)
                .description("Keep your money in a safe, low-risk account."),
            ScenarioOption::new(
                "buy-house",
                "Purchase a Home",
                Impact::new(-20.0, -30.0, 20.0),
            )
            .description("Buy a property in an up-and-coming neighborhood."),
            ScenarioOption::new("select-rent", "Select to Rent", Impact::new(5.0, 10.0, -15.0))
                .description(
                    "Opt to rent a home instead of buying, freeing up capital for other investments.",
                ),
            ScenarioOption::new(
                "reduce-luxuries-expenses",
                "Cut Luxury Expenses",
                Impact::new(0.0, 15.0, -20.0),
            )
            .description("Eliminate spending on luxury items and services."),
            ScenarioOption::new(
                "reduce-entertainment-expenses",
                "Cut Entertainment Expenses",
                Impact::new(0.0, 10.0, -15.0),
            )
            .description(
                "Reduce spending on entertainment such as movies, dining out, and subscriptions.",
            ),
            ScenarioOption::new(
                "reduce-utilities-expenses",
                "Cut Utility Expenses",
                Impact::new(0.0, 5.0, -10.0),
            )
            .description("Optimize your utility usage to lower bills."),
            ScenarioOption::new("cut-no-expenses", "Cut no expenses", Impact::NONE)
                .description("Cut no other expenses and keep your current lifestyle."),
            ScenarioOption::new(
                "conservative-savings",
                "Focus on Savings",
                Impact::new(-10.0, 30.0, -10.0),
            )
            .description("Maximize your savings with adding funds to high-yield accounts."),
            ScenarioOption::new(
                "no-savings-account",
                "Do Not Use Savings Account",
                Impact::NONE,
            )
            .description("Keep your money accessible without putting it into a savings account."),
        ];

        let random_events = [
            ScenarioOption::new("unexpected-expense", "Unexpected Medical Expense", Impact::NONE)
                .description("You have an unexpected medical expense that impacts your finances.")
                .variability(Impact::new(-10.0, -20.0, -15.0)),
            ScenarioOption::new("car-repair", "Car Repair", Impact::NONE)
                .description("Your car needs a major repair, affecting your budget.")
                .variability(Impact::new(-5.0, -10.0, -10.0)),
            ScenarioOption::new("job-loss", "Job Loss", Impact::NONE)
                .description("You lose your job and need to manage your finances carefully.")
                .variability(Impact::new(-15.0, -30.0, -20.0)),
            ScenarioOption::new("home-repair", "Home Repair", Impact::NONE)
                .description("Your home requires an urgent repair, impacting your savings.")
                .variability(Impact::new(-10.0, -20.0, -15.0)),
            ScenarioOption::new("market-downturn", "Market Downturn", Impact::NONE)
                .description("A market downturn affects your investments negatively.")
                .variability(Impact::new(-20.0, -10.0, 0.0)),
        ];

        let mut catalog = ScenarioCatalog::new();
        for option in decisions.into_iter().chain(random_events) {
            catalog.add(option);
        }
        catalog
    }
}
