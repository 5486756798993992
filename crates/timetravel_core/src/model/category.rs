//! Decision categories and the per-year progress cursor
//!
//! Every simulated year asks for exactly one choice per required category,
//! submitted in canonical order. An option's category is derived from its id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed decision topics of a simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Random,
    Investment,
    Housing,
    Expense,
    Savings,
}

impl Category {
    /// All categories in canonical submission order
    pub const ALL: [Category; 5] = [
        Category::Random,
        Category::Investment,
        Category::Housing,
        Category::Expense,
        Category::Savings,
    ];

    /// Classify an option id into its category.
    ///
    /// Substrings are checked in order: `invest`, `house`/`rent`, `expenses`,
    /// `savings`. Anything else is a random event.
    pub fn classify(id: &str) -> Category {
        if id.contains("invest") {
            Category::Investment
        } else if id.contains("house") || id.contains("rent") {
            Category::Housing
        } else if id.contains("expenses") {
            Category::Expense
        } else if id.contains("savings") {
            Category::Savings
        } else {
            Category::Random
        }
    }

    /// Position in canonical order
    pub fn index(self) -> usize {
        match self {
            Category::Random => 0,
            Category::Investment => 1,
            Category::Housing => 2,
            Category::Expense => 3,
            Category::Savings => 4,
        }
    }

    /// Human-readable heading
    pub fn label(self) -> &'static str {
        match self {
            Category::Random => "Random Events",
            Category::Investment => "Investments",
            Category::Housing => "Housing",
            Category::Expense => "Expenses",
            Category::Savings => "Savings",
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Random => "random",
            Category::Investment => "investment",
            Category::Housing => "housing",
            Category::Expense => "expense",
            Category::Savings => "savings",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "random-event" | "event" => Ok(Category::Random),
            "investment" | "investments" | "invest" => Ok(Category::Investment),
            "housing" | "house" => Ok(Category::Housing),
            "expense" | "expenses" => Ok(Category::Expense),
            "savings" | "saving" => Ok(Category::Savings),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Compact set of categories, used as the per-year progress cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn insert(&mut self, category: Category) -> bool {
        let added = !self.contains(category);
        self.0 |= category.bit();
        added
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}
