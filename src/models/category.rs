//! Category model
//!
//! The fixed, closed set of spending/income categories shared by every form
//! and filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transaction or budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Groceries,
        Category::Other,
    ];

    /// The label stored on disk and shown to users
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Groceries => "Groceries",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive match on the label; `and` may stand in for `&`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .iter()
            .copied()
            .find(|c| normalize(c.label()) == wanted)
            .ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(" and ", " & ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Error returned when a category label is not one of the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_categories() {
        assert_eq!(Category::ALL.len(), 10);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");

        let parsed: Category = serde_json::from_str("\"Bills & Utilities\"").unwrap();
        assert_eq!(parsed, Category::BillsAndUtilities);

        assert!(serde_json::from_str::<Category>("\"Pets\"").is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("groceries".parse::<Category>(), Ok(Category::Groceries));
        assert_eq!("FOOD & DINING".parse::<Category>(), Ok(Category::FoodAndDining));
        assert_eq!(
            "bills and utilities".parse::<Category>(),
            Ok(Category::BillsAndUtilities)
        );
        assert_eq!(
            "Pets".parse::<Category>(),
            Err(UnknownCategory("Pets".to_string()))
        );
    }

    #[test]
    fn test_every_label_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
    }
}
