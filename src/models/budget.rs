//! Budget model
//!
//! A monthly spending ceiling for one category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use super::month::Month;
use super::transaction::{parse_category, parse_positive_amount};
use crate::error::{FieldErrors, FinanceError, FinanceResult};

/// A spending ceiling for a category in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: Category,
    /// The spending ceiling
    pub amount: Money,
    pub month: Month,
}

impl Budget {
    /// Create a budget with a freshly assigned id
    pub fn create(input: NewBudget) -> Self {
        Self {
            id: BudgetId::new(),
            category: input.category,
            amount: input.amount,
            month: input.month,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.month, self.category, self.amount)
    }
}

/// Validated values for a budget
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: Category,
    pub amount: Money,
    pub month: Month,
}

/// Raw budget form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
    pub month: String,
}

impl BudgetForm {
    /// Validate every field, collecting all failures
    pub fn validate(&self) -> FinanceResult<NewBudget> {
        let mut errors = FieldErrors::new();

        let category = parse_category(&self.category, &mut errors);
        let amount = parse_positive_amount(&self.amount, &mut errors);

        let month = if self.month.trim().is_empty() {
            errors.push("month", "Month is required");
            None
        } else {
            match Month::parse(&self.month) {
                Ok(month) => Some(month),
                Err(e) => {
                    errors.push("month", e.to_string());
                    None
                }
            }
        };

        errors.into_result()?;

        match (category, amount, month) {
            (Some(category), Some(amount), Some(month)) => Ok(NewBudget {
                category,
                amount,
                month,
            }),
            _ => Err(FinanceError::Validation("Incomplete budget input".into())),
        }
    }
}
