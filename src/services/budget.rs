//! Budget service
//!
//! A category holds at most one budget at a time: setting a budget replaces
//! whatever budget that category had, whichever month it was for.

use tracing::info;

use crate::audit::ChangeEvent;
use crate::error::FinanceResult;
use crate::models::{Budget, BudgetForm, Category, Month, NewBudget};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a form and set the resulting budget
    pub fn set_form(&self, form: &BudgetForm) -> FinanceResult<Budget> {
        self.set(form.validate()?)
    }

    /// Insert or replace the budget for a category
    ///
    /// The new budget is appended and every earlier budget of the same
    /// category is dropped, whatever month it covered.
    pub fn set(&self, input: NewBudget) -> FinanceResult<Budget> {
        let budget = Budget::create(input);

        let replaced = self.storage.budgets.replace_category(budget.clone())?;
        self.storage.budgets.save()?;

        info!(
            category = %budget.category,
            month = %budget.month,
            amount = %budget.amount,
            replaced = replaced.len(),
            "set budget"
        );
        self.storage.record(ChangeEvent::BudgetSet {
            budget: budget.clone(),
            replaced,
        });
        Ok(budget)
    }

    /// All budgets in stored order
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Budgets whose month equals `month`
    pub fn for_month(&self, month: Month) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets.get_for_month(month)
    }

    pub fn for_category(&self, category: Category) -> FinanceResult<Option<Budget>> {
        self.storage.budgets.get_for_category(category)
    }
}
