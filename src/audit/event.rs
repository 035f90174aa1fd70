//! Domain events recorded in the change history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Budget, Transaction};

/// Something that changed in the stored collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChangeEvent {
    TransactionAdded {
        transaction: Transaction,
    },
    TransactionEdited {
        before: Transaction,
        after: Transaction,
    },
    TransactionDeleted {
        transaction: Transaction,
    },
    /// A category's budget was set. Any budgets the category held before,
    /// for whatever month, are listed in `replaced`.
    BudgetSet {
        budget: Budget,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        replaced: Vec<Budget>,
    },
}

/// One transaction field that differs between two versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.from, self.to)
    }
}

impl ChangeEvent {
    /// Id of the transaction or budget this event is about
    pub fn subject_id(&self) -> String {
        match self {
            Self::TransactionAdded { transaction } | Self::TransactionDeleted { transaction } => {
                transaction.id.to_string()
            }
            Self::TransactionEdited { after, .. } => after.id.to_string(),
            Self::BudgetSet { budget, .. } => budget.id.to_string(),
        }
    }

    /// Fields an edit changed, in display order; empty for other events
    pub fn field_changes(&self, symbol: &str) -> Vec<FieldChange> {
        let Self::TransactionEdited { before, after } = self else {
            return Vec::new();
        };

        let mut changes = Vec::new();
        let mut push = |field: &'static str, from: String, to: String| {
            if from != to {
                changes.push(FieldChange { field, from, to });
            }
        };
        push(
            "amount",
            before.amount.format_with_symbol(symbol),
            after.amount.format_with_symbol(symbol),
        );
        push(
            "description",
            format!("\"{}\"", before.description),
            format!("\"{}\"", after.description),
        );
        push("date", before.date.to_string(), after.date.to_string());
        push("category", before.category.to_string(), after.category.to_string());
        push("type", before.kind.to_string(), after.kind.to_string());
        changes
    }

    /// One-line description for the history listing
    pub fn describe(&self, symbol: &str) -> String {
        match self {
            Self::TransactionAdded { transaction: t } => format!(
                "Added {} {} \"{}\" {} ({}, {})",
                t.kind,
                t.id.short(),
                t.description,
                t.amount.format_with_symbol(symbol),
                t.category,
                t.date
            ),
            Self::TransactionEdited { after, .. } => {
                let changes = self.field_changes(symbol);
                let detail = if changes.is_empty() {
                    "no field changes".to_string()
                } else {
                    changes
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("Edited {} \"{}\": {}", after.id.short(), after.description, detail)
            }
            Self::TransactionDeleted { transaction: t } => format!(
                "Deleted {} {} \"{}\" {}",
                t.kind,
                t.id.short(),
                t.description,
                t.amount.format_with_symbol(symbol)
            ),
            Self::BudgetSet { budget, replaced } => {
                let mut line = format!(
                    "Set {} budget for {} to {}",
                    budget.category,
                    budget.month,
                    budget.amount.format_with_symbol(symbol)
                );
                if !replaced.is_empty() {
                    let previous: Vec<String> = replaced
                        .iter()
                        .map(|b| format!("{} {}", b.month, b.amount.format_with_symbol(symbol)))
                        .collect();
                    line.push_str(&format!(" (replaced {})", previous.join(", ")));
                }
                line
            }
        }
    }
}

/// A timestamped event as stored in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub at: DateTime<Utc>,
    pub change: ChangeEvent,
}

impl ChangeRecord {
    pub fn now(change: ChangeEvent) -> Self {
        Self {
            at: Utc::now(),
            change,
        }
    }

    pub fn format(&self, symbol: &str) -> String {
        format!(
            "[{}] {}",
            self.at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.change.describe(symbol)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Category, Money, Month, TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn coffee() -> Transaction {
        Transaction {
            id: TransactionId::from("abcd1234-0000"),
            amount: Money::from_cents(450),
            description: "Coffee".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            category: Category::FoodAndDining,
            kind: TransactionType::Expense,
        }
    }

    fn groceries(month: &str, dollars: i64) -> Budget {
        Budget {
            id: BudgetId::from(format!("b-{}", month).as_str()),
            category: Category::Groceries,
            amount: Money::from_dollars_cents(dollars, 0),
            month: Month::parse(month).unwrap(),
        }
    }

    #[test]
    fn test_added_description() {
        let event = ChangeEvent::TransactionAdded {
            transaction: coffee(),
        };
        assert_eq!(
            event.describe("$"),
            "Added expense txn-abcd1234 \"Coffee\" $4.50 (Food & Dining, 2024-06-03)"
        );
        assert_eq!(event.subject_id(), "abcd1234-0000");
    }

    #[test]
    fn test_edit_lists_changed_fields_only() {
        let before = coffee();
        let mut after = coffee();
        after.amount = Money::from_cents(500);
        after.category = Category::Groceries;

        let event = ChangeEvent::TransactionEdited { before, after };
        let changes = event.field_changes("$");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].to_string(), "amount: $4.50 -> $5.00");
        assert_eq!(changes[1].to_string(), "category: Food & Dining -> Groceries");
        assert!(event.describe("$").starts_with("Edited txn-abcd1234 \"Coffee\": amount"));
    }

    #[test]
    fn test_edit_without_changes() {
        let event = ChangeEvent::TransactionEdited {
            before: coffee(),
            after: coffee(),
        };
        assert!(event.field_changes("$").is_empty());
        assert!(event.describe("$").ends_with("no field changes"));
    }

    #[test]
    fn test_budget_set_mentions_replaced_months() {
        let event = ChangeEvent::BudgetSet {
            budget: groceries("2024-06", 400),
            replaced: vec![groceries("2024-05", 300)],
        };
        assert_eq!(
            event.describe("$"),
            "Set Groceries budget for 2024-06 to $400.00 (replaced 2024-05 $300.00)"
        );
    }

    #[test]
    fn test_record_json_shape() {
        let record = ChangeRecord::now(ChangeEvent::BudgetSet {
            budget: groceries("2024-06", 400),
            replaced: Vec::new(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["change"]["event"], "budget_set");
        assert!(value["change"].get("replaced").is_none());

        let back: ChangeRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
