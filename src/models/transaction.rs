//! Transaction model
//!
//! Represents a single income or expense entry, plus the form types used to
//! validate user input before a transaction is created or edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::month::Month;
use crate::error::{FieldErrors, FinanceResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
}

impl TransactionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "out" => Ok(Self::Expense),
            "income" | "in" => Ok(Self::Income),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, never reassigned
    pub id: TransactionId,

    /// Positive amount in currency units
    pub amount: Money,

    pub description: String,

    /// Transaction date
    pub date: NaiveDate,

    pub category: Category,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a transaction with a freshly assigned id
    pub fn create(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            amount: input.amount,
            description: input.description,
            date: input.date,
            category: input.category,
            kind: input.kind,
        }
    }

    /// Overwrite every field except the id
    pub fn apply(&mut self, input: NewTransaction) {
        self.amount = input.amount;
        self.description = input.description;
        self.date = input.date;
        self.category = input.category;
        self.kind = input.kind;
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Month this transaction falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Amount with sign applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Expense => -self.amount,
            TransactionType::Income => self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount
        )
    }
}

/// Validated values for a new or edited transaction
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub category: Category,
    pub kind: TransactionType,
}

/// Raw transaction form input, validated field by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub kind: String,
}

impl TransactionForm {
    /// Pre-fill a form with an existing transaction's values
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: format!("{:.2}", txn.amount.as_units()),
            description: txn.description.clone(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            category: txn.category.label().to_string(),
            kind: txn.kind.as_str().to_string(),
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> FinanceResult<NewTransaction> {
        let mut errors = FieldErrors::new();

        let amount = parse_positive_amount(&self.amount, &mut errors);

        let description = self.description.trim().to_string();
        if description.is_empty() {
            errors.push("description", "Description is required");
        }

        let date = if self.date.trim().is_empty() {
            errors.push("date", "Date is required");
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date", format!("Invalid date '{}', expected YYYY-MM-DD", self.date.trim()));
                    None
                }
            }
        };

        let category = parse_category(&self.category, &mut errors);

        let kind = if self.kind.trim().is_empty() {
            Some(TransactionType::default())
        } else {
            match self.kind.parse::<TransactionType>() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    errors.push("type", e);
                    None
                }
            }
        };

        errors.into_result()?;

        match (amount, date, category, kind) {
            (Some(amount), Some(date), Some(category), Some(kind)) => Ok(NewTransaction {
                amount,
                description,
                date,
                category,
                kind,
            }),
            // every None path above records a field error
            _ => Err(crate::error::FinanceError::Validation(
                "Incomplete transaction input".into(),
            )),
        }
    }
}

/// Optional field overrides for editing a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.kind.is_none()
    }

    /// Overlay the patch onto a pre-filled form
    pub fn apply_to(&self, mut form: TransactionForm) -> TransactionForm {
        if let Some(amount) = &self.amount {
            form.amount = amount.clone();
        }
        if let Some(description) = &self.description {
            form.description = description.clone();
        }
        if let Some(date) = &self.date {
            form.date = date.clone();
        }
        if let Some(category) = &self.category {
            form.category = category.clone();
        }
        if let Some(kind) = &self.kind {
            form.kind = kind.clone();
        }
        form
    }
}

pub(crate) fn parse_positive_amount(raw: &str, errors: &mut FieldErrors) -> Option<Money> {
    if raw.trim().is_empty() {
        errors.push("amount", "Amount must be greater than 0");
        return None;
    }
    match Money::parse(raw) {
        Ok(amount) if amount.is_positive() => Some(amount),
        Ok(_) => {
            errors.push("amount", "Amount must be greater than 0");
            None
        }
        Err(e) => {
            errors.push("amount", e.to_string());
            None
        }
    }
}

pub(crate) fn parse_category(raw: &str, errors: &mut FieldErrors) -> Option<Category> {
    if raw.trim().is_empty() {
        errors.push("category", "Category is required");
        return None;
    }
    match raw.parse::<Category>() {
        Ok(category) => Some(category),
        Err(e) => {
            errors.push("category", e.to_string());
            None
        }
    }
}
