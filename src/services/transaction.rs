//! Transaction service
//!
//! Add, edit, delete and filter transactions. Every successful mutation is
//! saved immediately and recorded in the audit log.

use tracing::info;

use crate::audit::ChangeEvent;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Category, NewTransaction, Transaction, TransactionForm, TransactionId, TransactionPatch,
    TransactionType,
};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
///
/// `None` for category or type means "all".
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring matched against the description
    pub search: Option<String>,
    pub category: Option<Category>,
    pub kind: Option<TransactionType>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single transaction against every active criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        let search_ok = match &self.search {
            Some(term) => txn
                .description
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };

        search_ok
            && self.category.map_or(true, |c| txn.category == c)
            && self.kind.map_or(true, |k| txn.kind == k)
    }

    /// Filter a slice, preserving order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let matching = transactions.iter().filter(|t| self.matches(t)).cloned();
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a form and add the resulting transaction
    pub fn add_form(&self, form: &TransactionForm) -> FinanceResult<Transaction> {
        self.add(form.validate()?)
    }

    /// Add a transaction with a fresh id at the front of the collection
    pub fn add(&self, input: NewTransaction) -> FinanceResult<Transaction> {
        let txn = Transaction::create(input);

        self.storage.transactions.prepend(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.record(ChangeEvent::TransactionAdded {
            transaction: txn.clone(),
        });

        info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "added transaction");
        Ok(txn)
    }

    /// Resolve user input (full id or unambiguous prefix) to a transaction
    ///
    /// Used to turn what the user typed into an exact id before calling
    /// [`update`](Self::update) or [`delete`](Self::delete).
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        let mut matches = self.storage.transactions.find_matching(identifier)?;
        if let Some(exact) = matches.iter().position(|t| t.id.as_str() == identifier.trim()) {
            return Ok(Some(matches.swap_remove(exact)));
        }

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "Id '{}' is ambiguous ({} transactions match)",
                identifier, n
            ))),
        }
    }

    /// Get a transaction, failing if it does not exist
    pub fn get(&self, identifier: &str) -> FinanceResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::transaction_not_found(identifier))
    }

    /// List transactions matching a filter, most recent additions first
    pub fn list(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(filter.apply(&all))
    }

    /// Every stored transaction
    pub fn all(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Apply a patch to an existing transaction
    ///
    /// The patch is overlaid on the current values and the full form is
    /// re-validated. Returns `Ok(None)` without touching storage when no
    /// stored transaction has exactly this id.
    pub fn update(
        &self,
        id: &TransactionId,
        patch: &TransactionPatch,
    ) -> FinanceResult<Option<Transaction>> {
        let Some(existing) = self.storage.transactions.get(id)? else {
            return Ok(None);
        };

        let input = patch
            .apply_to(TransactionForm::from_transaction(&existing))
            .validate()?;

        let mut updated = existing.clone();
        updated.apply(input);

        if self.storage.transactions.replace(updated.clone())?.is_none() {
            return Ok(None);
        }
        self.storage.transactions.save()?;

        self.storage.record(ChangeEvent::TransactionEdited {
            before: existing,
            after: updated.clone(),
        });

        info!(id = %updated.id, "updated transaction");
        Ok(Some(updated))
    }

    /// Delete the transaction with exactly this id, returning it if it existed
    pub fn delete(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let Some(removed) = self.storage.transactions.delete(id)? else {
            return Ok(None);
        };
        self.storage.transactions.save()?;

        self.storage.record(ChangeEvent::TransactionDeleted {
            transaction: removed.clone(),
        });

        info!(id = %removed.id, "deleted transaction");
        Ok(Some(removed))
    }

    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FinancePaths, Settings};
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn input(description: &str, cents: i64, category: Category, kind: TransactionType) -> NewTransaction {
        NewTransaction {
            amount: Money::from_cents(cents),
            description: description.into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category,
            kind,
        }
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(input("Lunch", 5000, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();

        let all = service.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, txn.id);
    }

    #[test]
    fn test_add_persists_immediately() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        service
            .add(input("Salary", 100_000, Category::Other, TransactionType::Income))
            .unwrap();

        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::open(paths, &Settings::default()).unwrap();
        assert_eq!(reopened.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_add_form_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let form = TransactionForm {
            amount: "0".into(),
            description: "x".into(),
            date: "2024-06-01".into(),
            category: "Other".into(),
            kind: "expense".into(),
        };
        assert!(service.add_form(&form).unwrap_err().is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_changes_only_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let a = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();
        let b = service
            .add(input("Bus", 250, Category::Transportation, TransactionType::Expense))
            .unwrap();

        let patch = TransactionPatch {
            description: Some("Iced coffee".into()),
            ..Default::default()
        };
        let updated = service.update(&a.id, &patch).unwrap().unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.amount, a.amount);

        let all = service.all().unwrap();
        assert_eq!(all[0], b);
        assert_eq!(all[1].description, "Iced coffee");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();
        let before = service.all().unwrap();

        let patch = TransactionPatch {
            amount: Some("10".into()),
            ..Default::default()
        };
        assert!(service.update(&TransactionId::from("does-not-exist"), &patch).unwrap().is_none());
        assert_eq!(service.all().unwrap(), before);
    }

    #[test]
    fn test_update_validates_patch() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();

        let patch = TransactionPatch {
            amount: Some("-3".into()),
            ..Default::default()
        };
        assert!(service.update(&txn.id, &patch).is_err());
        assert_eq!(service.get(txn.id.as_str()).unwrap().amount, txn.amount);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();

        assert!(service.delete(&TransactionId::from("missing-id")).unwrap().is_none());
        assert_eq!(service.count().unwrap(), 1);

        assert!(service.delete(&txn.id).unwrap().is_some());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_and_update_require_exact_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();
        let before = service.all().unwrap();
        let prefix = TransactionId::from(&txn.id.as_str()[..4]);

        assert!(service.delete(&prefix).unwrap().is_none());
        let patch = TransactionPatch {
            amount: Some("99".into()),
            ..Default::default()
        };
        assert!(service.update(&prefix, &patch).unwrap().is_none());

        assert_eq!(service.all().unwrap(), before);
        assert_eq!(storage.audit().unwrap().records().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();

        let prefix = &txn.id.as_str()[..8];
        assert_eq!(service.find(prefix).unwrap().unwrap().id, txn.id);
        assert!(service.get("zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();
        service
            .update(
                &txn.id,
                &TransactionPatch {
                    amount: Some("5".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        service.delete(&txn.id).unwrap();

        let records = storage.audit().unwrap().records().unwrap();
        assert_eq!(records.len(), 3);
        assert!(matches!(records[0].change, ChangeEvent::TransactionAdded { .. }));
        assert_eq!(
            records[1].change.field_changes("$")[0].to_string(),
            "amount: $4.50 -> $5.00"
        );
        assert!(matches!(records[2].change, ChangeEvent::TransactionDeleted { .. }));
    }

    #[test]
    fn test_mutation_survives_history_failure() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(input("Coffee", 450, Category::FoodAndDining, TransactionType::Expense))
            .unwrap();
        assert!(service.delete(&txn.id).unwrap().is_some());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_filter_search_and_type() {
        let transactions = vec![
            Transaction::create(input("Coffee beans", 1200, Category::Groceries, TransactionType::Expense)),
            Transaction::create(input("Coffee shop refund", 500, Category::Other, TransactionType::Income)),
            Transaction::create(input("Morning COFFEE", 450, Category::FoodAndDining, TransactionType::Expense)),
            Transaction::create(input("Bus", 250, Category::Transportation, TransactionType::Expense)),
        ];

        let filter = TransactionFilter::new()
            .search("coffee")
            .kind(TransactionType::Expense);
        let result = filter.apply(&transactions);

        let descriptions: Vec<&str> = result.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Coffee beans", "Morning COFFEE"]);
    }

    #[test]
    fn test_filter_category_and_limit() {
        let transactions: Vec<Transaction> = (0..5)
            .map(|i| {
                Transaction::create(input(
                    &format!("Item {}", i),
                    100,
                    Category::Shopping,
                    TransactionType::Expense,
                ))
            })
            .collect();

        assert!(TransactionFilter::new()
            .category(Category::Travel)
            .apply(&transactions)
            .is_empty());

        let limited = TransactionFilter::new().limit(2).apply(&transactions);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].description, "Item 0");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let transactions = vec![Transaction::create(input(
            "Anything",
            100,
            Category::Other,
            TransactionType::Income,
        ))];
        assert_eq!(TransactionFilter::new().search("").apply(&transactions).len(), 1);
    }
}
