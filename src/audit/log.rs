//! Append-only change log on disk

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{FinanceError, FinanceResult};

use super::event::{ChangeEvent, ChangeRecord};

/// Line-delimited JSON log of [`ChangeRecord`]s
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp an event and append it as a single line
    pub fn append(&self, change: ChangeEvent) -> FinanceResult<ChangeRecord> {
        let record = ChangeRecord::now(change);

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(&line).map_err(|e| self.io_error("append to", e))?;

        Ok(record)
    }

    /// Every record, oldest first
    pub fn records(&self) -> FinanceResult<Vec<ChangeRecord>> {
        let mut all = Vec::new();
        self.scan(|record| all.push(record))?;
        Ok(all)
    }

    /// The last `limit` records, oldest first
    pub fn recent(&self, limit: usize) -> FinanceResult<Vec<ChangeRecord>> {
        let mut tail = VecDeque::with_capacity(limit.min(256));
        self.scan(|record| {
            if limit == 0 {
                return;
            }
            if tail.len() == limit {
                tail.pop_front();
            }
            tail.push_back(record);
        })?;
        Ok(tail.into())
    }

    /// Feed each readable record to `visit`
    ///
    /// Lines that do not parse are skipped with a warning so one damaged
    /// line never hides the rest of the history.
    fn scan(&self, mut visit: impl FnMut(ChangeRecord)) -> FinanceResult<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => visit(record),
                Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable change record"),
            }
        }
        Ok(())
    }

    fn io_error(&self, action: &str, e: io::Error) -> FinanceError {
        FinanceError::Io(format!("Failed to {} {}: {}", action, self.path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewTransaction, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_log() -> (TempDir, AuditLog) {
        let temp_dir = TempDir::new().unwrap();
        let log = AuditLog::new(temp_dir.path().join("audit.log"));
        (temp_dir, log)
    }

    fn added(description: &str) -> ChangeEvent {
        ChangeEvent::TransactionAdded {
            transaction: Transaction::create(NewTransaction {
                amount: Money::from_cents(1000),
                description: description.into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                category: Category::Other,
                kind: TransactionType::Expense,
            }),
        }
    }

    fn descriptions(records: &[ChangeRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| match &r.change {
                ChangeEvent::TransactionAdded { transaction } => transaction.description.clone(),
                other => panic!("unexpected event {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let (_temp_dir, log) = create_test_log();
        assert!(log.records().unwrap().is_empty());
        assert!(log.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read_back() {
        let (_temp_dir, log) = create_test_log();
        let written = log.append(added("Rent")).unwrap();

        let records = log.records().unwrap();
        assert_eq!(records, vec![written]);
    }

    #[test]
    fn test_recent_keeps_newest_in_order() {
        let (_temp_dir, log) = create_test_log();
        for name in ["a", "b", "c", "d", "e"] {
            log.append(added(name)).unwrap();
        }

        assert_eq!(descriptions(&log.recent(2).unwrap()), vec!["d", "e"]);
        assert_eq!(log.recent(10).unwrap().len(), 5);
        assert!(log.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_damaged_line_is_skipped() {
        let (_temp_dir, log) = create_test_log();
        log.append(added("before")).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "{{not a record").unwrap();
        log.append(added("after")).unwrap();

        assert_eq!(descriptions(&log.records().unwrap()), vec!["before", "after"]);
    }

    #[test]
    fn test_append_to_unwritable_path_is_io_error() {
        let (temp_dir, _log) = create_test_log();
        let log = AuditLog::new(temp_dir.path().to_path_buf());
        assert!(matches!(log.append(added("x")), Err(FinanceError::Io(_))));
    }
}
