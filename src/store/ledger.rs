//! Audit ledger over audits.csv
//!
//! Append-only in normal operation; the only edit path overwrites the
//! `result` field of an existing row, addressed by stable record ID or -
//! for parity with the source system's admin path - by zero-based row
//! position.

use std::path::PathBuf;
use thiserror::Error;

use crate::entities::audit::{AuditRecord, AuditResult};
use crate::store::{read_table, write_table};

/// The audit answer ledger
#[derive(Debug)]
pub struct AuditLedger {
    path: PathBuf,
}

impl AuditLedger {
    /// Ledger over the given CSV file; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every row in stored order; an absent store is an empty ledger
    pub fn load(&self) -> Result<Vec<AuditRecord>, LedgerError> {
        Ok(read_table(&self.path)?)
    }

    /// Append records, preserving both the stored order and the
    /// submission order of the new rows.
    pub fn append(&self, records: &[AuditRecord]) -> Result<(), LedgerError> {
        let mut rows = self.load()?;
        rows.extend_from_slice(records);
        write_table(&self.path, &rows)?;
        Ok(())
    }

    /// All rows, or only rows for the given component, in stored order
    pub fn list(&self, component: Option<&str>) -> Result<Vec<AuditRecord>, LedgerError> {
        let rows = self.load()?;
        Ok(match component {
            Some(c) => rows.into_iter().filter(|r| r.component == c).collect(),
            None => rows,
        })
    }

    /// Overwrite the result of the row at a zero-based position.
    ///
    /// The store is untouched when the index is out of range.
    pub fn patch_result(
        &self,
        index: usize,
        result: AuditResult,
    ) -> Result<AuditRecord, LedgerError> {
        let mut rows = self.load()?;
        let count = rows.len();
        let row = rows
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, count })?;
        row.result = result;
        let patched = row.clone();
        write_table(&self.path, &rows)?;
        Ok(patched)
    }

    /// Overwrite the result of the row carrying the given record ID
    pub fn patch_result_by_id(
        &self,
        id: &str,
        result: AuditResult,
    ) -> Result<AuditRecord, LedgerError> {
        let mut rows = self.load()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id.to_string() == id)
            .ok_or_else(|| LedgerError::UnknownRecord(id.to_string()))?;
        row.result = result;
        let patched = row.clone();
        write_table(&self.path, &rows)?;
        Ok(patched)
    }
}

/// Errors that can occur on ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("row {index} is out of range (ledger has {count} rows)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("no audit record with id '{0}'")]
    UnknownRecord(String),

    #[error("malformed ledger: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::audit::AuditSubmission;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn submission(component: &str, date: (i32, u32, u32)) -> AuditSubmission {
        AuditSubmission {
            component: component.to_string(),
            auditor: "Jan Kowalski".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            user: "jan@example.com".to_string(),
            version: Some("1.0".to_string()),
        }
    }

    fn answers(n: usize) -> Vec<(String, AuditResult, Option<String>)> {
        (0..n)
            .map(|i| (format!("Question {}?", i + 1), AuditResult::Yes, None))
            .collect()
    }

    #[test]
    fn test_absent_store_is_empty() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_submission_order() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));

        let first = submission("Bracket-A", (2024, 3, 1)).into_records(answers(3));
        let second = submission("Housing", (2024, 3, 2)).into_records(answers(2));
        ledger.append(&first).unwrap();
        ledger.append(&second).unwrap();

        let rows = ledger.load().unwrap();
        assert_eq!(rows.len(), 5);
        for (expected, actual) in first.iter().chain(second.iter()).zip(rows.iter()) {
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn test_list_filters_by_component() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));

        ledger
            .append(&submission("Bracket-A", (2024, 3, 1)).into_records(answers(3)))
            .unwrap();
        ledger
            .append(&submission("Housing", (2024, 3, 2)).into_records(answers(2)))
            .unwrap();

        let bracket = ledger.list(Some("Bracket-A")).unwrap();
        assert_eq!(bracket.len(), 3);
        assert!(bracket.iter().all(|r| r.component == "Bracket-A"));

        assert!(ledger.list(Some("Ghost")).unwrap().is_empty());
        assert_eq!(ledger.list(None).unwrap().len(), 5);
    }

    #[test]
    fn test_csv_roundtrip_keeps_all_fields() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));

        let records = submission("Bracket-A", (2024, 3, 1)).into_records(vec![
            ("Q1?".to_string(), AuditResult::Yes, None),
            (
                "Q2, with a comma?".to_string(),
                AuditResult::No,
                Some("see NCR \"42\"".to_string()),
            ),
            ("Q3?".to_string(), AuditResult::NotApplicable, None),
        ]);
        ledger.append(&records).unwrap();

        let rows = ledger.load().unwrap();
        assert_eq!(rows, records);
    }

    #[test]
    fn test_patch_result_by_index() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));
        ledger
            .append(&submission("Bracket-A", (2024, 3, 1)).into_records(answers(3)))
            .unwrap();

        let patched = ledger.patch_result(1, AuditResult::No).unwrap();
        assert_eq!(patched.result, AuditResult::No);

        let rows = ledger.load().unwrap();
        assert_eq!(rows[0].result, AuditResult::Yes);
        assert_eq!(rows[1].result, AuditResult::No);
        assert_eq!(rows[2].result, AuditResult::Yes);
    }

    #[test]
    fn test_patch_out_of_range_leaves_file_untouched() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("audits.csv");
        let ledger = AuditLedger::new(&path);
        ledger
            .append(&submission("Bracket-A", (2024, 3, 1)).into_records(answers(2)))
            .unwrap();

        let before = std::fs::read(&path).unwrap();
        let err = ledger.patch_result(2, AuditResult::Yes).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::IndexOutOfRange { index: 2, count: 2 }
        ));
        let after = std::fs::read(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_patch_result_by_id() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));
        let records = submission("Bracket-A", (2024, 3, 1)).into_records(answers(3));
        ledger.append(&records).unwrap();

        let target = records[2].id.to_string();
        let patched = ledger
            .patch_result_by_id(&target, AuditResult::NotApplicable)
            .unwrap();
        assert_eq!(patched.id, records[2].id);

        let rows = ledger.load().unwrap();
        assert_eq!(rows[2].result, AuditResult::NotApplicable);
        assert_eq!(rows[0].result, AuditResult::Yes);
    }

    #[test]
    fn test_patch_unknown_id_fails() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));
        ledger
            .append(&submission("Bracket-A", (2024, 3, 1)).into_records(answers(1)))
            .unwrap();

        let err = ledger
            .patch_result_by_id("AUD-01HQ3K4N5M6P7R8S9T0VWXYZAB", AuditResult::Yes)
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownRecord(_)));
    }

    #[test]
    fn test_csv_wire_format() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("audits.csv");
        let ledger = AuditLedger::new(&path);

        let mut record = submission("Bracket-A", (2024, 3, 1))
            .into_records(vec![(
                "Is the gauge calibrated?".to_string(),
                AuditResult::Yes,
                None,
            )])
            .remove(0);
        record.id = "AUD-01HQ3K4N5M6P7R8S9T0VWXYZAB".parse().unwrap();
        ledger.append(&[record]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(raw.trim_end(), @r"
        id,auditor,date,user,component,question,result,comment,version
        AUD-01HQ3K4N5M6P7R8S9T0VWXYZAB,Jan Kowalski,2024-03-01,jan@example.com,Bracket-A,Is the gauge calibrated?,Tak,,1.0
        ");
    }

    #[test]
    fn test_resubmission_appends_duplicates() {
        let tmp = tempdir().unwrap();
        let ledger = AuditLedger::new(tmp.path().join("audits.csv"));

        let sitting = submission("Bracket-A", (2024, 3, 1));
        ledger
            .append(&sitting.clone().into_records(answers(2)))
            .unwrap();
        ledger.append(&sitting.into_records(answers(2))).unwrap();

        // No cross-submission uniqueness: same component/date lands twice
        assert_eq!(ledger.list(Some("Bracket-A")).unwrap().len(), 4);
    }
}
