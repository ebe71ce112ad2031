//! Certificate registry over certificates.json
//!
//! The expiry status is derived at read time against a caller-supplied
//! date, so listing is deterministic under test.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use chrono::NaiveDate;

use crate::entities::certificate::{CertStatus, CertificateRecord};

/// The certificate registry
#[derive(Debug)]
pub struct CertificateBook {
    path: PathBuf,
}

impl CertificateBook {
    /// Registry over the given JSON file; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every record in stored order; an absent store is empty
    pub fn load(&self) -> Result<Vec<CertificateRecord>, CertificateError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| CertificateError::Malformed(e.to_string()))
    }

    /// Append a record and persist.
    ///
    /// No validation relates `expires` to `issued`; a certificate that
    /// expires before its issue date is stored as given.
    pub fn add(&self, record: CertificateRecord) -> Result<(), CertificateError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Records in stored order, each annotated with its expiry status
    /// against `today`
    pub fn list(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<(CertificateRecord, CertStatus)>, CertificateError> {
        Ok(self
            .load()?
            .into_iter()
            .map(|record| {
                let status = record.status(today);
                (record, status)
            })
            .collect())
    }

    fn save(&self, records: &[CertificateRecord]) -> Result<(), CertificateError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| CertificateError::Malformed(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Errors that can occur on certificate registry operations
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("malformed certificate registry: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::certificate::CertType;
    use chrono::Duration;
    use tempfile::tempdir;

    fn cert(name: &str, expires: NaiveDate) -> CertificateRecord {
        CertificateRecord {
            name: name.to_string(),
            cert_type: CertType::Iso9001,
            issued: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            expires,
        }
    }

    #[test]
    fn test_absent_store_is_empty() {
        let tmp = tempdir().unwrap();
        let book = CertificateBook::new(tmp.path().join("certificates.json"));
        assert!(book.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_list_statuses() {
        let tmp = tempdir().unwrap();
        let book = CertificateBook::new(tmp.path().join("certificates.json"));
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        book.add(cert("Soon", today + Duration::days(10))).unwrap();
        book.add(cert("Later", today + Duration::days(365))).unwrap();
        book.add(cert("Boundary", today + Duration::days(30))).unwrap();

        let listed = book.list(today).unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].1, CertStatus::Expiring);
        assert_eq!(listed[1].1, CertStatus::Ok);
        assert_eq!(listed[2].1, CertStatus::Expiring);
    }

    #[test]
    fn test_status_never_persisted() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("certificates.json");
        let book = CertificateBook::new(&path);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        book.add(cert("Soon", today + Duration::days(5))).unwrap();
        book.list(today).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("Expiring"));
        assert!(!raw.contains("status"));
    }

    #[test]
    fn test_expiry_before_issue_is_accepted() {
        let tmp = tempdir().unwrap();
        let book = CertificateBook::new(tmp.path().join("certificates.json"));

        // No expires > issued validation
        book.add(cert("Odd", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()))
            .unwrap();
        assert_eq!(book.load().unwrap().len(), 1);
    }
}
