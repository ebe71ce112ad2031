//! Supplier evaluation log over suppliers.csv
//!
//! Same contract shape as the audit ledger - append and list only, no
//! edit path.

use std::path::PathBuf;
use thiserror::Error;

use crate::entities::supplier::SupplierEvaluation;
use crate::store::{read_table, write_table};

/// The supplier evaluation log
#[derive(Debug)]
pub struct SupplierLog {
    path: PathBuf,
}

impl SupplierLog {
    /// Log over the given CSV file; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every row in stored order; an absent store is an empty log
    pub fn load(&self) -> Result<Vec<SupplierEvaluation>, SupplierLogError> {
        Ok(read_table(&self.path)?)
    }

    /// Append rows, preserving stored and submission order
    pub fn append(&self, evaluations: &[SupplierEvaluation]) -> Result<(), SupplierLogError> {
        let mut rows = self.load()?;
        rows.extend_from_slice(evaluations);
        write_table(&self.path, &rows)?;
        Ok(())
    }

    /// All rows, or only rows for the given supplier, in stored order
    pub fn list(&self, supplier: Option<&str>) -> Result<Vec<SupplierEvaluation>, SupplierLogError> {
        let rows = self.load()?;
        Ok(match supplier {
            Some(s) => rows.into_iter().filter(|r| r.supplier == s).collect(),
            None => rows,
        })
    }
}

/// Errors that can occur on supplier log operations
#[derive(Debug, Error)]
pub enum SupplierLogError {
    #[error("malformed supplier log: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
