//! Flat-file stores
//!
//! Every store follows the same model: load the whole file into memory,
//! mutate, rewrite the whole file. There is no locking and no partial
//! append - concurrent writers race at file-rewrite granularity and the
//! last writer wins.

pub mod certificates;
pub mod ledger;
pub mod registry;
pub mod suppliers;
pub mod users;

pub use certificates::{CertificateBook, CertificateError};
pub use ledger::{AuditLedger, LedgerError};
pub use registry::{NameRegistry, RegistryError};
pub use suppliers::{SupplierLog, SupplierLogError};
pub use users::{AuthError, UserDirectory};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read a whole CSV table; an absent file is an empty table.
pub(crate) fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, csv::Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut rdr = csv::Reader::from_path(path)?;
    rdr.deserialize().collect()
}

/// Rewrite a whole CSV table, header first.
pub(crate) fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
