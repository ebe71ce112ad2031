//! QADesk: an ISO 9001 audit desk as plain text
//!
//! Component catalogs, audit ledgers, supplier evaluations, certificates
//! and emission accounting, all kept as human-inspectable flat files.

pub mod calc;
pub mod cli;
pub mod core;
pub mod entities;
pub mod import;
pub mod store;
