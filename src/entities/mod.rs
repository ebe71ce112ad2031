//! Entity type definitions
//!
//! QADesk persists the following record types:
//!
//! **Audit desk:**
//! - [`AuditRecord`] - one answered question from an audit sitting
//! - [`SupplierEvaluation`] - one supplier audit row
//! - [`CertificateRecord`] - a held certificate with derived expiry status
//!
//! **Uploads & access:**
//! - [`CmmMeasurement`] - a parsed CMM inspection row
//! - [`User`] - a plaintext allow-list entry

pub mod audit;
pub mod certificate;
pub mod measurement;
pub mod supplier;
pub mod user;

pub use audit::{AuditRecord, AuditResult, AuditSubmission};
pub use certificate::{CertStatus, CertType, CertificateRecord};
pub use measurement::CmmMeasurement;
pub use supplier::{DeliveryRating, DocumentationRating, QualityRating, SupplierEvaluation};
pub use user::User;
