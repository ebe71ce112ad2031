//! Certificate registry entry - a held management-system certificate

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Certificate scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertType {
    #[serde(rename = "ISO 9001")]
    Iso9001,
    #[serde(rename = "AS9100")]
    As9100,
    #[serde(rename = "ISO 14001")]
    Iso14001,
}

impl std::fmt::Display for CertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertType::Iso9001 => write!(f, "ISO 9001"),
            CertType::As9100 => write!(f, "AS9100"),
            CertType::Iso14001 => write!(f, "ISO 14001"),
        }
    }
}

impl std::str::FromStr for CertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "iso9001" => Ok(CertType::Iso9001),
            "as9100" => Ok(CertType::As9100),
            "iso14001" => Ok(CertType::Iso14001),
            _ => Err(format!(
                "Invalid certificate type: {}. Use iso9001, as9100, or iso14001",
                s
            )),
        }
    }
}

/// Derived expiry annotation, computed at read time and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertStatus {
    #[serde(rename = "OK")]
    Ok,
    Expiring,
}

impl std::fmt::Display for CertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertStatus::Ok => write!(f, "OK"),
            CertStatus::Expiring => write!(f, "Expiring"),
        }
    }
}

/// A certificate registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Certificate holder/site name
    pub name: String,

    /// Certificate scheme
    #[serde(rename = "type")]
    pub cert_type: CertType,

    /// Issue date
    pub issued: NaiveDate,

    /// Expiry date
    pub expires: NaiveDate,
}

impl CertificateRecord {
    /// Expiry status against the given date; the 30-day window is
    /// inclusive of its boundary.
    pub fn status(&self, today: NaiveDate) -> CertStatus {
        if self.expires <= today + Duration::days(30) {
            CertStatus::Expiring
        } else {
            CertStatus::Ok
        }
    }
}
