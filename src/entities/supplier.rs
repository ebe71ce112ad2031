//! Supplier evaluation log entry

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::identity::RecordId;

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_lowercase()
}

/// Part quality rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityRating {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityRating::High => write!(f, "High"),
            QualityRating::Medium => write!(f, "Medium"),
            QualityRating::Low => write!(f, "Low"),
        }
    }
}

impl std::str::FromStr for QualityRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "high" => Ok(QualityRating::High),
            "medium" => Ok(QualityRating::Medium),
            "low" => Ok(QualityRating::Low),
            _ => Err(format!("Invalid quality rating: {}. Use high, medium, or low", s)),
        }
    }
}

/// Delivery performance rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryRating {
    OnTime,
    SometimesLate,
    FrequentlyLate,
}

impl std::fmt::Display for DeliveryRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryRating::OnTime => write!(f, "OnTime"),
            DeliveryRating::SometimesLate => write!(f, "SometimesLate"),
            DeliveryRating::FrequentlyLate => write!(f, "FrequentlyLate"),
        }
    }
}

impl std::str::FromStr for DeliveryRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ontime" => Ok(DeliveryRating::OnTime),
            "sometimeslate" => Ok(DeliveryRating::SometimesLate),
            "frequentlylate" => Ok(DeliveryRating::FrequentlyLate),
            _ => Err(format!(
                "Invalid delivery rating: {}. Use on-time, sometimes-late, or frequently-late",
                s
            )),
        }
    }
}

/// Documentation completeness rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentationRating {
    Full,
    Gaps,
    NonCompliant,
}

impl std::fmt::Display for DocumentationRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentationRating::Full => write!(f, "Full"),
            DocumentationRating::Gaps => write!(f, "Gaps"),
            DocumentationRating::NonCompliant => write!(f, "NonCompliant"),
        }
    }
}

impl std::str::FromStr for DocumentationRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "full" => Ok(DocumentationRating::Full),
            "gaps" => Ok(DocumentationRating::Gaps),
            "noncompliant" => Ok(DocumentationRating::NonCompliant),
            _ => Err(format!(
                "Invalid documentation rating: {}. Use full, gaps, or non-compliant",
                s
            )),
        }
    }
}

/// One supplier audit row
///
/// Column names are the Polish headers of the suppliers.csv wire format;
/// field order matches the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierEvaluation {
    /// Stable record identifier
    pub id: RecordId,

    /// Evaluated supplier name
    #[serde(rename = "Dostawca")]
    pub supplier: String,

    /// Auditor who ran the evaluation
    #[serde(rename = "Audytor")]
    pub evaluated_by: String,

    /// Evaluation date
    #[serde(rename = "Data")]
    pub date: NaiveDate,

    /// Part quality rating
    #[serde(rename = "Jakość")]
    pub quality: QualityRating,

    /// Delivery performance rating
    #[serde(rename = "Dostawy")]
    pub delivery: DeliveryRating,

    /// Documentation completeness rating
    #[serde(rename = "Dokumentacja")]
    pub documentation: DocumentationRating,

    /// Optional free-text comments
    #[serde(rename = "Komentarze")]
    pub comments: Option<String>,
}

impl SupplierEvaluation {
    /// Create a new evaluation row with a fresh record ID
    pub fn new(
        supplier: String,
        evaluated_by: String,
        date: NaiveDate,
        quality: QualityRating,
        delivery: DeliveryRating,
        documentation: DocumentationRating,
        comments: Option<String>,
    ) -> Self {
        Self {
            id: RecordId::new(crate::core::RecordPrefix::Sev),
            supplier,
            evaluated_by,
            date,
            quality,
            delivery,
            documentation,
            comments,
        }
    }
}
