//! Audit ledger entry - one answered question from an audit sitting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::identity::{RecordId, RecordPrefix};

/// Answer to a single audit question
///
/// Stored on the CSV wire as the Polish tokens `Tak`/`Nie`/`N/D` that
/// existing audits.csv files carry; parsing accepts English spellings too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditResult {
    #[serde(rename = "Tak")]
    Yes,
    #[serde(rename = "Nie")]
    No,
    #[serde(rename = "N/D")]
    NotApplicable,
}

impl std::fmt::Display for AuditResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditResult::Yes => write!(f, "Tak"),
            AuditResult::No => write!(f, "Nie"),
            AuditResult::NotApplicable => write!(f, "N/D"),
        }
    }
}

impl std::str::FromStr for AuditResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tak" | "yes" | "y" => Ok(AuditResult::Yes),
            "nie" | "no" | "n" => Ok(AuditResult::No),
            "n/d" | "nd" | "n/a" | "na" | "not_applicable" => Ok(AuditResult::NotApplicable),
            _ => Err(format!(
                "Invalid audit result: {}. Use tak/yes, nie/no, or n/d",
                s
            )),
        }
    }
}

/// A single row of the audit ledger
///
/// Field order matches the audits.csv column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Stable record identifier
    pub id: RecordId,

    /// Auditor who ran the sitting
    pub auditor: String,

    /// Audit date
    pub date: NaiveDate,

    /// Email of the logged-in user who submitted the sitting
    pub user: String,

    /// Audited component name (free text, no referential integrity)
    pub component: String,

    /// Question text as asked
    pub question: String,

    /// Recorded answer
    pub result: AuditResult,

    /// Optional free-text comment
    pub comment: Option<String>,

    /// Optional document version the audit was run against
    pub version: Option<String>,
}

/// Header fields shared by every record of one audit sitting
#[derive(Debug, Clone)]
pub struct AuditSubmission {
    pub component: String,
    pub auditor: String,
    pub date: NaiveDate,
    pub user: String,
    pub version: Option<String>,
}

impl AuditSubmission {
    /// Expand the sitting into ledger rows, one per answered question.
    ///
    /// All rows share component/auditor/date/user/version; each gets a
    /// fresh record ID.
    pub fn into_records(
        self,
        answers: impl IntoIterator<Item = (String, AuditResult, Option<String>)>,
    ) -> Vec<AuditRecord> {
        answers
            .into_iter()
            .map(|(question, result, comment)| AuditRecord {
                id: RecordId::new(RecordPrefix::Aud),
                auditor: self.auditor.clone(),
                date: self.date,
                user: self.user.clone(),
                component: self.component.clone(),
                question,
                result,
                comment,
                version: self.version.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> AuditSubmission {
        AuditSubmission {
            component: "Bracket-A".to_string(),
            auditor: "Jan Kowalski".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            user: "jan@example.com".to_string(),
            version: Some("1.2".to_string()),
        }
    }

    #[test]
    fn test_submission_shares_header_fields() {
        let records = submission().into_records(vec![
            ("Q1?".to_string(), AuditResult::Yes, None),
            ("Q2?".to_string(), AuditResult::No, Some("scrap bin unlabeled".to_string())),
        ]);

        assert_eq!(records.len(), 2);
        for rec in &records {
            assert_eq!(rec.component, "Bracket-A");
            assert_eq!(rec.auditor, "Jan Kowalski");
            assert_eq!(rec.user, "jan@example.com");
            assert_eq!(rec.version.as_deref(), Some("1.2"));
            assert!(rec.id.to_string().starts_with("AUD-"));
        }
        assert_ne!(records[0].id, records[1].id);
        assert_eq!(records[1].comment.as_deref(), Some("scrap bin unlabeled"));
    }

    #[test]
    fn test_result_from_str() {
        assert_eq!("Tak".parse::<AuditResult>().unwrap(), AuditResult::Yes);
        assert_eq!("yes".parse::<AuditResult>().unwrap(), AuditResult::Yes);
        assert_eq!("NIE".parse::<AuditResult>().unwrap(), AuditResult::No);
        assert_eq!("n/d".parse::<AuditResult>().unwrap(), AuditResult::NotApplicable);
        assert_eq!("n/a".parse::<AuditResult>().unwrap(), AuditResult::NotApplicable);
        assert!("maybe".parse::<AuditResult>().is_err());
    }

    #[test]
    fn test_result_wire_tokens() {
        assert_eq!(serde_json::to_string(&AuditResult::Yes).unwrap(), "\"Tak\"");
        assert_eq!(serde_json::to_string(&AuditResult::No).unwrap(), "\"Nie\"");
        assert_eq!(
            serde_json::to_string(&AuditResult::NotApplicable).unwrap(),
            "\"N/D\""
        );
    }

    #[test]
    fn test_record_roundtrip() {
        let rec = submission()
            .into_records(vec![("Q1?".to_string(), AuditResult::Yes, None)])
            .remove(0);

        let json = serde_json::to_string(&rec).unwrap();
        let parsed: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, parsed);
    }
}
