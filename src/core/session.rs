//! Login session context
//!
//! The session is an explicit value persisted at `.qadesk/session.yaml`:
//! created by `qadesk login`, deleted by `qadesk logout`, and passed into
//! every handler that stamps a `user` field on new records. There is no
//! process-global current-user state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Desk;

/// The active login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Email of the logged-in user
    pub email: String,

    /// Display name of the logged-in user
    pub name: String,

    /// When the session was established
    pub started: DateTime<Utc>,
}

impl Session {
    /// Start a new session for the given user
    pub fn start(email: &str, name: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            started: Utc::now(),
        }
    }

    /// Load the active session, if any
    pub fn load(desk: &Desk) -> Result<Option<Session>, SessionError> {
        let path = desk.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let session = serde_yml::from_str(&contents)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        Ok(Some(session))
    }

    /// Load the active session, failing if nobody is logged in
    pub fn require(desk: &Desk) -> Result<Session, SessionError> {
        Self::load(desk)?.ok_or(SessionError::NotLoggedIn)
    }

    /// Persist this session as the active one
    pub fn save(&self, desk: &Desk) -> Result<(), SessionError> {
        let yaml = serde_yml::to_string(self).map_err(|e| SessionError::Malformed(e.to_string()))?;
        std::fs::write(desk.session_path(), yaml)?;
        Ok(())
    }

    /// End the active session; no-op when none exists
    pub fn clear(desk: &Desk) -> Result<(), SessionError> {
        let path = desk.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Errors that can occur in session handling
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in. Run 'qadesk login' first.")]
    NotLoggedIn,

    #[error("malformed session file: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_session_roundtrip() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        let session = Session::start("anna@example.com", "Anna Nowak");
        session.save(&desk).unwrap();

        let loaded = Session::load(&desk).unwrap().unwrap();
        assert_eq!(loaded.email, "anna@example.com");
        assert_eq!(loaded.name, "Anna Nowak");
    }

    #[test]
    fn test_session_require_fails_when_absent() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        let err = Session::require(&desk).unwrap_err();
        assert!(matches!(err, SessionError::NotLoggedIn));
    }

    #[test]
    fn test_session_clear() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        Session::start("anna@example.com", "Anna Nowak")
            .save(&desk)
            .unwrap();
        Session::clear(&desk).unwrap();
        assert!(Session::load(&desk).unwrap().is_none());

        // Clearing again is a no-op
        Session::clear(&desk).unwrap();
    }
}
