//! Desk discovery and structure
//!
//! A desk is a directory holding the flat-file stores (components.json,
//! audits.csv, ...) plus a `.qadesk/` marker directory with configuration
//! and the active session.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::catalog;

/// Represents a QADesk working directory
#[derive(Debug)]
pub struct Desk {
    /// Root directory of the desk (parent of .qadesk/)
    root: PathBuf,
}

impl Desk {
    /// Find the desk root by walking up from the current directory
    pub fn discover() -> Result<Self, DeskError> {
        let current =
            std::env::current_dir().map_err(|e| DeskError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the desk root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, DeskError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| DeskError::IoError(e.to_string()))?;

        loop {
            let marker = current.join(".qadesk");
            if marker.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(DeskError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new desk at the given path
    pub fn init(path: &Path) -> Result<Self, DeskError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if root.join(".qadesk").exists() {
            return Err(DeskError::AlreadyExists(root));
        }

        Self::scaffold(&root)?;
        Ok(Self { root })
    }

    /// Force initialization even if .qadesk/ exists
    pub fn init_force(path: &Path) -> Result<Self, DeskError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::scaffold(&root)?;
        Ok(Self { root })
    }

    fn scaffold(root: &Path) -> Result<(), DeskError> {
        let marker = root.join(".qadesk");
        std::fs::create_dir_all(&marker).map_err(|e| DeskError::IoError(e.to_string()))?;

        let config_path = marker.join("config.yaml");
        std::fs::write(&config_path, Self::default_config())
            .map_err(|e| DeskError::IoError(e.to_string()))?;

        // Seed the question catalog and demo allow-list only when absent so
        // re-running init (or --force) never clobbers live data.
        let questions = root.join("questions.json");
        if !questions.exists() {
            let json = serde_json::to_string_pretty(&catalog::default_questions())
                .map_err(|e| DeskError::IoError(e.to_string()))?;
            std::fs::write(&questions, json).map_err(|e| DeskError::IoError(e.to_string()))?;
        }

        let users = root.join("users.json");
        if !users.exists() {
            std::fs::write(&users, Self::demo_users())
                .map_err(|e| DeskError::IoError(e.to_string()))?;
        }

        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# QADesk Configuration

# Default auditor name stamped on new records (falls back to git config)
# auditor: ""

# Default output format (auto, json, tsv, csv, md, id)
# default_format: auto
"#
    }

    fn demo_users() -> &'static str {
        // Plaintext allow-list, same scheme as the stores it fronts.
        // This is a demo credential file, not an authentication system.
        r#"[
  {
    "email": "demo@example.com",
    "password": "demo",
    "name": "Demo Auditor"
  }
]
"#
    }

    /// Get the desk root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .qadesk configuration directory
    pub fn qadesk_dir(&self) -> PathBuf {
        self.root.join(".qadesk")
    }

    /// Path of the component registry store
    pub fn components_path(&self) -> PathBuf {
        self.root.join("components.json")
    }

    /// Path of the audit question set store
    pub fn questions_path(&self) -> PathBuf {
        self.root.join("questions.json")
    }

    /// Path of the audit ledger store
    pub fn audits_path(&self) -> PathBuf {
        self.root.join("audits.csv")
    }

    /// Path of the certificate registry store
    pub fn certificates_path(&self) -> PathBuf {
        self.root.join("certificates.json")
    }

    /// Path of the supplier evaluation log store
    pub fn suppliers_path(&self) -> PathBuf {
        self.root.join("suppliers.csv")
    }

    /// Path of the credential allow-list
    pub fn users_path(&self) -> PathBuf {
        self.root.join("users.json")
    }

    /// Path of the active session file
    pub fn session_path(&self) -> PathBuf {
        self.qadesk_dir().join("session.yaml")
    }
}

/// Errors that can occur during desk operations
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("not a QADesk directory (searched from {searched_from:?}). Run 'qadesk init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("QADesk already initialized at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_desk_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        assert!(desk.qadesk_dir().exists());
        assert!(desk.qadesk_dir().join("config.yaml").exists());
        assert!(desk.questions_path().exists());
        assert!(desk.users_path().exists());
    }

    #[test]
    fn test_desk_init_seeds_question_catalog() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        let content = std::fs::read_to_string(desk.questions_path()).unwrap();
        let questions: Vec<String> = serde_json::from_str(&content).unwrap();
        assert!(!questions.is_empty());
    }

    #[test]
    fn test_desk_init_fails_if_exists() {
        let tmp = tempdir().unwrap();
        Desk::init(tmp.path()).unwrap();

        let err = Desk::init(tmp.path()).unwrap_err();
        assert!(matches!(err, DeskError::AlreadyExists(_)));
    }

    #[test]
    fn test_desk_init_force_keeps_existing_stores() {
        let tmp = tempdir().unwrap();
        let desk = Desk::init(tmp.path()).unwrap();

        std::fs::write(desk.questions_path(), r#"["Only question?"]"#).unwrap();
        Desk::init_force(tmp.path()).unwrap();

        let content = std::fs::read_to_string(desk.questions_path()).unwrap();
        assert_eq!(content, r#"["Only question?"]"#);
    }

    #[test]
    fn test_desk_discover_finds_marker() {
        let tmp = tempdir().unwrap();
        Desk::init(tmp.path()).unwrap();

        // Create a subdirectory
        let subdir = tmp.path().join("some/nested/dir");
        std::fs::create_dir_all(&subdir).unwrap();

        // Discover from subdirectory should find root
        let desk = Desk::discover_from(&subdir).unwrap();
        assert_eq!(
            desk.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_desk_discover_fails_without_marker() {
        let tmp = tempdir().unwrap();
        let err = Desk::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, DeskError::NotFound { .. }));
    }
}
