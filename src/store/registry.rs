//! Ordered name catalogs persisted as JSON arrays
//!
//! Backs both components.json and questions.json. Names are unique within
//! a catalog and keep their insertion order; every mutation validates
//! first, then rewrites the whole file.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// An ordered catalog of unique names over a JSON array file
#[derive(Debug)]
pub struct NameRegistry {
    path: PathBuf,
    names: Vec<String>,
}

impl NameRegistry {
    /// Open the catalog at the given path; an absent file is an empty
    /// catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        let names = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)
                .map_err(|e| RegistryError::Malformed(e.to_string()))?
        } else {
            Vec::new()
        };
        Ok(Self { path, names })
    }

    /// Names in persisted order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the catalog holds the given name
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a name and persist. Fails on blank or duplicate names
    /// without touching the store.
    pub fn add(&mut self, name: &str) -> Result<(), RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::BlankName);
        }
        if self.contains(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.names.push(name.to_string());
        self.save()
    }

    /// Replace the first occurrence of `old` with `new` and persist.
    ///
    /// `new` is held to the same invariant as `add`: blank or colliding
    /// names fail before anything is written.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), RegistryError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(RegistryError::BlankName);
        }
        let idx = self
            .names
            .iter()
            .position(|n| n == old)
            .ok_or_else(|| RegistryError::NotFound(old.to_string()))?;
        if new != old && self.contains(new) {
            return Err(RegistryError::DuplicateName(new.to_string()));
        }
        self.names[idx] = new.to_string();
        self.save()
    }

    /// Remove the first occurrence of `name` and persist
    pub fn remove(&mut self, name: &str) -> Result<(), RegistryError> {
        let idx = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        self.names.remove(idx);
        self.save()
    }

    fn save(&self) -> Result<(), RegistryError> {
        let json = serde_json::to_string_pretty(&self.names)
            .map_err(|e| RegistryError::Malformed(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Errors that can occur on catalog operations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("'{0}' is already in the catalog")]
    DuplicateName(String),

    #[error("name must not be blank")]
    BlankName,

    #[error("'{0}' is not in the catalog")]
    NotFound(String),

    #[error("malformed catalog: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn registry(dir: &tempfile::TempDir) -> NameRegistry {
        NameRegistry::open(dir.path().join("components.json")).unwrap()
    }

    #[test]
    fn test_open_absent_store_is_empty() {
        let tmp = tempdir().unwrap();
        let reg = registry(&tmp);
        assert!(reg.names().is_empty());
    }

    #[test]
    fn test_add_persists_immediately() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();
        reg.add("Housing").unwrap();

        let reloaded = registry(&tmp);
        assert_eq!(reloaded.names(), ["Bracket-A", "Housing"]);
    }

    #[test]
    fn test_add_duplicate_fails_and_leaves_one_entry() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();

        let err = reg.add("Bracket-A").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
        assert_eq!(reg.names(), ["Bracket-A"]);
        assert_eq!(registry(&tmp).names(), ["Bracket-A"]);
    }

    #[test]
    fn test_add_blank_fails() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        assert!(matches!(reg.add(""), Err(RegistryError::BlankName)));
        assert!(matches!(reg.add("   "), Err(RegistryError::BlankName)));
    }

    #[test]
    fn test_rename_keeps_position() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();
        reg.add("Housing").unwrap();
        reg.add("Shaft").unwrap();

        reg.rename("Housing", "Housing-Mk2").unwrap();
        assert_eq!(reg.names(), ["Bracket-A", "Housing-Mk2", "Shaft"]);
        assert_eq!(registry(&tmp).names(), ["Bracket-A", "Housing-Mk2", "Shaft"]);
    }

    #[test]
    fn test_rename_to_existing_name_fails() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();
        reg.add("Housing").unwrap();

        let err = reg.rename("Housing", "Bracket-A").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
        assert_eq!(reg.names(), ["Bracket-A", "Housing"]);
    }

    #[test]
    fn test_rename_to_same_name_is_allowed() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();
        reg.rename("Bracket-A", "Bracket-A").unwrap();
        assert_eq!(reg.names(), ["Bracket-A"]);
    }

    #[test]
    fn test_rename_missing_fails() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        let err = reg.rename("Ghost", "Anything").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_remove() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);
        reg.add("Bracket-A").unwrap();
        reg.add("Housing").unwrap();

        reg.remove("Bracket-A").unwrap();
        assert_eq!(reg.names(), ["Housing"]);
        assert_eq!(registry(&tmp).names(), ["Housing"]);

        let err = reg.remove("Bracket-A").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_save_load_identity() {
        let tmp = tempdir().unwrap();
        let mut reg = registry(&tmp);

        for name in ["A", "B", "C"] {
            reg.add(name).unwrap();
            assert_eq!(registry(&tmp).names(), reg.names());
        }
        reg.rename("B", "B2").unwrap();
        assert_eq!(registry(&tmp).names(), reg.names());
        reg.remove("A").unwrap();
        assert_eq!(registry(&tmp).names(), reg.names());
    }
}
