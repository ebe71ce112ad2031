//! Credential allow-list over users.json
//!
//! Authentication is a plaintext equality check against a checked-in
//! JSON file. This is a demo-grade placeholder, deliberately left
//! unhardened; the file is only ever read.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::entities::user::User;

/// The read-only credential allow-list
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Load the allow-list; an absent file is an empty list (nobody can
    /// log in)
    pub fn open(path: &Path) -> Result<Self, AuthError> {
        let users = if path.exists() {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents).map_err(|e| AuthError::Malformed(e.to_string()))?
        } else {
            Vec::new()
        };
        Ok(Self { users })
    }

    /// All allow-list entries
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Check credentials by plaintext equality
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Errors that can occur on allow-list operations
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("malformed user list: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
