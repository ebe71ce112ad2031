//! Credential allow-list entry
//!
//! Passwords are stored and compared in plaintext. users.json is a
//! checked-in demo allow-list, not an authentication system.

use serde::{Deserialize, Serialize};

/// One allow-list entry from users.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
    pub name: String,
}
