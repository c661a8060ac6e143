//! User record.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// A registered shop user.
///
/// This is a demo-scale record: the password is stored and echoed back in
/// plaintext, and usernames are not required to be unique. Registration only
/// ever appends; users are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential 1-based user ID.
    pub id: UserId,
    /// Login name. Not unique.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}
