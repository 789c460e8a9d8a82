// Data models: Rust structs that map to database rows.
//
// Kept separate from the queries so the web and CLI layers can use them
// without depending on rusqlite directly.

use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Where the account came from ("local" for email + password).
    pub provider: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}
