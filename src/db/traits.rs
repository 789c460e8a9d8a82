// Database trait: backend-agnostic async interface for all DB operations.
//
// Implementor: SqliteDatabase (wraps rusqlite). Methods are async so the
// axum handlers can hold `Arc<dyn Database>` without caring how the backend
// synchronizes access.

use anyhow::Result;
use async_trait::async_trait;

use super::models::User;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Users ---

    /// Insert a new account. Returns `None` if the email is already registered.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<Option<i64>>;

    /// Look up an account by exact email.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Look up an account by id.
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Total number of registered accounts.
    async fn user_count(&self) -> Result<i64>;

    /// Stamp the account's last successful login.
    async fn record_login(&self, id: i64) -> Result<()>;
}
