use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for checking whether any entity holds an email
///
/// Used as the uniqueness precondition before inserting a new record.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait ExistByEmail<DB: Database>: Send + Sync {
    /// Check whether any record holds the given email (exact match)
    ///
    /// # Arguments
    /// * `email` - The email value to look for
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether at least one record holds the email
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_email(
        &self,
        email: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
