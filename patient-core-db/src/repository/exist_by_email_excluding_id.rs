use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for checking whether a *different* entity holds an email
///
/// Used as the uniqueness precondition before updating a record: the record
/// being updated may keep its own email, so its id is excluded from the match.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait ExistByEmailExcludingId<DB: Database>: Send + Sync {
    /// Check whether any record other than `id` holds the given email
    ///
    /// # Arguments
    /// * `email` - The email value to look for
    /// * `id` - The UUID whose own record is excluded from the match
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether at least one other record holds the email
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_email_excluding_id(
        &self,
        email: &str,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
