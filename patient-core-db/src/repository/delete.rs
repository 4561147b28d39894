use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting a single entity by its ID
///
/// Returns the number of rows removed so the caller can distinguish a delete
/// that hit a record from one that matched nothing.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait Delete<DB: Database>: Send + Sync {
    /// Delete the entity with the given identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of rows removed (0 when absent)
    /// * `Err` - An error if the statement could not be executed
    async fn delete(&self, id: Uuid) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
