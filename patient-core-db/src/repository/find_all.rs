use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading every entity of a given type
///
/// This trait provides a standard interface for fetching the full collection
/// from a data store. No ordering is guaranteed beyond whatever the store
/// returns.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindAll<Postgres, PatientModel> for PatientRepositoryImpl {
///     async fn find_all(&self) -> Result<Vec<PatientModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindAll<DB: Database, T: Identifiable>: Send + Sync {
    /// Load all entities from the store
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All entities, empty when the store holds none
    /// * `Err` - An error if the query could not be executed
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
