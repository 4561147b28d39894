use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for persisting a single entity
///
/// This trait provides a standard interface for writing an entity to a data
/// store. An entity whose id is not yet present is inserted; an entity whose
/// id already exists is overwritten in place. Returns the persisted entity.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Save<Postgres, PatientModel> for PatientRepositoryImpl {
///     async fn save(&self, item: PatientModel) -> Result<PatientModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Save<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert or overwrite a single entity, keyed on its id
    ///
    /// # Arguments
    /// * `item` - The entity to persist
    ///
    /// # Returns
    /// * `Ok(T)` - The persisted entity
    /// * `Err` - An error if the write could not be executed
    async fn save(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
