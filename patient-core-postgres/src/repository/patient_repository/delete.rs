use async_trait::async_trait;
use patient_core_db::repository::delete::Delete;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PatientRepositoryImpl;

#[async_trait]
impl Delete<Postgres> for PatientRepositoryImpl {
    async fn delete(&self, id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM patient WHERE id = $1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}
