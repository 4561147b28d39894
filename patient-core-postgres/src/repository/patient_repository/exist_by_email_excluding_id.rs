use async_trait::async_trait;
use patient_core_db::repository::exist_by_email_excluding_id::ExistByEmailExcludingId;
use sqlx::{Postgres, Row};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PatientRepositoryImpl;

#[async_trait]
impl ExistByEmailExcludingId<Postgres> for PatientRepositoryImpl {
    async fn exist_by_email_excluding_id(
        &self,
        email: &str,
        id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let row =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM patient WHERE email = $1 AND id <> $2)")
                .bind(email)
                .bind(id)
                .fetch_one(&*self.pool)
                .await?;

        Ok(row.get::<bool, _>(0))
    }
}
