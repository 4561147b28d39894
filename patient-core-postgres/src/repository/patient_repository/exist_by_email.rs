use async_trait::async_trait;
use patient_core_db::repository::exist_by_email::ExistByEmail;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::PatientRepositoryImpl;

#[async_trait]
impl ExistByEmail<Postgres> for PatientRepositoryImpl {
    async fn exist_by_email(&self, email: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM patient WHERE email = $1)")
            .bind(email)
            .fetch_one(&*self.pool)
            .await?;

        Ok(row.get::<bool, _>(0))
    }
}
