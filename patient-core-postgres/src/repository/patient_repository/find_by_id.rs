use async_trait::async_trait;
use patient_core_db::models::patient::patient::PatientModel;
use patient_core_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PatientRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl FindById<Postgres, PatientModel> for PatientRepositoryImpl {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PatientModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT * FROM patient WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(PatientModel::try_from_row).transpose()
    }
}
