use async_trait::async_trait;
use patient_core_db::models::patient::patient::PatientModel;
use patient_core_db::repository::find_all::FindAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::PatientRepositoryImpl;
use crate::utils::TryFromRow;

#[async_trait]
impl FindAll<Postgres, PatientModel> for PatientRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<PatientModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT * FROM patient")
            .fetch_all(&*self.pool)
            .await?;

        let mut patients = Vec::with_capacity(rows.len());
        for row in rows {
            patients.push(PatientModel::try_from_row(&row)?);
        }
        Ok(patients)
    }
}
