use async_trait::async_trait;
use patient_core_db::models::patient::patient::PatientModel;
use patient_core_db::repository::save::Save;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::PatientRepositoryImpl;

#[async_trait]
impl Save<Postgres, PatientModel> for PatientRepositoryImpl {
    async fn save(&self, item: PatientModel) -> Result<PatientModel, Box<dyn Error + Send + Sync>> {
        let query = r#"
            INSERT INTO patient (id, name, address, email, birth_date, registered_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                email = EXCLUDED.email,
                birth_date = EXCLUDED.birth_date,
                registered_date = EXCLUDED.registered_date
        "#;

        sqlx::query(query)
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.address.as_str())
            .bind(item.email.as_str())
            .bind(item.birth_date)
            .bind(item.registered_date)
            .execute(&*self.pool)
            .await?;

        Ok(item)
    }
}
