use patient_core_db::models::patient::patient::PatientModel;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{get_heapless_string, TryFromRow};

/// Postgres-backed implementation of the patient record store
///
/// Stateless beyond the shared connection pool; every operation runs as a
/// single statement on a pooled connection.
pub struct PatientRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl PatientRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PatientModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PatientModel {
            id: row.get("id"),
            name: get_heapless_string(row, "name")?,
            address: get_heapless_string(row, "address")?,
            email: get_heapless_string(row, "email")?,
            birth_date: row.get("birth_date"),
            registered_date: row.get("registered_date"),
        })
    }
}
