use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::patient_repository::PatientRepositoryImpl;

/// Factory over a shared connection pool handing out repository instances
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn patient_repository(&self) -> Arc<PatientRepositoryImpl> {
        Arc::new(PatientRepositoryImpl::new(self.pool.clone()))
    }
}
