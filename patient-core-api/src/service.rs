use std::marker::PhantomData;
use std::sync::Arc;

use patient_core_db::models::patient::patient::PatientModel;
use patient_core_db::repository::patient_repository::PatientRepository;
use sqlx::Database;
use tracing::{info, warn};
use uuid::Uuid;

use crate::billing::BillingNotifier;
use crate::dto::{PatientRequest, PatientResponse};
use crate::error::{PatientServiceError, PatientServiceResult};
use crate::mapper::PatientMapper;

/// Orchestrates the record store, the transfer mapper and the billing
/// notifier into the four patient operations.
///
/// Each operation is a single synchronous step over the store; the only
/// side channel is the post-save billing notification on create, which is
/// best-effort and never alters the returned result.
pub struct PatientService<DB: Database, R: PatientRepository<DB>> {
    repository: Arc<R>,
    billing: Arc<dyn BillingNotifier>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB: Database, R: PatientRepository<DB>> PatientService<DB, R> {
    pub fn new(repository: Arc<R>, billing: Arc<dyn BillingNotifier>) -> Self {
        Self {
            repository,
            billing,
            _db: PhantomData,
        }
    }

    /// List every patient in store iteration order
    pub async fn get_patients(&self) -> PatientServiceResult<Vec<PatientResponse>> {
        let patients = self
            .repository
            .find_all()
            .await
            .map_err(PatientServiceError::Repository)?;

        Ok(patients.iter().map(PatientMapper::to_response).collect())
    }

    /// Create a new patient record and notify the billing system
    ///
    /// Rejects the request before any write when another record already holds
    /// the email. The billing call is issued after the save and its outcome is
    /// not folded back into the response.
    pub async fn create_patient(
        &self,
        request: PatientRequest,
    ) -> PatientServiceResult<PatientResponse> {
        if self
            .repository
            .exist_by_email(&request.email)
            .await
            .map_err(PatientServiceError::Repository)?
        {
            return Err(PatientServiceError::EmailAlreadyExists(request.email));
        }

        let patient = PatientMapper::to_entity(&request, Uuid::new_v4())?;
        let saved = self
            .repository
            .save(patient)
            .await
            .map_err(PatientServiceError::Repository)?;

        info!(patient_id = %saved.id, "patient saved, notifying billing service");
        if let Err(e) = self
            .billing
            .create_billing_account(saved.id, saved.name.as_str(), saved.email.as_str())
            .await
        {
            warn!(patient_id = %saved.id, error = %e, "billing notification failed");
        }

        Ok(PatientMapper::to_response(&saved))
    }

    /// Overwrite an existing patient record
    ///
    /// Name, address, email and birth date are always replaced; the
    /// registered date only when the request carries one. The email check
    /// excludes the record being updated, so keeping the same email succeeds.
    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        request: PatientRequest,
    ) -> PatientServiceResult<PatientResponse> {
        let mut patient: PatientModel = self
            .repository
            .find_by_id(patient_id)
            .await
            .map_err(PatientServiceError::Repository)?
            .ok_or(PatientServiceError::PatientNotFound(patient_id))?;

        if self
            .repository
            .exist_by_email_excluding_id(&request.email, patient_id)
            .await
            .map_err(PatientServiceError::Repository)?
        {
            return Err(PatientServiceError::EmailAlreadyExists(request.email));
        }

        PatientMapper::apply_request(&mut patient, &request)?;
        let saved = self
            .repository
            .save(patient)
            .await
            .map_err(PatientServiceError::Repository)?;

        Ok(PatientMapper::to_response(&saved))
    }

    /// Remove a patient record permanently
    pub async fn delete_patient(&self, patient_id: Uuid) -> PatientServiceResult<()> {
        let removed = self
            .repository
            .delete(patient_id)
            .await
            .map_err(PatientServiceError::Repository)?;

        if removed == 0 {
            return Err(PatientServiceError::PatientNotFound(patient_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BillingError;
    use async_trait::async_trait;
    use patient_core_db::repository::delete::Delete;
    use patient_core_db::repository::exist_by_email::ExistByEmail;
    use patient_core_db::repository::exist_by_email_excluding_id::ExistByEmailExcludingId;
    use patient_core_db::repository::find_all::FindAll;
    use patient_core_db::repository::find_by_id::FindById;
    use patient_core_db::repository::save::Save;
    use sqlx::Postgres;
    use std::sync::Mutex;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Default)]
    struct InMemoryPatientRepository {
        rows: Mutex<Vec<PatientModel>>,
    }

    impl InMemoryPatientRepository {
        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FindAll<Postgres, PatientModel> for InMemoryPatientRepository {
        async fn find_all(&self) -> Result<Vec<PatientModel>, BoxError> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl FindById<Postgres, PatientModel> for InMemoryPatientRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<PatientModel>, BoxError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }
    }

    #[async_trait]
    impl ExistByEmail<Postgres> for InMemoryPatientRepository {
        async fn exist_by_email(&self, email: &str) -> Result<bool, BoxError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.email.as_str() == email))
        }
    }

    #[async_trait]
    impl ExistByEmailExcludingId<Postgres> for InMemoryPatientRepository {
        async fn exist_by_email_excluding_id(
            &self,
            email: &str,
            id: Uuid,
        ) -> Result<bool, BoxError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.email.as_str() == email && p.id != id))
        }
    }

    #[async_trait]
    impl Save<Postgres, PatientModel> for InMemoryPatientRepository {
        async fn save(&self, item: PatientModel) -> Result<PatientModel, BoxError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|p| p.id == item.id) {
                Some(existing) => *existing = item.clone(),
                None => rows.push(item.clone()),
            }
            Ok(item)
        }
    }

    #[async_trait]
    impl Delete<Postgres> for InMemoryPatientRepository {
        async fn delete(&self, id: Uuid) -> Result<usize, BoxError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            Ok(before - rows.len())
        }
    }

    #[derive(Default)]
    struct RecordingBillingNotifier {
        calls: Mutex<Vec<(Uuid, String, String)>>,
        fail: bool,
    }

    impl RecordingBillingNotifier {
        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<(Uuid, String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BillingNotifier for RecordingBillingNotifier {
        async fn create_billing_account(
            &self,
            patient_id: Uuid,
            name: &str,
            email: &str,
        ) -> Result<(), BillingError> {
            self.calls
                .lock()
                .unwrap()
                .push((patient_id, name.to_string(), email.to_string()));
            if self.fail {
                return Err(BillingError::Status(503));
            }
            Ok(())
        }
    }

    fn service_with(
        repo: Arc<InMemoryPatientRepository>,
        billing: Arc<RecordingBillingNotifier>,
    ) -> PatientService<Postgres, InMemoryPatientRepository> {
        PatientService::new(repo, billing)
    }

    fn request(name: &str, email: &str) -> PatientRequest {
        PatientRequest {
            name: name.to_string(),
            address: "1 Rd".to_string(),
            email: email.to_string(),
            date_of_birth: "1990-01-01".to_string(),
            registered_date: Some("2024-06-01".to_string()),
        }
    }

    #[tokio::test]
    async fn test_list_on_empty_store_is_empty() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        let patients = service.get_patients().await.unwrap();
        assert!(patients.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_persisted_record_and_notifies_once() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let billing = Arc::new(RecordingBillingNotifier::default());
        let service = service_with(repo.clone(), billing.clone());

        let response = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();

        assert_eq!(response.name, "Ana");
        assert_eq!(response.email, "ana@x.com");
        assert_eq!(repo.row_count(), 1);

        let stored = repo.find_by_id(response.id).await.unwrap().unwrap();
        assert_eq!(stored.id, response.id);

        let calls = billing.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (response.id, "Ana".to_string(), "ana@x.com".to_string()));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_fails_without_write() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let billing = Arc::new(RecordingBillingNotifier::default());
        let service = service_with(repo.clone(), billing.clone());

        service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        let err = service
            .create_patient(request("Bob", "ana@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, PatientServiceError::EmailAlreadyExists(ref e) if e == "ana@x.com"));
        assert_eq!(repo.row_count(), 1);
        assert_eq!(billing.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_create_survives_billing_failure() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let billing = Arc::new(RecordingBillingNotifier::failing());
        let service = service_with(repo.clone(), billing.clone());

        let response = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();

        assert_eq!(repo.row_count(), 1);
        assert_eq!(billing.calls().len(), 1);
        assert!(repo.find_by_id(response.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails_not_found() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        let missing = Uuid::new_v4();
        let err = service
            .update_patient(missing, request("Ana", "ana@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, PatientServiceError::PatientNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn test_update_to_other_patients_email_fails() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        let bob = service.create_patient(request("Bob", "bob@x.com")).await.unwrap();

        let err = service
            .update_patient(bob.id, request("Bob", "ana@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, PatientServiceError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_keeping_own_email_succeeds() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        let ana = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();

        let updated = service
            .update_patient(ana.id, request("Ana Maria", "ana@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "ana@x.com");
    }

    #[tokio::test]
    async fn test_update_without_registered_date_keeps_stored_value() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        let ana = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        assert_eq!(ana.registered_date, "2024-06-01");

        let mut update = request("Ana", "ana@x.com");
        update.registered_date = None;
        let updated = service.update_patient(ana.id, update).await.unwrap();
        assert_eq!(updated.registered_date, "2024-06-01");

        let mut overwrite = request("Ana", "ana@x.com");
        overwrite.registered_date = Some("2025-02-03".to_string());
        let updated = service.update_patient(ana.id, overwrite).await.unwrap();
        assert_eq!(updated.registered_date, "2025-02-03");
    }

    #[tokio::test]
    async fn test_update_never_notifies_billing() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let billing = Arc::new(RecordingBillingNotifier::default());
        let service = service_with(repo, billing.clone());

        let ana = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        service
            .update_patient(ana.id, request("Ana Maria", "ana@x.com"))
            .await
            .unwrap();

        assert_eq!(billing.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails_not_found() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        let missing = Uuid::new_v4();
        let err = service.delete_patient(missing).await.unwrap_err();
        assert!(matches!(err, PatientServiceError::PatientNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn test_delete_removes_record_permanently() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo.clone(), Arc::new(RecordingBillingNotifier::default()));

        let ana = service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        service.delete_patient(ana.id).await.unwrap();

        assert_eq!(repo.row_count(), 0);
        let err = service
            .update_patient(ana.id, request("Ana", "ana@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, PatientServiceError::PatientNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_reflects_creates() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let service = service_with(repo, Arc::new(RecordingBillingNotifier::default()));

        service.create_patient(request("Ana", "ana@x.com")).await.unwrap();
        service.create_patient(request("Bob", "bob@x.com")).await.unwrap();

        let patients = service.get_patients().await.unwrap();
        assert_eq!(patients.len(), 2);
        let emails: Vec<&str> = patients.iter().map(|p| p.email.as_str()).collect();
        assert!(emails.contains(&"ana@x.com"));
        assert!(emails.contains(&"bob@x.com"));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_date_without_write() {
        let repo = Arc::new(InMemoryPatientRepository::default());
        let billing = Arc::new(RecordingBillingNotifier::default());
        let service = service_with(repo.clone(), billing.clone());

        let mut bad = request("Ana", "ana@x.com");
        bad.date_of_birth = "not-a-date".to_string();

        let err = service.create_patient(bad).await.unwrap_err();
        assert!(matches!(err, PatientServiceError::InvalidField { .. }));
        assert_eq!(repo.row_count(), 0);
        assert!(billing.calls().is_empty());
    }
}
