use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PatientServiceError {
    #[error("A patient with this email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Patient not found with ID: {0}")]
    PatientNotFound(Uuid),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Repository error: {0}")]
    Repository(Box<dyn std::error::Error + Send + Sync>),
}

pub type PatientServiceResult<T> = Result<T, PatientServiceError>;

/// Failure of the outbound billing call. Never folded back into a
/// `PatientServiceError`; the service treats the notification as best-effort.
#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Billing transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Billing service returned status {0}")]
    Status(u16),
}
