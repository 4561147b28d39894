use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use crate::error::BillingError;

/// Outbound collaborator informed of new patient accounts
///
/// Called once per successful create, after the local write. The service
/// treats the call as best-effort: failures are logged and never surfaced to
/// the caller or rolled back into the store.
#[async_trait]
pub trait BillingNotifier: Send + Sync {
    /// Inform the billing system that an account exists for the new patient
    async fn create_billing_account(
        &self,
        patient_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<(), BillingError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBillingAccountRequest<'a> {
    patient_id: Uuid,
    name: &'a str,
    email: &'a str,
}

/// HTTP implementation of the billing notifier
///
/// POSTs the new account to `{base_url}/billing-accounts` as JSON.
pub struct HttpBillingNotifier {
    client: Client,
    base_url: String,
}

impl HttpBillingNotifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BillingNotifier for HttpBillingNotifier {
    async fn create_billing_account(
        &self,
        patient_id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<(), BillingError> {
        let body = CreateBillingAccountRequest {
            patient_id,
            name,
            email,
        };

        let response = self
            .client
            .post(format!("{}/billing-accounts", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BillingError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
