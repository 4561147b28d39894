use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transfer shape accepted on create and update
///
/// Dates travel as `YYYY-MM-DD` text; the mapper parses them when building
/// the entity. `registered_date` may be omitted: on create it defaults to
/// today, on update the stored value is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequest {
    pub name: String,
    pub address: String,
    pub email: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,
}

/// Transfer shape returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub email: String,
    pub date_of_birth: String,
    pub registered_date: String,
}
