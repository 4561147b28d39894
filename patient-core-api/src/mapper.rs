use chrono::{NaiveDate, Utc};
use heapless::String as HeaplessString;
use patient_core_db::models::patient::patient::PatientModel;
use uuid::Uuid;

use crate::dto::{PatientRequest, PatientResponse};
use crate::error::{PatientServiceError, PatientServiceResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pure, stateless conversion between the persisted entity and the transfer
/// shapes exchanged at the service boundary.
pub struct PatientMapper;

impl PatientMapper {
    /// Build the response shape from a persisted record
    pub fn to_response(patient: &PatientModel) -> PatientResponse {
        PatientResponse {
            id: patient.id,
            name: patient.name.to_string(),
            address: patient.address.to_string(),
            email: patient.email.to_string(),
            date_of_birth: patient.birth_date.format(DATE_FORMAT).to_string(),
            registered_date: patient.registered_date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Build a fresh entity from a create request
    ///
    /// The registered date defaults to today when the request omits it.
    pub fn to_entity(request: &PatientRequest, id: Uuid) -> PatientServiceResult<PatientModel> {
        let registered_date = match request.registered_date.as_deref() {
            Some(value) => parse_date("registeredDate", value)?,
            None => Utc::now().date_naive(),
        };

        Ok(PatientModel {
            id,
            name: bounded("name", &request.name)?,
            address: bounded("address", &request.address)?,
            email: bounded("email", &request.email)?,
            birth_date: parse_date("dateOfBirth", &request.date_of_birth)?,
            registered_date,
        })
    }

    /// Overwrite an existing entity with the fields of an update request
    ///
    /// Name, address, email and birth date are always replaced; the registered
    /// date is replaced only when the request carries one.
    pub fn apply_request(
        patient: &mut PatientModel,
        request: &PatientRequest,
    ) -> PatientServiceResult<()> {
        patient.name = bounded("name", &request.name)?;
        patient.address = bounded("address", &request.address)?;
        patient.email = bounded("email", &request.email)?;
        patient.birth_date = parse_date("dateOfBirth", &request.date_of_birth)?;
        if let Some(value) = request.registered_date.as_deref() {
            patient.registered_date = parse_date("registeredDate", value)?;
        }
        Ok(())
    }
}

fn bounded<const N: usize>(
    field: &'static str,
    value: &str,
) -> PatientServiceResult<HeaplessString<N>> {
    HeaplessString::try_from(value).map_err(|_| PatientServiceError::InvalidField {
        field,
        reason: format!("value is too long (max {N} chars)"),
    })
}

fn parse_date(field: &'static str, value: &str) -> PatientServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| PatientServiceError::InvalidField {
        field,
        reason: e.to_string(),
    })
}
