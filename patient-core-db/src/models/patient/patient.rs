use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for Patient
/// Represents a patient record as persisted in the `patient` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PatientModel {
    pub id: Uuid,

    pub name: HeaplessString<100>,
    pub address: HeaplessString<200>,

    /// Must be unique across all patients; the schema carries a UNIQUE
    /// constraint so a losing check-then-write racer fails at the store
    pub email: HeaplessString<100>,

    pub birth_date: NaiveDate,
    pub registered_date: NaiveDate,
}

impl Identifiable for PatientModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> PatientModel {
        PatientModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from("Ana Silva").unwrap(),
            address: HeaplessString::try_from("1 Rd").unwrap(),
            email: HeaplessString::try_from("ana@x.com").unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            registered_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_get_id_returns_record_id() {
        let patient = sample_patient();
        assert_eq!(patient.get_id(), patient.id);
    }

    #[test]
    fn test_serde_round_trip() {
        let patient = sample_patient();
        let json = serde_json::to_string(&patient).unwrap();
        let back: PatientModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patient);
    }
}
