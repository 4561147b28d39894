use chrono::NaiveDate;
use heapless::String as HeaplessString;
use patient_core_db::models::patient::patient::PatientModel;
use uuid::Uuid;

pub fn create_test_patient(name: &str, email: &str) -> PatientModel {
    PatientModel {
        id: Uuid::new_v4(),
        name: HeaplessString::try_from(name).unwrap(),
        address: HeaplessString::try_from("1 Test Road").unwrap(),
        email: HeaplessString::try_from(email).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        registered_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

/// Email unique per call so concurrent tests never trip the UNIQUE constraint
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}
