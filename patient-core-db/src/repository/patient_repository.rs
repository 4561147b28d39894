use sqlx::Database;

use crate::models::patient::patient::PatientModel;
use crate::repository::delete::Delete;
use crate::repository::exist_by_email::ExistByEmail;
use crate::repository::exist_by_email_excluding_id::ExistByEmailExcludingId;
use crate::repository::find_all::FindAll;
use crate::repository::find_by_id::FindById;
use crate::repository::save::Save;

/// Bundle of every store operation the patient service needs
///
/// Blanket-implemented, so any type providing the six operation traits is a
/// `PatientRepository` without further ceremony.
pub trait PatientRepository<DB: Database>:
    FindAll<DB, PatientModel>
    + FindById<DB, PatientModel>
    + ExistByEmail<DB>
    + ExistByEmailExcludingId<DB>
    + Save<DB, PatientModel>
    + Delete<DB>
{
}

impl<DB: Database, T> PatientRepository<DB> for T where
    T: FindAll<DB, PatientModel>
        + FindById<DB, PatientModel>
        + ExistByEmail<DB>
        + ExistByEmailExcludingId<DB>
        + Save<DB, PatientModel>
        + Delete<DB>
{
}
