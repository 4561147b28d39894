pub mod delete;
pub mod exist_by_email;
pub mod exist_by_email_excluding_id;
pub mod find_all;
pub mod find_by_id;
pub mod repo_impl;
pub mod save;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use repo_impl::PatientRepositoryImpl;
