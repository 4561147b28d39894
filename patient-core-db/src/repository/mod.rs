pub mod delete;
pub mod exist_by_email;
pub mod exist_by_email_excluding_id;
pub mod find_all;
pub mod find_by_id;
pub mod patient_repository;
pub mod save;

// Re-exports
pub use delete::*;
pub use exist_by_email::*;
pub use exist_by_email_excluding_id::*;
pub use find_all::*;
pub use find_by_id::*;
pub use patient_repository::*;
pub use save::*;
