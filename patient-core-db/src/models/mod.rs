pub mod identifiable;
pub mod patient;

// Re-exports
pub use identifiable::*;
pub use patient::*;
