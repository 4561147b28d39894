pub mod billing;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod service;

pub use billing::*;
pub use dto::*;
pub use error::*;
pub use mapper::*;
pub use service::*;
