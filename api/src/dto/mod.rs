//! Request and response DTOs.

pub mod geek;

pub use geek::{to_validation_failure, CreateGeekRequest, GeekResponse};
