//! Geeks feature area: registration service.

pub mod service;

pub use service::GeekService;
