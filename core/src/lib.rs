//! Core business logic and domain layer for the GeekStore backend.
//!
//! The crate is deliberately free of web-framework types: services
//! raise [`errors::DomainError`] values and the api crate translates
//! them into HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
