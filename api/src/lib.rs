//! GeekStore REST API.
//!
//! The interesting part of this crate is the [`errors`] module: an
//! extensible translation layer that maps domain failures onto stable
//! `(code, HTTP status)` pairs and renders them as localized error
//! bodies. Feature areas contribute their own codes and mappers (see
//! [`routes::geeks::error_codes`]) without touching the layer itself.

pub mod app;
pub mod dto;
pub mod errors;
pub mod i18n;
pub mod routes;
