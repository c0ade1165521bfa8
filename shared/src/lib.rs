//! Shared value types used across the GeekStore backend.
//!
//! Everything in this crate is transport-free: the web layer and the
//! domain layer both depend on it, so nothing here may pull in a web
//! framework or a database driver.

pub mod types;
