//! HTTP route handlers, one module per feature area.

pub mod geeks;
