//! Domain services.

pub mod geeks;

pub use geeks::GeekService;
