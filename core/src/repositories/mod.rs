//! Repository traits and in-memory implementations.

pub mod geek;

pub use geek::{GeekRepository, InMemoryGeekRepository};
