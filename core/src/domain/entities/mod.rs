//! Domain entities.

pub mod geek;

pub use geek::Geek;
