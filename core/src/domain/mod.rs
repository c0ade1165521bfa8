//! Domain model for the GeekStore backend.

pub mod entities;
