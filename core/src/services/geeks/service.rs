//! Geek registration service.

use std::sync::Arc;

use crate::domain::entities::Geek;
use crate::errors::{DomainResult, GeekError};
use crate::repositories::GeekRepository;

/// Service handling geek registration.
///
/// Raises [`GeekError::AlreadyExists`] when a geek with the same full
/// name is already registered; the web boundary translates that into
/// the `geeks-1` error code.
pub struct GeekService<R: GeekRepository> {
    repository: Arc<R>,
}

impl<R: GeekRepository> GeekService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new geek, rejecting duplicates by full name.
    pub async fn create_geek(&self, first_name: &str, last_name: &str) -> DomainResult<Geek> {
        if let Some(existing) = self.repository.find_by_name(first_name, last_name).await? {
            return Err(GeekError::AlreadyExists {
                first_name: existing.first_name,
                last_name: existing.last_name,
            }
            .into());
        }

        let geek = Geek::new(first_name, last_name);
        self.repository.save(geek).await
    }
}
