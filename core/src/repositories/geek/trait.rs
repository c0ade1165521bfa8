//! Geek repository trait defining the interface for geek persistence.
//!
//! The trait is async-first and uses Result types so implementations
//! backed by a real database can surface their own failures as
//! [`DomainError`]s while keeping the domain layer storage-agnostic.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Geek;
use crate::errors::DomainError;

/// Repository trait for Geek entity persistence operations
#[async_trait]
pub trait GeekRepository: Send + Sync {
    /// Find a geek by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Geek>, DomainError>;

    /// Find a geek by exact first and last name
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Geek>, DomainError>;

    /// Persist a new geek
    async fn save(&self, geek: Geek) -> Result<Geek, DomainError>;
}
