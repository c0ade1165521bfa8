//! In-memory implementation of GeekRepository.
//!
//! Used by the demo application and by tests; a production deployment
//! would swap in a database-backed implementation of the same trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Geek;
use crate::errors::DomainError;

use super::trait_::GeekRepository;

/// In-memory geek repository
pub struct InMemoryGeekRepository {
    geeks: Arc<RwLock<HashMap<Uuid, Geek>>>,
}

impl InMemoryGeekRepository {
    pub fn new() -> Self {
        Self {
            geeks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryGeekRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeekRepository for InMemoryGeekRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Geek>, DomainError> {
        let geeks = self.geeks.read().await;
        Ok(geeks.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Geek>, DomainError> {
        let geeks = self.geeks.read().await;
        Ok(geeks
            .values()
            .find(|g| g.first_name == first_name && g.last_name == last_name)
            .cloned())
    }

    async fn save(&self, geek: Geek) -> Result<Geek, DomainError> {
        let mut geeks = self.geeks.write().await;
        geeks.insert(geek.id, geek.clone());
        Ok(geek)
    }
}
