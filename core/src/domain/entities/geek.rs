//! Geek entity representing a registered geek in the GeekStore system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geek entity representing a registered geek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geek {
    /// Unique identifier for the geek
    pub id: Uuid,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Timestamp when the geek was registered
    pub created_at: DateTime<Utc>,
}

impl Geek {
    /// Creates a new Geek with a fresh random identifier
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: Utc::now(),
        }
    }

    /// Full name used for duplicate detection
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
