//! Localized error message resolution.
//!
//! [`MessageSource`] is the lookup contract the exception handler
//! consumes; [`CatalogMessageSource`] is the concrete implementation
//! backed by a TOML catalog keyed by locale code, then error code:
//!
//! ```toml
//! [en]
//! "geeks-1" = "A geek with the same name already exists"
//!
//! [zh]
//! "geeks-1" = "同名极客已存在"
//! ```
//!
//! The catalog is loaded from `i18n/error_messages.toml` next to the
//! working directory when present, falling back to a default embedded
//! at compile time.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use gs_shared::types::Language;

type Catalog = HashMap<String, HashMap<String, String>>;

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // The embedded catalog is part of the build; failing to parse it
    // is a programming error and fatal at first use.
    toml::from_str(include_str!("../../i18n/error_messages.toml"))
        .expect("Failed to parse embedded error message catalog")
});

/// Finds the localized message text for an error code.
///
/// Returning `None` means "no catalog entry", including after any
/// fallback chain the implementation applies. Substituting sentinel
/// text on a miss is the caller's responsibility, not this trait's.
pub trait MessageSource: Send + Sync {
    fn get_message(&self, code: &str, language: Language) -> Option<String>;
}

/// Errors loading a message catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read message catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse message catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML-backed [`MessageSource`].
pub struct CatalogMessageSource {
    catalog: Catalog,
}

impl CatalogMessageSource {
    /// Load the catalog, preferring an `i18n/error_messages.toml` file
    /// next to the process over the embedded default.
    pub fn load() -> Result<Self, CatalogError> {
        let config_path = Path::new("i18n/error_messages.toml");

        if config_path.exists() {
            Self::from_file(config_path)
        } else {
            Ok(Self {
                catalog: DEFAULT_CATALOG.clone(),
            })
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        Ok(Self { catalog })
    }
}

impl MessageSource for CatalogMessageSource {
    /// Look up `code` under the requested locale. Non-English locales
    /// fall back to English before reporting a miss; the exception
    /// handler only sees `None` when no usable text exists at all.
    fn get_message(&self, code: &str, language: Language) -> Option<String> {
        let localized = self
            .catalog
            .get(language.code())
            .and_then(|messages| messages.get(code));

        match localized {
            Some(message) => Some(message.clone()),
            None if language != Language::English => self
                .catalog
                .get(Language::English.code())
                .and_then(|messages| messages.get(code))
                .cloned(),
            None => None,
        }
    }
}
