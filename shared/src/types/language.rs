//! Language and internationalization types.

use serde::{Deserialize, Serialize};

/// Language preference used as the locale key for message lookup.
///
/// The web layer resolves this from the `Accept-Language` header and
/// passes it into every message resolution; the error core treats it
/// as an opaque key into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Pick the highest-quality supported language from an
    /// `Accept-Language` header value.
    ///
    /// Example input: `"zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"`.
    /// Unsupported languages are ignored; an empty or unparseable
    /// header falls back to English.
    pub fn from_accept_language(header: &str) -> Self {
        let mut preferred = Language::English;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = match parts.next() {
                Some(tag) => tag.trim().to_lowercase(),
                None => continue,
            };
            let quality = parts
                .next()
                .and_then(|q| q.trim().strip_prefix("q=")?.parse::<f32>().ok())
                .unwrap_or(1.0);

            if tag.starts_with("zh") && quality > max_quality {
                preferred = Language::Chinese;
                max_quality = quality;
            } else if tag.starts_with("en") && quality > max_quality {
                preferred = Language::English;
                max_quality = quality;
            }
        }

        preferred
    }

    /// Language code (ISO 639-1), also the catalog table key.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "zh" | "chi" | "chinese" => Ok(Language::Chinese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(
            Language::from_accept_language("en-US,en;q=0.9,zh-CN;q=0.8"),
            Language::English
        );
        assert_eq!(
            Language::from_accept_language("zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"),
            Language::Chinese
        );
        assert_eq!(Language::from_accept_language("ZH-TW"), Language::Chinese);
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        assert_eq!(Language::from_accept_language("fr-FR"), Language::English);
        assert_eq!(Language::from_accept_language(""), Language::English);
    }

    #[test]
    fn test_quality_ordering_wins_over_position() {
        assert_eq!(
            Language::from_accept_language("en;q=0.5,zh;q=0.9"),
            Language::Chinese
        );
    }

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Chinese.code(), "zh");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("chinese".parse::<Language>().unwrap(), Language::Chinese);
        assert!("invalid".parse::<Language>().is_err());
    }
}
