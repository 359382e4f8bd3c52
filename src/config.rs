//! Configuration handling for the site

use crate::submission::DEFAULT_LATENCY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the stub sink latency
pub const LATENCY_ENV: &str = "DACRUST_SINK_LATENCY_MS";

/// Opening hours line shown on the contact page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Delay of the stub submission sink, in milliseconds
    pub sink_latency_ms: Option<u64>,
    pub restaurant_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address_lines: Option<Vec<String>>,
    pub opening_hours: Option<Vec<OpeningHours>>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "dacrust", "dacrust-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Stub sink latency, with the environment taking precedence over the file
    pub fn sink_latency(&self) -> Duration {
        latency_from(std::env::var(LATENCY_ENV).ok().as_deref(), self.sink_latency_ms)
    }

    pub fn restaurant_name(&self) -> &str {
        self.restaurant_name.as_deref().unwrap_or("Dacrust")
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("(123) 456-7890")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("info@dacrust.com")
    }

    pub fn address_lines(&self) -> Vec<String> {
        self.address_lines.clone().unwrap_or_else(|| {
            vec![
                "123 Restaurant Street".to_string(),
                "City, State 12345".to_string(),
            ]
        })
    }

    pub fn opening_hours(&self) -> Vec<OpeningHours> {
        self.opening_hours.clone().unwrap_or_else(|| {
            [
                ("Mon - Fri", "11:00 AM - 10:00 PM"),
                ("Saturday", "10:00 AM - 11:00 PM"),
                ("Sunday", "10:00 AM - 9:00 PM"),
            ]
            .into_iter()
            .map(|(days, hours)| OpeningHours {
                days: days.to_string(),
                hours: hours.to_string(),
            })
            .collect()
        })
    }
}

fn latency_from(env: Option<&str>, configured_ms: Option<u64>) -> Duration {
    if let Some(raw) = env {
        match raw.trim().parse::<u64>() {
            Ok(ms) => return Duration::from_millis(ms),
            Err(_) => tracing::warn!("Ignoring invalid {LATENCY_ENV}={raw:?}"),
        }
    }
    configured_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LATENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.sink_latency_ms.is_none());
        assert!(config.restaurant_name.is_none());
        assert_eq!(config.restaurant_name(), "Dacrust");
        assert_eq!(config.email(), "info@dacrust.com");
        assert_eq!(config.address_lines().len(), 2);
        assert_eq!(config.opening_hours()[0].days, "Mon - Fri");
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            sink_latency_ms: Some(250),
            restaurant_name: Some("Dacrust Downtown".to_string()),
            phone: Some("(555) 000-1111".to_string()),
            email: Some("hello@dacrust.com".to_string()),
            address_lines: Some(vec!["1 Main St".to_string()]),
            opening_hours: Some(vec![OpeningHours {
                days: "Daily".to_string(),
                hours: "Noon - Midnight".to_string(),
            }]),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.sink_latency_ms, Some(250));
        assert_eq!(parsed.restaurant_name(), "Dacrust Downtown");
        assert_eq!(parsed.phone(), "(555) 000-1111");
        assert_eq!(parsed.address_lines(), vec!["1 Main St".to_string()]);
        assert_eq!(parsed.opening_hours()[0].hours, "Noon - Midnight");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.sink_latency_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"sink_latency_ms": 10, "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sink_latency_ms, Some(10));
    }

    #[test]
    fn test_latency_precedence() {
        assert_eq!(latency_from(None, None), DEFAULT_LATENCY);
        assert_eq!(latency_from(None, Some(20)), Duration::from_millis(20));
        assert_eq!(latency_from(Some("5"), Some(20)), Duration::from_millis(5));
        assert_eq!(
            latency_from(Some("soon"), Some(20)),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no file exists
        let result = SiteConfig::load();
        assert!(result.is_ok());
    }
}
