//! Server settings read from the environment (and `.env`, when present) at start-up.

use common::config::SiteConfig;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Handed to the browser as-is through `GET /api/config`.
    pub site: SiteConfig,
}

impl ServerConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            site: SiteConfig::from_lookup(&lookup),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// One-line summary for the start-up log. Webhook URLs are reported as
    /// configured or not, never printed.
    pub fn summary(&self) -> String {
        let flag = |url: &Option<String>| if url.is_some() { "set" } else { "unset" };
        let hooks = &self.site.webhooks;
        format!(
            "contact webhook {}, chatbot webhook {}, newsletter webhook {}, site {}",
            flag(&hooks.contact_form),
            flag(&hooks.chat_bot),
            flag(&hooks.newsletter),
            self.site.site_url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn reads_host_port_and_site_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", " 3000 "),
            ("WEBHOOK_CONTACT", "https://hook.test/c"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.site.webhooks.contact_form.as_deref(), Some("https://hook.test/c"));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])).is_err());
    }

    #[test]
    fn summary_hides_webhook_urls() {
        let config =
            ServerConfig::from_lookup(lookup(&[("WEBHOOK_CHATBOT", "https://secret.test/x")])).unwrap();
        let summary = config.summary();
        assert!(summary.contains("chatbot webhook set"));
        assert!(summary.contains("contact webhook unset"));
        assert!(!summary.contains("secret.test"));
    }
}
