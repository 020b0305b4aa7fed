//! Site settings read once at server start and handed to the browser as JSON.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WHATSAPP_NUMBER: &str = "972555081977";
pub const DEFAULT_SITE_URL: &str = "https://royrai.com";
pub const DEFAULT_CALCOM_USERNAME: &str = "royrai";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUrls {
    pub contact_form: Option<String>,
    pub chat_bot: Option<String>,
    pub newsletter: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub google_analytics_id: Option<String>,
    pub facebook_pixel_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub webhooks: WebhookUrls,
    /// Digits only, country code first.
    pub whatsapp_number: String,
    pub site_url: String,
    pub calcom_username: String,
    pub analytics: Analytics,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            webhooks: WebhookUrls::default(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            calcom_username: DEFAULT_CALCOM_USERNAME.to_string(),
            analytics: Analytics::default(),
        }
    }
}

impl SiteConfig {
    /// Builds the config from environment-style keys. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            webhooks: WebhookUrls {
                contact_form: get("WEBHOOK_CONTACT"),
                chat_bot: get("WEBHOOK_CHATBOT"),
                newsletter: get("WEBHOOK_NEWSLETTER"),
            },
            whatsapp_number: get("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            site_url: get("SITE_URL").unwrap_or(defaults.site_url),
            calcom_username: get("CALCOM_USERNAME").unwrap_or(defaults.calcom_username),
            analytics: Analytics {
                google_analytics_id: get("GA_ID"),
                facebook_pixel_id: get("FB_PIXEL_ID"),
            },
        }
    }

    pub fn calcom_url(&self) -> String {
        format!("https://cal.com/{}", self.calcom_username)
    }

    /// Absolute URL of `path` on the public site.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_fallbacks() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.whatsapp_number, "972555081977");
        assert_eq!(config.webhooks.contact_form, None);
    }

    #[test]
    fn values_are_trimmed_and_blanks_ignored() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("WEBHOOK_CONTACT", " https://hook.test/contact "),
            ("WEBHOOK_CHATBOT", "   "),
            ("WHATSAPP_NUMBER", ""),
            ("GA_ID", "G-123"),
        ]));
        assert_eq!(config.webhooks.contact_form.as_deref(), Some("https://hook.test/contact"));
        assert_eq!(config.webhooks.chat_bot, None);
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(config.analytics.google_analytics_id.as_deref(), Some("G-123"));
    }

    #[test]
    fn json_is_camel_case_and_tolerates_missing_fields() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert!(json["webhooks"].get("contactForm").is_some());
        assert_eq!(json["whatsappNumber"], DEFAULT_WHATSAPP_NUMBER);

        let parsed: SiteConfig = serde_json::from_str(r#"{"siteUrl":"https://x.test/"}"#).unwrap();
        assert_eq!(parsed.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(parsed.page_url("/contact"), "https://x.test/contact");
    }
}
