//! Brand, contact and social data that does not change per deployment.

use crate::config::SiteConfig;
use crate::language::Language;
use crate::links;

pub const BRAND_NAME: &str = "Royrai Automation";
pub const BRAND_FIRST: &str = "Royrai";
pub const BRAND_SECOND: &str = "Automation";
pub const OWNER: &str = "Roy Ratzon";

pub const CONTACT_EMAIL: &str = "roy@royrai.com";
pub const PHONE_DISPLAY: &str = "+972-55-508-1977";

pub const LINKEDIN_URL: &str = "https://linkedin.com/in/royratzon";
pub const INSTAGRAM_URL: &str = "https://instagram.com/royrai.dev";
pub const FACEBOOK_URL: &str = "https://facebook.com/royrai.automation";

/// Text pre-filled in the WhatsApp chat opened from the site.
pub fn whatsapp_message(language: Language) -> &'static str {
    match language {
        Language::En => "Hi Roy, I'm interested in learning more about automation for my business.",
        Language::He => "היי רועי, אני מעוניין ללמוד עוד על אוטומציה לעסק שלי.",
    }
}

/// `wa.me` link to the configured number with the default message, or `None`
/// when no number is configured.
pub fn whatsapp_contact_url(config: &SiteConfig, language: Language) -> Option<String> {
    let number = config.whatsapp_number.trim();
    if number.is_empty() {
        return None;
    }
    Some(links::whatsapp_link(number, Some(whatsapp_message(language))))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    WhatsApp,
    Facebook,
    Instagram,
    LinkedIn,
    Email,
}

impl ContactChannel {
    pub fn name(self) -> &'static str {
        match self {
            ContactChannel::WhatsApp => "WhatsApp",
            ContactChannel::Facebook => "Facebook",
            ContactChannel::Instagram => "Instagram",
            ContactChannel::LinkedIn => "LinkedIn",
            ContactChannel::Email => "Email",
        }
    }

    /// Short line under the channel name on the contact page.
    pub fn caption(self, language: Language) -> &'static str {
        match (self, language) {
            (ContactChannel::WhatsApp, Language::En) => "Send a message",
            (ContactChannel::WhatsApp, Language::He) => "שלח הודעה",
            (ContactChannel::Facebook, Language::En) => "Follow on Facebook",
            (ContactChannel::Facebook, Language::He) => "עקוב בפייסבוק",
            (ContactChannel::Instagram, _) => "@royrai.dev",
            (ContactChannel::LinkedIn, Language::En) => "Connect with me",
            (ContactChannel::LinkedIn, Language::He) => "התחבר איתי",
            (ContactChannel::Email, _) => CONTACT_EMAIL,
        }
    }

    /// Whether the link opens outside the site.
    pub fn is_external(self) -> bool {
        self != ContactChannel::Email
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub channel: ContactChannel,
    pub href: String,
}

/// Quick-contact buttons in display order. WhatsApp is left out when no
/// number is configured.
pub fn quick_contact_links(config: &SiteConfig, language: Language) -> Vec<QuickLink> {
    let mut out = Vec::with_capacity(5);
    if let Some(href) = whatsapp_contact_url(config, language) {
        out.push(QuickLink {
            channel: ContactChannel::WhatsApp,
            href,
        });
    }
    for (channel, href) in [
        (ContactChannel::Facebook, FACEBOOK_URL),
        (ContactChannel::Instagram, INSTAGRAM_URL),
        (ContactChannel::LinkedIn, LINKEDIN_URL),
    ] {
        out.push(QuickLink {
            channel,
            href: href.to_string(),
        });
    }
    out.push(QuickLink {
        channel: ContactChannel::Email,
        href: format!("mailto:{CONTACT_EMAIL}"),
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_carries_localized_message() {
        let config = SiteConfig::default();
        let url = whatsapp_contact_url(&config, Language::En).unwrap();
        assert!(url.starts_with("https://wa.me/972555081977?text=Hi%20Roy%2C%20I%27m"));
        let url = whatsapp_contact_url(&config, Language::He).unwrap();
        assert!(url.contains("?text=%D7%94"));
    }

    #[test]
    fn no_number_no_whatsapp() {
        let config = SiteConfig {
            whatsapp_number: String::new(),
            ..SiteConfig::default()
        };
        assert_eq!(whatsapp_contact_url(&config, Language::En), None);
        let channels: Vec<_> = quick_contact_links(&config, Language::En)
            .into_iter()
            .map(|link| link.channel)
            .collect();
        assert_eq!(
            channels,
            [
                ContactChannel::Facebook,
                ContactChannel::Instagram,
                ContactChannel::LinkedIn,
                ContactChannel::Email
            ]
        );
    }

    #[test]
    fn email_link_is_mailto() {
        let links = quick_contact_links(&SiteConfig::default(), Language::He);
        assert_eq!(links.len(), 5);
        assert_eq!(links[4].href, "mailto:roy@royrai.com");
        assert!(!links[4].channel.is_external());
    }
}
