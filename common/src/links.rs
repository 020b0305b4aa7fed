//! Deep-link builders for the email and WhatsApp tools.
//!
//! The builders are plain string templates and never validate. `LinkRequest`
//! is the validating front door the tool pages use.

use serde::{Deserialize, Serialize};

use crate::phone::{self, PhoneValue};
use crate::validation::{FieldError, check_email, validate_required};

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/?view=cm&fs=1";
const OUTLOOK_COMPOSE: &str = "https://outlook.live.com/mail/0/deeplink/compose";
const WHATSAPP_BASE: &str = "https://wa.me";

/// Escapes everything except `A-Z a-z 0-9 - _ . ~`, so the result is safe in
/// both a query value and a `mailto:` address.
pub fn encode_component(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Gmail,
    Outlook,
    Mailto,
}

impl EmailProvider {
    pub const ALL: [EmailProvider; 3] = [
        EmailProvider::Gmail,
        EmailProvider::Outlook,
        EmailProvider::Mailto,
    ];

    pub fn code(self) -> &'static str {
        match self {
            EmailProvider::Gmail => "gmail",
            EmailProvider::Outlook => "outlook",
            EmailProvider::Mailto => "mailto",
        }
    }
}

/// Compose link for `provider`. Each provider keeps its own parameter names:
/// Gmail uses `su` for the subject, the others use `subject`.
pub fn email_link(provider: EmailProvider, to: &str, subject: &str, body: &str) -> String {
    let to = encode_component(to);
    let subject = encode_component(subject);
    let body = encode_component(body);
    match provider {
        EmailProvider::Gmail => format!("{GMAIL_COMPOSE}&to={to}&su={subject}&body={body}"),
        EmailProvider::Outlook => {
            format!("{OUTLOOK_COMPOSE}?to={to}&subject={subject}&body={body}")
        }
        EmailProvider::Mailto => format!("mailto:{to}?subject={subject}&body={body}"),
    }
}

/// `https://wa.me/<number>`, with `?text=` only when there is a message.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    match message.filter(|text| !text.is_empty()) {
        Some(text) => format!("{WHATSAPP_BASE}/{number}?text={}", encode_component(text)),
        None => format!("{WHATSAPP_BASE}/{number}"),
    }
}

/// Inline errors for the generator forms. `recipient` covers the email
/// address or the phone number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkErrors {
    pub recipient: Option<FieldError>,
    pub subject: Option<FieldError>,
    pub body: Option<FieldError>,
}

impl LinkErrors {
    pub fn is_empty(&self) -> bool {
        self.recipient.is_none() && self.subject.is_none() && self.body.is_none()
    }
}

/// One submission of a link generator form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkRequest {
    Email {
        provider: EmailProvider,
        to: String,
        subject: String,
        body: String,
    },
    WhatsApp {
        phone: PhoneValue,
        message: String,
    },
}

impl LinkRequest {
    pub fn validate(&self) -> Result<(), LinkErrors> {
        let mut errors = LinkErrors::default();
        match self {
            LinkRequest::Email {
                to, subject, body, ..
            } => {
                errors.recipient = check_email(to).err();
                errors.subject = validate_required(subject).err();
                errors.body = validate_required(body).err();
            }
            LinkRequest::WhatsApp { phone, .. } => {
                if !phone.is_valid() {
                    errors.recipient = Some(FieldError::InvalidPhone);
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates, trims the text fields and builds the link.
    pub fn generate(&self) -> Result<String, LinkErrors> {
        self.validate()?;
        let link = match self {
            LinkRequest::Email {
                provider,
                to,
                subject,
                body,
            } => email_link(*provider, to.trim(), subject.trim(), body.trim()),
            LinkRequest::WhatsApp { phone, message } => whatsapp_link(
                &phone::format_for_whatsapp(&phone.full_number),
                Some(message.trim()),
            ),
        };
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries;
    use crate::phone::PhoneDraft;

    #[test]
    fn encodes_query_components() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's ok?~._-"), "it%27s%20ok%3F~._-");
        assert_eq!(encode_component("שלום"), "%D7%A9%D7%9C%D7%95%D7%9D");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn mailto_link() {
        assert_eq!(
            email_link(EmailProvider::Mailto, "a@b.com", "Hello", "Body text"),
            "mailto:a%40b.com?subject=Hello&body=Body%20text"
        );
    }

    #[test]
    fn provider_specific_parameter_names() {
        assert_eq!(
            email_link(EmailProvider::Gmail, "a@b.com", "Hi", "Yo"),
            "https://mail.google.com/mail/?view=cm&fs=1&to=a%40b.com&su=Hi&body=Yo"
        );
        assert_eq!(
            email_link(EmailProvider::Outlook, "a@b.com", "Hi", "Yo"),
            "https://outlook.live.com/mail/0/deeplink/compose?to=a%40b.com&subject=Hi&body=Yo"
        );
    }

    #[test]
    fn whatsapp_text_is_optional() {
        assert_eq!(
            whatsapp_link("972501234567", Some("Hi there")),
            "https://wa.me/972501234567?text=Hi%20there"
        );
        assert_eq!(whatsapp_link("972501234567", None), "https://wa.me/972501234567");
        assert_eq!(whatsapp_link("972501234567", Some("")), "https://wa.me/972501234567");
    }

    #[test]
    fn email_request_reports_every_bad_field() {
        let request = LinkRequest::Email {
            provider: EmailProvider::Mailto,
            to: "not-an-email".into(),
            subject: "  ".into(),
            body: String::new(),
        };
        assert_eq!(
            request.generate(),
            Err(LinkErrors {
                recipient: Some(FieldError::InvalidEmail),
                subject: Some(FieldError::Required),
                body: Some(FieldError::Required),
            })
        );
    }

    #[test]
    fn email_request_trims_before_encoding() {
        let request = LinkRequest::Email {
            provider: EmailProvider::Mailto,
            to: " a@b.com ".into(),
            subject: " Hello ".into(),
            body: "Body text\n".into(),
        };
        assert_eq!(
            request.generate().unwrap(),
            "mailto:a%40b.com?subject=Hello&body=Body%20text"
        );
    }

    #[test]
    fn whatsapp_request() {
        let mut draft = PhoneDraft::new(countries::find("IL").unwrap());
        let short = LinkRequest::WhatsApp {
            phone: draft.edit("0501"),
            message: "Hi".into(),
        };
        assert_eq!(
            short.validate().unwrap_err().recipient,
            Some(FieldError::InvalidPhone)
        );

        let request = LinkRequest::WhatsApp {
            phone: draft.edit("050-123-4567"),
            message: "   ".into(),
        };
        assert_eq!(request.generate().unwrap(), "https://wa.me/972501234567");
    }
}
