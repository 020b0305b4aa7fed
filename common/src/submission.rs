//! Contact form, chatbot and newsletter payloads and the submit flow that
//! validates locally before anything leaves the browser.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::language::Language;
use crate::phone::{self, PhoneValue};
use crate::validation::{FieldError, check_email, validate_required};
use crate::webhook::{self, Delivery, WebhookError, WebhookSender};

pub const CONTACT_SOURCE: &str = "royrai.com/contact";
pub const CHATBOT_SOURCE: &str = "chatbot";
pub const NEWSLETTER_SOURCE: &str = "royrai.com/guides";

/// Subject sent when the visitor leaves it blank.
pub const DEFAULT_SUBJECT: &str = "Contact Form";

/// How long a success or error banner stays before the form goes back to idle.
pub const STATUS_RESET_MS: u32 = 5_000;

/// How long a "Copied!" label stays before reverting.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_submitting(self) -> bool {
        self == FormStatus::Submitting
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        *self.slot(field)
    }

    /// Editing a field clears its error.
    pub fn clear(&mut self, field: ContactField) {
        *self.slot_mut(field) = None;
    }

    fn slot(&self, field: ContactField) -> &Option<FieldError> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<FieldError> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }
}

/// What the visitor has typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: PhoneValue,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let phone = if self.phone.local_number.trim().is_empty() {
            Some(FieldError::Required)
        } else if !phone::validate_phone_number(&self.phone.local_number) {
            Some(FieldError::InvalidPhone)
        } else {
            None
        };
        let errors = ContactErrors {
            name: validate_required(&self.name).err(),
            email: check_email(&self.email).err(),
            phone,
            message: validate_required(&self.message).err(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the webhook body. Text fields are trimmed.
    pub fn to_submission(
        &self,
        language: Language,
        page_url: &str,
        now: DateTime<Utc>,
    ) -> ContactSubmission {
        let subject = self.subject.trim();
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.full_number.clone(),
            dial_code: self.phone.dial_code.clone(),
            local_number: self.phone.local_number.clone(),
            country_code: self.phone.country_code.clone(),
            phone_formatted: self.phone.formatted(),
            subject: if subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                subject.to_string()
            },
            message: self.message.trim().to_string(),
            language,
            timestamp: webhook::iso_timestamp(now),
            source: CONTACT_SOURCE,
            page_url: page_url.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Dial code and local digits, no separator.
    pub phone: String,
    pub dial_code: String,
    pub local_number: String,
    pub country_code: String,
    pub phone_formatted: String,
    pub subject: String,
    pub message: String,
    pub language: Language,
    pub timestamp: String,
    pub source: &'static str,
    pub page_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotSubmission {
    pub name: String,
    pub email: String,
    pub question: String,
    pub language: Language,
    pub page_url: String,
    pub timestamp: String,
    pub source: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubmission {
    pub email: String,
    pub language: Language,
    pub page_url: String,
    pub timestamp: String,
    pub source: &'static str,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SubmitError<E = ContactErrors> {
    #[error("submission has invalid fields: {0:?}")]
    Invalid(E),
    #[error(transparent)]
    Delivery(#[from] WebhookError),
}

/// Validates the form and, only if every field passes, sends it.
pub async fn submit_contact<S: WebhookSender>(
    sender: &S,
    url: Option<&str>,
    form: &ContactForm,
    language: Language,
    page_url: &str,
    now: DateTime<Utc>,
) -> Result<Delivery, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;
    let payload = form.to_submission(language, page_url, now);
    Ok(webhook::dispatch(sender, url, &payload).await?)
}

/// Guides page signup: one email address.
pub async fn submit_newsletter<S: WebhookSender>(
    sender: &S,
    url: Option<&str>,
    email: &str,
    language: Language,
    page_url: &str,
    now: DateTime<Utc>,
) -> Result<Delivery, SubmitError<FieldError>> {
    let email = check_email(email).map_err(SubmitError::Invalid)?;
    let payload = NewsletterSubmission {
        email: email.to_string(),
        language,
        page_url: page_url.to_string(),
        timestamp: webhook::iso_timestamp(now),
        source: NEWSLETTER_SOURCE,
    };
    Ok(webhook::dispatch(sender, url, &payload).await?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use futures::executor::block_on;

    use super::*;
    use crate::countries;
    use crate::phone::PhoneDraft;
    use crate::webhook::testing::MockSender;

    const HOOK: Option<&str> = Some("https://hook.test/contact");

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn filled_form() -> ContactForm {
        let mut draft = PhoneDraft::new(countries::find("IL").unwrap());
        ContactForm {
            name: " Dana ".into(),
            email: "dana@example.com".into(),
            phone: draft.edit("050-123-4567"),
            subject: "   ".into(),
            message: "Automate my invoices".into(),
        }
    }

    #[test]
    fn invalid_email_never_reaches_the_webhook() {
        let sender = MockSender::answering(Ok(200));
        let form = ContactForm {
            email: "not-an-email".into(),
            ..filled_form()
        };
        let outcome = block_on(submit_contact(&sender, HOOK, &form, Language::En, "/contact", now()));
        match outcome {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.get(ContactField::Email), Some(FieldError::InvalidEmail));
                assert_eq!(errors.get(ContactField::Name), None);
            }
            other => panic!("expected field errors, got {other:?}"),
        }
        assert_eq!(sender.call_count(), 0);
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.phone, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));
    }

    #[test]
    fn short_phone_is_invalid_not_missing() {
        let mut draft = PhoneDraft::new(countries::default_country());
        let form = ContactForm {
            phone: draft.edit("12345"),
            ..filled_form()
        };
        assert_eq!(form.validate().unwrap_err().phone, Some(FieldError::InvalidPhone));
    }

    #[test]
    fn payload_shape() {
        let sender = MockSender::answering(Ok(200));
        let outcome = block_on(submit_contact(
            &sender,
            HOOK,
            &filled_form(),
            Language::He,
            "https://royrai.com/contact",
            now(),
        ));
        assert_eq!(outcome, Ok(Delivery::Sent));

        let body = sender.last_body().unwrap();
        assert_eq!(body["name"], "Dana");
        assert_eq!(body["phone"], "+972501234567");
        assert_eq!(body["dialCode"], "+972");
        assert_eq!(body["localNumber"], "501234567");
        assert_eq!(body["countryCode"], "IL");
        assert_eq!(body["phoneFormatted"], "+972-501234567");
        assert_eq!(body["subject"], DEFAULT_SUBJECT);
        assert_eq!(body["language"], "he");
        assert_eq!(body["timestamp"], "2025-06-01T12:00:00.000Z");
        assert_eq!(body["source"], CONTACT_SOURCE);
        assert_eq!(body["pageUrl"], "https://royrai.com/contact");
    }

    #[test]
    fn webhook_failure_surfaces_as_delivery_error() {
        let sender = MockSender::answering(Ok(502));
        let outcome = block_on(submit_contact(&sender, HOOK, &filled_form(), Language::En, "/", now()));
        assert_eq!(outcome, Err(SubmitError::Delivery(WebhookError::Status(502))));
    }

    #[test]
    fn clearing_one_field_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(ContactField::Phone);
        assert_eq!(errors.get(ContactField::Phone), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn newsletter_signup() {
        let sender = MockSender::answering(Ok(200));
        let outcome = block_on(submit_newsletter(&sender, HOOK, "oops", Language::En, "/guides", now()));
        assert_eq!(outcome, Err(SubmitError::Invalid(FieldError::InvalidEmail)));
        assert_eq!(sender.call_count(), 0);

        let outcome = block_on(submit_newsletter(&sender, HOOK, " a@b.com ", Language::En, "/guides", now()));
        assert_eq!(outcome, Ok(Delivery::Sent));
        let body = sender.last_body().unwrap();
        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["source"], NEWSLETTER_SOURCE);
    }

    #[test]
    fn status_flags() {
        assert!(FormStatus::Submitting.is_submitting());
        assert!(!FormStatus::default().is_submitting());
    }
}
