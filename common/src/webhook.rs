//! One-shot JSON POST to an automation webhook (Make.com, n8n, Zapier).
//!
//! The HTTP client lives behind [`WebhookSender`] so the frontend can plug in
//! `gloo-net` while tests count calls without a network.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WebhookError {
    #[error("webhook answered with HTTP {0}")]
    Status(u16),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("payload could not be serialized: {0}")]
    Serialize(String),
}

/// What happened to a payload that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No URL is configured for this webhook. Treated as success so the site
    /// works without automation wired up.
    NotConfigured,
}

#[allow(async_fn_in_trait)]
pub trait WebhookSender {
    /// POSTs `body` with `Content-Type: application/json` and returns the HTTP
    /// status. Transport failures map to [`WebhookError::Network`].
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, WebhookError>;
}

/// Sends `payload` once. No retries; any non-2xx status is an error.
pub async fn dispatch<S, T>(
    sender: &S,
    url: Option<&str>,
    payload: &T,
) -> Result<Delivery, WebhookError>
where
    S: WebhookSender,
    T: Serialize,
{
    let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) else {
        return Ok(Delivery::NotConfigured);
    };
    let body =
        serde_json::to_value(payload).map_err(|e| WebhookError::Serialize(e.to_string()))?;
    match sender.post_json(url, &body).await? {
        200..=299 => Ok(Delivery::Sent),
        status => Err(WebhookError::Status(status)),
    }
}

/// `2025-01-31T09:05:00.123Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every call and answers with a fixed result.
    pub struct MockSender {
        pub calls: RefCell<Vec<(String, serde_json::Value)>>,
        pub answer: Result<u16, WebhookError>,
    }

    impl MockSender {
        pub fn answering(answer: Result<u16, WebhookError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                answer,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn last_body(&self) -> Option<serde_json::Value> {
            self.calls.borrow().last().map(|(_, body)| body.clone())
        }
    }

    impl WebhookSender for MockSender {
        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<u16, WebhookError> {
            self.calls.borrow_mut().push((url.to_string(), body.clone()));
            self.answer.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use futures::executor::block_on;
    use serde_json::json;

    use super::testing::MockSender;
    use super::*;

    #[test]
    fn missing_url_skips_the_sender() {
        let sender = MockSender::answering(Ok(200));
        let outcome = block_on(dispatch(&sender, None, &json!({ "a": 1 })));
        assert_eq!(outcome, Ok(Delivery::NotConfigured));
        let outcome = block_on(dispatch(&sender, Some("  "), &json!({ "a": 1 })));
        assert_eq!(outcome, Ok(Delivery::NotConfigured));
        assert_eq!(sender.call_count(), 0);
    }

    #[test]
    fn success_is_any_2xx() {
        let sender = MockSender::answering(Ok(204));
        let outcome = block_on(dispatch(&sender, Some("https://hook.test/x"), &json!({})));
        assert_eq!(outcome, Ok(Delivery::Sent));
        assert_eq!(sender.calls.borrow()[0].0, "https://hook.test/x");
    }

    #[test]
    fn other_statuses_and_transport_failures_are_errors() {
        let sender = MockSender::answering(Ok(500));
        let outcome = block_on(dispatch(&sender, Some("https://hook.test"), &json!({})));
        assert_eq!(outcome, Err(WebhookError::Status(500)));

        let sender = MockSender::answering(Err(WebhookError::Network("offline".into())));
        let outcome = block_on(dispatch(&sender, Some("https://hook.test"), &json!({})));
        assert_eq!(outcome, Err(WebhookError::Network("offline".into())));
    }

    #[test]
    fn timestamp_has_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 9, 5, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(iso_timestamp(at), "2025-01-31T09:05:00.123Z");
    }
}
