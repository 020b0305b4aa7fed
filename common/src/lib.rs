//! Shared, browser-free logic for the Royrai Automation site.
//!
//! The `frontend` crate renders everything and owns every browser API call; the
//! `backend` crate serves the bundle and the start-time configuration. Everything
//! in between lives here so it can be unit tested natively:
//!
//! - `language` / `content`: the `en`/`he` switch, text direction, and the typed
//!   content tree each language implements in full.
//! - `countries` / `timezone`: the static country table and timezone-based
//!   country inference used by the phone input.
//! - `phone` / `links` / `validation`: digit cleaning, number composition, and the
//!   `mailto:` / Gmail / Outlook / `wa.me` templaters with their field checks.
//! - `submission` / `webhook` / `chat`: contact form and chatbot payloads and the
//!   single-shot JSON POST to the configured automation webhook.
//! - `config` / `site`: environment-provided settings and fixed brand data.

pub mod chat;
pub mod config;
pub mod content;
pub mod countries;
pub mod language;
pub mod links;
pub mod phone;
pub mod site;
pub mod submission;
pub mod timezone;
pub mod validation;
pub mod webhook;
