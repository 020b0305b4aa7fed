//! # Site Config Service
//!
//! Hands the start-time [`SiteConfig`](common::config::SiteConfig) to the browser.
//! The value is read once in `main` and registered as `web::Data`; nothing here
//! mutates it.
//!
//! ## Sub-modules:
//! - `get`: serializes the shared config as camelCase JSON.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the config endpoint.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the config route.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns webhook URLs, WhatsApp number, site URL, Cal.com
///       username and analytics IDs. Unset webhooks are `null`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
