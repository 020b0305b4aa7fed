pub mod config;
pub mod language;
pub mod platform;
pub mod webhook;
