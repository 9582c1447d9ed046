//! Shelfmark — a personal bookmarking app with a card-based UI.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod card;
pub mod event_handler;
pub mod managers;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
