//! UI layer for Shelfmark.
//!
//! Only compiled with the `gui` feature; the headless core never depends
//! on a window system.

pub mod webview_app;
