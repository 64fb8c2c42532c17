//! Gated single-page site server
//!
//! Serves a page and a JSON content endpoint behind a request-header filter,
//! plus the client-side renderer and UI state for the page.

pub mod client;
pub mod config;
pub mod content;
pub mod gate;
pub mod handler;
pub mod http;
pub mod logger;
pub mod page;
pub mod server;
