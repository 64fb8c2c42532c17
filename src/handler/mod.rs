//! Request handler module
//!
//! Responsible for request routing dispatch: the gated page and content
//! endpoint, health probes, and embedded assets.

pub mod assets;
pub mod router;
pub mod site;

// Re-export main entry point
pub use router::handle_request;
