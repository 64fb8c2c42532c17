//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the site's routes.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_304_response, build_403_text_response, build_404_response, build_405_response,
    build_413_response, build_cached_response, build_health_response, build_html_response,
    build_json_response, build_options_response,
};
