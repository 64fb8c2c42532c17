//! Gated site routes
//!
//! The page and the content endpoint both run the header gate first and
//! answer with their own fixed denial when it refuses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::content::{ContentRecord, DenialBody};
use crate::gate::{AccessDecision, GateScope};
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::page;

/// Paths answered by the HTML page
pub const PAGE_PATHS: &[&str] = &["/", "/index.php", "/index.html"];

/// Paths answered by the content endpoint
pub const CONTENT_PATHS: &[&str] = &["/api.php", "/api/content"];

/// Serve the landing page, or a plain-text 403
pub fn serve_page(ctx: &RequestContext<'_>) -> (Response<Full<Bytes>>, AccessDecision) {
    let decision = ctx.state.filter.evaluate(ctx.headers, GateScope::Full);

    let response = match &decision {
        AccessDecision::Allow => {
            http::build_html_response(page::render_index(page::PAGE_TITLE), ctx.is_head)
        }
        AccessDecision::Deny(reason) => {
            logger::log_access_denied(ctx.path, &ctx.peer_addr, reason);
            http::build_403_text_response(ctx.is_head)
        }
    };

    (response, decision)
}

/// Serve the fixed content record, or the JSON denial body
pub fn serve_content(ctx: &RequestContext<'_>) -> (Response<Full<Bytes>>, AccessDecision) {
    let scope = if ctx.state.config.gate.check_endpoint_headers {
        GateScope::Full
    } else {
        GateScope::AgentOnly
    };
    let decision = ctx.state.filter.evaluate(ctx.headers, scope);

    let response = match &decision {
        AccessDecision::Allow => {
            http::build_json_response(StatusCode::OK, &ContentRecord::fixed(), ctx.is_head)
        }
        AccessDecision::Deny(reason) => {
            logger::log_access_denied(ctx.path, &ctx.peer_addr, reason);
            http::build_json_response(StatusCode::FORBIDDEN, &DenialBody::blocked(), ctx.is_head)
        }
    };

    (response, decision)
}
