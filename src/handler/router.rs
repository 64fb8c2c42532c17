//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, dispatching, and access logging.

use crate::config::AppState;
use crate::gate::AccessDecision;
use crate::handler::{assets, site};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use std::net::SocketAddr;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub headers: &'a HeaderMap,
    pub if_none_match: Option<String>,
    pub peer_addr: SocketAddr,
    pub state: &'a AppState,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub fn handle_request<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let access_log = state.access_log_enabled();

    let (mut response, decision) = dispatch(req, peer_addr, state);

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if access_log {
        let mut entry = AccessLogEntry::from_request(
            peer_addr.ip().to_string(),
            req.method(),
            req.uri(),
            req.version(),
            req.headers(),
        );
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.gate = match decision {
            None => "-".to_string(),
            Some(AccessDecision::Allow) => "allow".to_string(),
            Some(AccessDecision::Deny(reason)) => format!("deny: {reason}"),
        };
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}

/// Validate the request and pick a route
///
/// Returns the gate decision for gated routes, `None` otherwise.
fn dispatch<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
) -> (Response<Full<Bytes>>, Option<AccessDecision>) {
    let method = req.method();

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return (resp, None);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(req.headers(), state.config.http.max_body_size) {
        return (resp, None);
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        headers: req.headers(),
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        peer_addr,
        state,
    };

    route_request(&ctx)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on path
fn route_request(ctx: &RequestContext<'_>) -> (Response<Full<Bytes>>, Option<AccessDecision>) {
    let health = &ctx.state.config.health;

    // 0. Health check endpoints bypass the gate
    if health.enabled && (ctx.path == health.liveness_path || ctx.path == health.readiness_path)
    {
        return (http::build_health_response("ok"), None);
    }

    // 1. Gated routes
    if site::PAGE_PATHS.iter().any(|p| *p == ctx.path) {
        let (resp, decision) = site::serve_page(ctx);
        return (resp, Some(decision));
    }
    if site::CONTENT_PATHS.iter().any(|p| *p == ctx.path) {
        let (resp, decision) = site::serve_content(ctx);
        return (resp, Some(decision));
    }

    // 2. Embedded assets
    if ctx.path.starts_with(assets::ASSET_PREFIX) {
        return (assets::serve_asset(ctx), None);
    }

    (http::build_404_response(), None)
}
