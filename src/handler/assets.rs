//! Embedded static assets
//!
//! Assets are compiled into the binary and served ungated with `ETag` support.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};

/// Route prefix for embedded assets
pub const ASSET_PREFIX: &str = "/assets/";

const ASSETS: &[(&str, &[u8])] = &[("app.js", include_bytes!("../../assets/app.js"))];

/// Look up an embedded asset by request path
pub fn find_asset(path: &str) -> Option<&'static [u8]> {
    let name = path.strip_prefix(ASSET_PREFIX)?;
    ASSETS
        .iter()
        .find(|(asset, _)| *asset == name)
        .map(|(_, data)| *data)
}

/// Serve an embedded asset, a 304, or a 404
pub fn serve_asset(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let Some(data) = find_asset(ctx.path) else {
        return http::build_404_response();
    };

    let etag = cache::generate_etag(data);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let content_type = mime::get_content_type(mime::extension_of(ctx.path));
    http::build_cached_response(Bytes::from_static(data), content_type, &etag, ctx.is_head)
}
