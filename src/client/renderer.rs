//! Client renderer
//!
//! Fetches the content endpoint once and turns the outcome into the two
//! pieces of markup the page shows. Any failure renders the denial text.

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT,
};
use hyper::{Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

use crate::content::ContentRecord;
use crate::page::DENIED_TEXT;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Why a fetch did not produce content
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),
    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("endpoint answered {0}")]
    Status(StatusCode),
    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("malformed content: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FetchOutcome = Result<ContentRecord, FetchError>;

/// One-shot HTTP client for the content endpoint
pub struct ContentClient {
    endpoint: Uri,
    headers: HeaderMap,
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl ContentClient {
    /// Client sending the headers a desktop browser would
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint: Uri = endpoint
            .parse()
            .map_err(|_| FetchError::InvalidEndpoint(endpoint.to_string()))?;
        if endpoint.scheme_str() != Some("http") || endpoint.host().is_none() {
            return Err(FetchError::InvalidEndpoint(endpoint.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        // Sent for the gate only; the endpoint never compresses
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

        Ok(Self {
            endpoint,
            headers,
            client: Client::builder(TokioExecutor::new()).build_http(),
        })
    }

    /// Replace or add a request header
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Drop a default request header
    #[must_use]
    pub fn without_header(mut self, name: &HeaderName) -> Self {
        self.headers.remove(name);
        self
    }

    /// Issue a single GET; no retry and no caching
    pub async fn fetch(&self) -> FetchOutcome {
        let mut builder = Request::get(self.endpoint.clone());
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(Empty::new())?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// What the `#app` container shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub heading: Option<String>,
    pub paragraph: String,
}

impl RenderedView {
    pub fn denied() -> Self {
        Self {
            heading: None,
            paragraph: DENIED_TEXT.to_string(),
        }
    }

    /// Markup for the container, with injected text escaped
    pub fn to_html(&self) -> String {
        match &self.heading {
            Some(heading) => format!(
                "<h1>{}</h1><p>{}</p>",
                escape_html(heading),
                escape_html(&self.paragraph)
            ),
            None => format!("<p>{}</p>", escape_html(&self.paragraph)),
        }
    }
}

/// Turn a fetch outcome into the view
pub fn render(outcome: &FetchOutcome) -> RenderedView {
    match outcome {
        Ok(record) => RenderedView {
            heading: Some(record.title.clone()),
            paragraph: record.content.clone(),
        },
        Err(e) => {
            crate::logger::log_warning(&format!("Content fetch failed: {e}"));
            RenderedView::denied()
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
