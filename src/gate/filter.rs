//! Header-based access filter
//!
//! Decides ALLOW or DENY from the User-Agent and the presence of a few
//! request headers. Every input here is client-controlled, so a DENY only
//! turns away clients that do not bother to set browser-like headers.

use std::fmt;

use hyper::header::{HeaderMap, USER_AGENT};

use crate::config::GateConfig;

/// Outcome of evaluating a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Which rule produced a denial
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// User-Agent contained a blocked pattern
    BlockedAgent(String),
    /// A required header was missing or empty
    MissingHeader(String),
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockedAgent(pattern) => write!(f, "user-agent matches '{pattern}'"),
            Self::MissingHeader(name) => write!(f, "missing header '{name}'"),
        }
    }
}

/// Which checks to run for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateScope {
    /// Agent check and required headers
    Full,
    /// Agent check only
    AgentOnly,
}

/// Header inspection rules
#[derive(Debug, Clone)]
pub struct AccessFilter {
    /// Lowercased patterns
    blocked_agents: Vec<String>,
    required_headers: Vec<String>,
}

impl AccessFilter {
    pub fn new(blocked_agents: &[String], required_headers: &[String]) -> Self {
        Self {
            blocked_agents: blocked_agents
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_ascii_lowercase())
                .collect(),
            required_headers: required_headers
                .iter()
                .map(|h| h.to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(&config.blocked_agents, &config.required_headers)
    }

    /// Evaluate a request's headers
    pub fn evaluate(&self, headers: &HeaderMap, scope: GateScope) -> AccessDecision {
        // Non-UTF-8 agents can still carry the pattern, so match on lossy text
        let user_agent = headers
            .get(USER_AGENT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();

        if let Some(reason) = self.check_agent(&user_agent) {
            return AccessDecision::Deny(reason);
        }

        if scope == GateScope::Full {
            if let Some(reason) = self.check_required(|name| header_present(headers, name)) {
                return AccessDecision::Deny(reason);
            }
        }

        AccessDecision::Allow
    }

    /// Case-insensitive substring match against blocked patterns
    pub fn check_agent(&self, user_agent: &str) -> Option<DenyReason> {
        let lowered = user_agent.to_ascii_lowercase();
        self.blocked_agents
            .iter()
            .find(|pattern| lowered.contains(pattern.as_str()))
            .map(|pattern| DenyReason::BlockedAgent(pattern.clone()))
    }

    /// First required header (in configured order) that is absent
    fn check_required(&self, is_present: impl Fn(&str) -> bool) -> Option<DenyReason> {
        self.required_headers
            .iter()
            .find(|name| !is_present(name))
            .map(|name| DenyReason::MissingHeader(name.clone()))
    }
}

/// Present means the header exists with a non-blank value
///
/// Any non-blank value counts, `0` included.
fn header_present(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(name)
        .iter()
        .any(|v| !v.as_bytes().iter().all(u8::is_ascii_whitespace))
}
