// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Header gate configuration
///
/// The gate only pattern-matches request headers. Any client can set them,
/// so it must never be relied on as access control.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GateConfig {
    /// User-Agent substrings (case-insensitive) that are refused
    #[serde(default = "default_blocked_agents")]
    pub blocked_agents: Vec<String>,
    /// Headers that must be present and non-empty
    #[serde(default = "default_required_headers")]
    pub required_headers: Vec<String>,
    /// Apply the required-header rule to the content endpoint too
    #[serde(default = "default_gate_endpoint_headers")]
    pub check_endpoint_headers: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_blocked_agents() -> Vec<String> {
    vec!["curl".to_string()]
}

#[allow(clippy::missing_const_for_fn)]
fn default_required_headers() -> Vec<String> {
    vec!["accept-language".to_string(), "accept-encoding".to_string()]
}

#[allow(clippy::missing_const_for_fn)]
fn default_gate_endpoint_headers() -> bool {
    true
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            blocked_agents: default_blocked_agents(),
            required_headers: default_required_headers(),
            check_endpoint_headers: default_gate_endpoint_headers(),
        }
    }
}

/// Health check configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}
