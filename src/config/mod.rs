// Configuration module entry point
// Loads layered configuration and holds shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, GateConfig, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults and `SITE_*` variables still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SITE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "gated-site/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
impl Config {
    /// Defaults only, bound to an ephemeral loopback port
    pub fn for_tests() -> Self {
        let mut cfg = Self::load_from("__gated_site_no_such_config__")
            .expect("default configuration must deserialize");
        cfg.server.port = 0;
        cfg.logging.access_log = false;
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_gate_rules() {
        let cfg = Config::for_tests();
        assert_eq!(cfg.gate.blocked_agents, vec!["curl".to_string()]);
        assert_eq!(
            cfg.gate.required_headers,
            vec!["accept-language".to_string(), "accept-encoding".to_string()]
        );
        assert!(cfg.gate.check_endpoint_headers);
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_default_socket_addr() {
        let mut cfg = Config::for_tests();
        cfg.server.port = 8080;
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_socket_addr() {
        let mut cfg = Config::for_tests();
        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.starts_with("Invalid address"));
    }
}
