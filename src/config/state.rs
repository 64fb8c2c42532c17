// Application state module
// Shared per-process state handed to every connection

use super::types::Config;
use crate::gate::AccessFilter;

/// Application state
pub struct AppState {
    pub config: Config,
    pub filter: AccessFilter,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            filter: AccessFilter::from_config(&config.gate),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_follows_config() {
        let mut cfg = Config::for_tests();
        assert!(!AppState::new(&cfg).access_log_enabled());

        cfg.logging.access_log = true;
        assert!(AppState::new(&cfg).access_log_enabled());
    }
}
