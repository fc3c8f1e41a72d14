// Session issuer configuration

use crate::{log::Logger, utils::get_env_bool};

/// Session issuer configuration
#[derive(Clone)]
pub struct SessionIssuerConfiguration {
    /// True to log every issued session ID
    pub log_requests: bool,
}

impl SessionIssuerConfiguration {
    /// Loads configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `logger` - Logger to report configuration problems
    pub fn load_from_env(logger: &Logger) -> SessionIssuerConfiguration {
        let log_requests = get_env_bool("LOG_REQUESTS", true);

        if log_requests && !logger.config.info_enabled {
            logger.log_warning("LOG_REQUESTS is enabled, but LOG_INFO is disabled. Issued session IDs will not be logged.");
        }

        SessionIssuerConfiguration { log_requests }
    }
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_env() {
        let logger = Logger::new_disabled();

        std::env::set_var("LOG_REQUESTS", "no");
        let config = SessionIssuerConfiguration::load_from_env(&logger);
        assert!(!config.log_requests);

        std::env::set_var("LOG_REQUESTS", "True");
        let config = SessionIssuerConfiguration::load_from_env(&logger);
        assert!(config.log_requests);

        std::env::remove_var("LOG_REQUESTS");
        let config = SessionIssuerConfiguration::load_from_env(&logger);
        assert!(config.log_requests);
    }
}
