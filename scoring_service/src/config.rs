//! Service configuration.

/// Runtime configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// `HOST` and `PORT` override the bind address; a malformed `PORT`
    /// falls back to the default rather than aborting startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| defaults.port.to_string())
            .parse::<u16>()
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// The `host:port` string passed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_bind() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8081,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }

    // Env vars are process-global, so every from_env case lives in this one
    // test to keep it independent of test ordering.
    #[test]
    fn from_env_overrides_and_fallbacks() {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8081");
        let config = Config::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);

        // Malformed port falls back to the default instead of aborting.
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env();
        assert_eq!(config.port, Config::default().port);

        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        let config = Config::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }
}
