// Configuration module entry point
// Layered configuration: built-in defaults, then an optional config file,
// then HEB-prefixed environment variables.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PathsConfig, PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the specified file path (without extension).
    /// The file may be absent; environment variables such as
    /// `HEB_SERVER__PORT=8080` override both file and defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("HEB").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("paths.data_file", "data/heb_data.json")?
            .set_default("paths.template_dir", "templates")?
            .set_default("paths.static_dir", "static")?
            .set_default("paths.index_file", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_config_file() {
        let cfg = Config::load_from("definitely-missing-config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.paths.data_file, "data/heb_data.json");
        assert_eq!(cfg.paths.index_file, "index.html");
        assert!(cfg.logging.access_log);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("definitely-missing-config").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_loopback());
    }
}
