//! Daemon configuration from environment variables
//!
//! All configuration is read from environment variables with sensible
//! defaults. This eliminates the need for command-line argument parsing.

use std::env;

// Default configuration values
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "data.csv";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Daemon configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// TCP port for the HTTP server
    pub port: u16,

    /// Path of the CSV backing file
    pub data_file: String,

    /// Log level
    pub log_level: String,
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: Self::parse_u16("GB_PORT").unwrap_or(DEFAULT_PORT),
            data_file: env::var("GB_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
            log_level: Self::parse_log_level(),
        }
    }

    fn parse_u16(var_name: &str) -> Option<u16> {
        env::var(var_name).ok().and_then(|s| s.parse().ok())
    }

    fn parse_log_level() -> String {
        // Priority: GB_LOG_LEVEL > RUST_LOG > default
        env::var("GB_LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data_file.is_empty() {
            return Err("GB_DATA_FILE cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to serialize tests that modify environment variables
    // This prevents race conditions when tests run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        env::remove_var("GB_PORT");
        env::remove_var("GB_DATA_FILE");
        env::remove_var("GB_LOG_LEVEL");
        env::remove_var("RUST_LOG");

        let config = DaemonConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_file, "data.csv");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_custom_port_and_data_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        env::set_var("GB_PORT", "9999");
        env::set_var("GB_DATA_FILE", "/tmp/records.csv");

        let config = DaemonConfig::from_env();
        assert_eq!(config.port, 9999);
        assert_eq!(config.data_file, "/tmp/records.csv");

        env::remove_var("GB_PORT");
        env::remove_var("GB_DATA_FILE");
    }

    #[test]
    fn test_unparseable_port_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        env::set_var("GB_PORT", "not-a-port");

        let config = DaemonConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        env::remove_var("GB_PORT");
    }

    #[test]
    fn test_log_level_priority() {
        let _lock = ENV_MUTEX.lock().unwrap();
        // GB_LOG_LEVEL takes priority
        env::set_var("GB_LOG_LEVEL", "debug");
        env::set_var("RUST_LOG", "trace");
        let config = DaemonConfig::from_env();
        assert_eq!(config.log_level, "debug");

        // RUST_LOG is fallback
        env::remove_var("GB_LOG_LEVEL");
        let config = DaemonConfig::from_env();
        assert_eq!(config.log_level, "trace");

        // Default to "info"
        env::remove_var("RUST_LOG");
        let config = DaemonConfig::from_env();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validation() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let mut config = DaemonConfig::from_env();
        assert!(config.validate().is_ok());

        config.data_file = String::new();
        assert!(config.validate().is_err());
    }
}
