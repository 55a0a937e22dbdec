//! Configuration module for echo-chat.
//!
//! Supports both command-line arguments and TOML configuration file.
//! CLI arguments take precedence over config file values.

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Command-line arguments for echo-chat
#[derive(Parser, Debug)]
#[command(name = "echo-chat")]
#[command(author = "echo-chat authors")]
#[command(version = "0.1.0")]
#[command(about = "A WebSocket echo chat server and terminal client", long_about = None)]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub role: RoleArgs,
}

/// Which side of the chat to run
#[derive(Subcommand, Debug)]
pub enum RoleArgs {
    /// Run the echo server
    Server {
        /// Address to bind to (e.g., 127.0.0.1:8080)
        #[arg(short = 'l', long)]
        listen: Option<String>,
    },
    /// Run the terminal chat client
    Client {
        /// WebSocket URL of the server (e.g., ws://127.0.0.1:8080/ws)
        #[arg(short = 'u', long)]
        url: Option<String>,
    },
}

/// TOML configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server-related configuration
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// Client-related configuration
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Server URL to connect to
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Port shared by the server bind address and the client URL.
pub const DEFAULT_PORT: u16 = 8080;

fn default_listen() -> String {
    format!("127.0.0.1:{DEFAULT_PORT}")
}

fn default_url() -> String {
    format!("ws://127.0.0.1:{DEFAULT_PORT}/ws")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Role selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Server,
    Client,
}

/// Final resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub role: Role,
    pub listen: String,
    pub url: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from CLI args and optional TOML file.
    pub fn load() -> Result<Self, ConfigError> {
        let cli = CliArgs::parse();

        let toml_config = match cli.config {
            Some(ref config_path) => read_toml(config_path)?,
            None => TomlConfig::default(),
        };

        Ok(Self::merge(cli, toml_config))
    }

    /// Merge CLI args with TOML config (CLI takes precedence)
    fn merge(cli: CliArgs, toml_config: TomlConfig) -> Self {
        let (role, listen, url) = match cli.role {
            RoleArgs::Server { listen } => (Role::Server, listen, None),
            RoleArgs::Client { url } => (Role::Client, None, url),
        };

        Config {
            role,
            listen: listen.unwrap_or(toml_config.server.listen),
            url: url.unwrap_or(toml_config.client.url),
            log_level: if cli.log_level != "info" {
                cli.log_level
            } else {
                toml_config.logging.level
            },
        }
    }
}

fn read_toml(path: &Path) -> Result<TomlConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileRead(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::TomlParse(path.to_path_buf(), e))
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", .0.display())]
    FileRead(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file '{}'", .0.display())]
    TomlParse(PathBuf, #[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TomlConfig::default();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert_eq!(config.client.url, "ws://127.0.0.1:8080/ws");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_defaults_share_one_port() {
        let config = TomlConfig::default();
        let port = format!(":{DEFAULT_PORT}");
        assert!(config.server.listen.ends_with(&port));
        assert!(config.client.url.contains(&port));
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
            [server]
            listen = "0.0.0.0:9000"

            [client]
            url = "ws://chat.local:9000/ws"

            [logging]
            level = "debug"
        "#;

        let config: TomlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:9000");
        assert_eq!(config.client.url, "ws://chat.local:9000/ws");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TomlConfig = toml::from_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert_eq!(config.client.url, "ws://127.0.0.1:8080/ws");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_server_without_flags() {
        let cli = CliArgs::parse_from(["echo-chat", "server"]);
        let config = Config::merge(cli, TomlConfig::default());
        assert_eq!(config.role, Role::Server);
        assert_eq!(config.listen, "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_cli_overrides_toml() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
            [client]
            url = "ws://from-file:1/ws"

            [logging]
            level = "warn"
        "#,
        )
        .unwrap();

        let cli = CliArgs::parse_from([
            "echo-chat",
            "--log-level",
            "trace",
            "client",
            "--url",
            "ws://from-cli:2/ws",
        ]);
        let config = Config::merge(cli, toml_config);
        assert_eq!(config.role, Role::Client);
        assert_eq!(config.url, "ws://from-cli:2/ws");
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_toml_used_when_flag_absent() {
        let toml_config: TomlConfig =
            toml::from_str("[server]\nlisten = \"0.0.0.0:7000\"\n").unwrap();
        let cli = CliArgs::parse_from(["echo-chat", "server"]);
        let config = Config::merge(cli, toml_config);
        assert_eq!(config.listen, "0.0.0.0:7000");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = PathBuf::from("/nonexistent/echo-chat.toml");
        let err = read_toml(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(..)));
        assert!(err.to_string().contains("/nonexistent/echo-chat.toml"));
    }

    #[test]
    fn test_error_cause_reported_once() {
        use std::error::Error as _;

        let path = PathBuf::from("/nonexistent/echo-chat.toml");
        let err = read_toml(&path).unwrap_err();
        let cause = err.source().expect("io error kept as source").to_string();
        assert!(!err.to_string().contains(&cause));

        let parse_err = toml::from_str::<TomlConfig>("[server\n").unwrap_err();
        let err = ConfigError::TomlParse(path, parse_err);
        let cause = err.source().expect("toml error kept as source").to_string();
        assert!(!err.to_string().contains(&cause));
    }
}
