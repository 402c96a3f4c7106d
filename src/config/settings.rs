//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub bundle: BundleConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Where the model bundles and the helper script live
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundleConfig {
    /// Directory holding `downloads/` and the helper script
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// Overrides `<root_dir>/downloads`
    #[serde(default)]
    pub downloads_dir: Option<String>,
    /// Model identifier; auto-discovered when unset
    #[serde(default)]
    pub model_id: Option<String>,
    /// Helper script file name, relative to `root_dir`
    #[serde(default = "default_proxy_script")]
    pub proxy_script: String,
}

fn default_root_dir() -> String {
    ".".to_string()
}

fn default_proxy_script() -> String {
    "JSNetProxy.js".to_string()
}

/// HTTP layer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

const LOG_FORMATS: &[&str] = &["json", "text"];

impl Settings {
    /// Load settings from the default config file, the environment and
    /// the `PORT` / `MODEL_ID` overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from_path("config/gateway.yaml")?;
        settings.apply_env_overrides(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("MODEL_ID").ok().as_deref(),
        )?;
        Ok(settings)
    }

    /// Load settings from a specific configuration file (YAML or TOML)
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path.extension().map_or(false, |ext| ext == "yaml" || ext == "yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("bundle.root_dir", default_root_dir())?
            .set_default("bundle.proxy_script", default_proxy_script())?
            .set_default("http.max_body_bytes", default_max_body_bytes() as i64)?
            .set_default("http.cors_enabled", true)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix("BUNDLE_GATEWAY")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Apply the plain `PORT` and `MODEL_ID` variables on top of the loaded
    /// layers. Empty values count as unset.
    pub fn apply_env_overrides(&mut self, port: Option<&str>, model_id: Option<&str>) -> Result<()> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.server.port = port.parse().map_err(|_| {
                AppError::Config(config::ConfigError::Message(format!(
                    "PORT must be a valid port number, got '{}'",
                    port
                )))
            })?;
        }

        if let Some(model_id) = model_id.filter(|m| !m.is_empty()) {
            self.bundle.model_id = Some(model_id.to_string());
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.http.max_body_bytes == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "http.max_body_bytes must be greater than 0".to_string(),
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(AppError::Config(config::ConfigError::Message(format!(
                "Unknown logging.format '{}', expected one of {:?}",
                self.logging.format, LOG_FORMATS
            ))));
        }

        Ok(())
    }

    /// `host:port` the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.bundle.root_dir)
    }

    /// Directory whose subdirectories are model bundles
    pub fn downloads_path(&self) -> PathBuf {
        match &self.bundle.downloads_dir {
            Some(dir) => PathBuf::from(dir),
            None => self.root_path().join("downloads"),
        }
    }

    pub fn proxy_script_path(&self) -> PathBuf {
        self.root_path().join(&self.bundle.proxy_script)
    }

    /// Model override, ignoring empty strings
    pub fn model_override(&self) -> Option<&str> {
        self.bundle.model_id.as_deref().filter(|m| !m.is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            bundle: BundleConfig {
                root_dir: default_root_dir(),
                downloads_dir: None,
                model_id: None,
                proxy_script: default_proxy_script(),
            },
            http: HttpConfig {
                max_body_bytes: default_max_body_bytes(),
                cors_enabled: true,
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
