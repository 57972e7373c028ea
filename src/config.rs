use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const DEFAULT_SMTP_PORT: u16 = 587;

/// Flat variables understood for compatibility with the usual mailer setup,
/// mapped to their config key. Port and secure flag are read leniently, see
/// [`smtp_port`] and [`smtp_secure`].
const EMAIL_OVERRIDES: [(&str, &str); 7] = [
    ("EMAIL_SERVER", "email.smtp_host"),
    ("EMAIL_PORT", "email.smtp_port"),
    ("EMAIL_SECURE", "email.smtp_secure"),
    ("EMAIL_USER", "email.smtp_username"),
    ("EMAIL_PASSWORD", "email.smtp_password"),
    ("EMAIL_FROM", "email.from_address"),
    ("EMAIL_TO", "email.contact_address"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. EMAIL_* variables (EMAIL_SERVER, EMAIL_PORT, ...)
    /// 2. Prefixed environment variables (FOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (FOLIO__EMAIL__SMTP_HOST, etc.)
        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in EMAIL_OVERRIDES {
            let Ok(value) = env::var(var) else {
                continue;
            };

            builder = match var {
                "EMAIL_PORT" => builder.set_override(key, i64::from(smtp_port(&value)))?,
                "EMAIL_SECURE" => builder.set_override(key, smtp_secure(&value))?,
                _ => builder.set_override(key, value)?,
            };
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        self.email.validate()
    }
}

/// `EMAIL_PORT` value, 587 when empty, unparsable or zero.
fn smtp_port(value: &str) -> u16 {
    value
        .trim()
        .parse()
        .ok()
        .filter(|port| *port > 0)
        .unwrap_or(DEFAULT_SMTP_PORT)
}

/// `EMAIL_SECURE` is on only for the exact value `true`.
fn smtp_secure(value: &str) -> bool {
    value == "true"
}
